pub mod filter;
pub mod registry;
pub mod status;
