pub mod builtin;
pub mod config;
pub mod entry;

pub use builtin::*;
pub use config::*;
pub use entry::*;
