use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pathmark", about = concat!("pathmark v", env!("CARGO_PKG_VERSION"), " - bookmarks for your file browser"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different saved-paths file
    #[arg(long, global = true, value_name = "FILE")]
    pub store: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all paths grouped by category
    List,
    /// Search paths by name or path (case-insensitive)
    Search(SearchArgs),
    /// Add a custom path
    Add(AddArgs),
    /// Remove a custom path
    Rm(RmArgs),
    /// Open a path in the file browser
    Open(OpenArgs),
    /// Show the total number of paths
    Count,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in names and paths
    pub text: String,
}

#[derive(Args)]
pub struct AddArgs {
    /// Directory to add (resolved to an absolute path)
    pub path: String,
}

#[derive(Args)]
pub struct RmArgs {
    /// Path of the custom entry to remove
    pub path: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct OpenArgs {
    /// Path or name of the entry to open
    pub target: String,
}
