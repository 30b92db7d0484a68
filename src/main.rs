use clap::Parser;
use pathmark::cli::commands::Cli;
use pathmark::cli::handlers;
use tracing_subscriber::EnvFilter;

/// Log to stderr, filtered by RUST_LOG. The TUI owns the terminal, so it
/// stays silent unless asked.
fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(if cli.command.is_none() { "off" } else { "warn" });

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
