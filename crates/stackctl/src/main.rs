//! stackctl CLI - safe destruction of deployed stacks
//!
//! This is the main entry point for the stackctl command-line interface.

mod cli;
mod commands;
mod interrupt;
mod output;

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Commands;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI args; every parse failure exits with the same code
    let cli = cli::parse_or_exit();

    // Initialize tracing
    let verbose = match &cli.command {
        Commands::Destroy(args) if args.debug => cli.verbose.max(1),
        _ => cli.verbose,
    };
    init_tracing(verbose, cli.quiet);

    // Run command
    match cli.command {
        Commands::Destroy(args) => commands::destroy::run(args, cli.cwd.as_deref()).await,
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // Warnings by default; engine progress is rendered directly
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
