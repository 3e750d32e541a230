//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};

// Re-export command types for convenience
pub use crate::commands::destroy::DestroyArgs;

/// Words people reach for when they mean `destroy`
const DESTROY_SUGGEST_FOR: &[&str] = &["delete", "down", "kill", "remove", "rm", "stop"];

const DESTROY_LONG_ABOUT: &str = "Destroy an existing stack and its resources

This command deletes an entire existing stack by name. The current state is
loaded from the stack's snapshot in the backend. After running to completion,
all of this stack's resources and associated state will be gone.

Warning: although old snapshots can be used to recreate a stack, this command
is generally irreversible and should be used with great care.";

/// stackctl - manage deployed stacks
#[derive(Parser, Debug)]
#[command(name = "stackctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Run as if started in this directory
    #[arg(short = 'C', long, global = true)]
    pub cwd: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Destroy an existing stack and its resources
    #[command(long_about = DESTROY_LONG_ABOUT)]
    Destroy(DestroyArgs),
}

/// Parse the process arguments, exiting with status 1 on any usage error
pub fn parse_or_exit() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            if err.kind() == ErrorKind::InvalidSubcommand {
                if let Some(ContextValue::String(word)) = err.get(ContextKind::InvalidSubcommand) {
                    if let Some(command) = suggest_for(word) {
                        crate::output::hint(&format!(
                            "'{}' is not a command; did you mean 'stackctl {}'?",
                            word, command
                        ));
                    }
                }
            }
            std::process::exit(code)
        }
    }
}

/// Map a mistyped subcommand to the command it most likely meant
pub fn suggest_for(word: &str) -> Option<&'static str> {
    DESTROY_SUGGEST_FOR
        .contains(&word)
        .then_some("destroy")
}
