//! Terminal output utilities

use console::style;

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print a hint
pub fn hint(msg: &str) {
    eprintln!("{} {}", style("ℹ").blue().bold(), msg);
}
