//! Immutable option values passed to the destroy engine

use crate::error::{Error, Result};
use std::str::FromStr;

/// Execution options for a destroy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestroyOptions {
    /// Analyzers to run, in the order given
    pub analyzers: Vec<String>,

    /// Requested parallelism as given on the command line
    pub parallel: i32,

    /// Emit detailed debugging output during resource operations
    pub debug: bool,
}

impl DestroyOptions {
    /// Concurrency bound derived from `parallel`; values <= 1 run serially
    pub fn parallelism(&self) -> Parallelism {
        if self.parallel > 1 {
            Parallelism::Bounded(self.parallel as usize)
        } else {
            Parallelism::Serial
        }
    }
}

/// How many resource operations may be in flight at once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parallelism {
    Serial,
    Bounded(usize),
}

impl Parallelism {
    /// Maximum operations in flight
    pub fn limit(&self) -> usize {
        match self {
            Parallelism::Serial => 1,
            Parallelism::Bounded(n) => *n,
        }
    }
}

/// Terminal colour handling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Always emit ANSI styling
    Always,
    /// Never emit ANSI styling
    Never,
    /// Plain, undecorated line output (no styling, no progress bars)
    Raw,
    /// Follow terminal detection
    #[default]
    Auto,
}

impl ColorMode {
    pub const CHOICES: &'static [&'static str] = &["always", "never", "raw", "auto"];

    /// Forced styling decision, or `None` to defer to terminal detection
    pub fn styling(&self) -> Option<bool> {
        match self {
            ColorMode::Always => Some(true),
            ColorMode::Never | ColorMode::Raw => Some(false),
            ColorMode::Auto => None,
        }
    }

    /// Whether progress decorations may be drawn
    pub fn allows_decorations(&self) -> bool {
        !matches!(self, ColorMode::Raw)
    }
}

impl FromStr for ColorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            "raw" => Ok(ColorMode::Raw),
            "auto" => Ok(ColorMode::Auto),
            other => Err(Error::invalid_option("color", other, Self::CHOICES)),
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Always => write!(f, "always"),
            ColorMode::Never => write!(f, "never"),
            ColorMode::Raw => write!(f, "raw"),
            ColorMode::Auto => write!(f, "auto"),
        }
    }
}

/// Rendering options consumed by the engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub color: ColorMode,
    pub show_config: bool,
    pub show_replacement_steps: bool,
    pub show_same_resources: bool,
    pub is_interactive: bool,
    pub diff_display: bool,
    pub debug: bool,
}
