//! # stackctl-core
//!
//! Core library for the stackctl CLI providing:
//! - The destroy error taxonomy and exit classification
//! - Immutable option values handed to the destroy engine
//! - Preview policy and colour mode parsing
//! - Interactivity resolution
//! - A process-wide cancellation scope
//! - Project descriptor (stackctl.yaml) discovery and loading

pub mod cancel;
pub mod config;
pub mod error;
pub mod interactive;
pub mod types;

pub use cancel::CancellationScope;
pub use config::Project;
pub use error::{EngineError, Error, ExitClass, Result};
