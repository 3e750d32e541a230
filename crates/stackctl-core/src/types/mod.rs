//! Value types shared between the CLI and the destroy engine

mod metadata;
mod options;
mod preview;
mod stack;

pub use metadata::*;
pub use options::*;
pub use preview::*;
pub use stack::*;
