//! CLI command implementations

pub mod destroy;
