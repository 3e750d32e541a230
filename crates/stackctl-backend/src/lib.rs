//! Backend adapters for stackctl
//!
//! This crate defines the collaborator contracts the destroy command relies
//! on and ships local implementations of each:
//!
//! - [`StackStore`]: name to stack lookup ([`LocalStackStore`])
//! - [`MetadataGatherer`]: project root to update metadata ([`GitMetadataGatherer`])
//! - [`DestroyEngine`]: resource deletion ([`LocalEngine`])

pub mod engine;
pub mod history;
pub mod metadata;
mod render;
pub mod resolve;
pub mod snapshot;
pub mod store;
pub mod traits;

pub use engine::LocalEngine;
pub use history::{UpdateHistory, UpdateRecord, UpdateResult};
pub use metadata::GitMetadataGatherer;
pub use resolve::require_stack;
pub use snapshot::{ResourceState, Snapshot};
pub use store::LocalStackStore;
pub use traits::{DestroyEngine, DestroyRequest, MetadataGatherer, StackStore};
