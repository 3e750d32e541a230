//! Collaborator trait definitions

use async_trait::async_trait;
use camino::Utf8Path;
use stackctl_core::types::{
    DestroyOptions, DisplayOptions, PreviewBehavior, StackHandle, StackName, UpdateMetadata,
};
use stackctl_core::{CancellationScope, EngineError, Project, Result};

/// Read-only view of the stacks a backend knows about
pub trait StackStore: Send + Sync {
    /// Currently selected stack, if any
    fn current(&self) -> Result<Option<StackName>>;

    /// Look up a stack by name
    fn get(&self, name: &StackName) -> Result<Option<StackHandle>>;
}

/// Collects metadata about the environment an update runs from
#[async_trait]
pub trait MetadataGatherer: Send + Sync {
    async fn gather(&self, message: &str, root: &Utf8Path) -> anyhow::Result<UpdateMetadata>;
}

/// Everything the engine needs besides the stack and cancellation scope
#[derive(Debug, Clone, Copy)]
pub struct DestroyRequest<'a> {
    pub project: &'a Project,
    pub root: &'a Utf8Path,
    pub metadata: &'a UpdateMetadata,
    pub options: &'a DestroyOptions,
    pub behavior: PreviewBehavior,
    pub display: &'a DisplayOptions,
}

/// Computes and applies the deletion of every resource in a stack
#[async_trait]
pub trait DestroyEngine: Send + Sync {
    /// Destroy the stack's resources. Implementations must watch `scope` and
    /// return [`EngineError::Cancelled`] promptly once it fires.
    async fn destroy(
        &self,
        stack: &StackHandle,
        request: DestroyRequest<'_>,
        scope: &CancellationScope,
    ) -> std::result::Result<(), EngineError>;
}
