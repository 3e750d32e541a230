//! Local destroy engine
//!
//! Deletes the resources recorded in a local snapshot. Resources are removed
//! in reverse creation order, in waves no larger than the requested
//! parallelism; the snapshot is persisted after every wave so an interrupted
//! destroy leaves an accurate record of what is still present.

use crate::history::{UpdateHistory, UpdateRecord, UpdateResult};
use crate::render::Renderer;
use crate::snapshot::{ResourceState, Snapshot};
use crate::traits::{DestroyEngine, DestroyRequest};
use anyhow::Context;
use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use stackctl_core::types::StackHandle;
use stackctl_core::{CancellationScope, EngineError};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Engine operating on snapshots from a [`crate::LocalStackStore`]
#[derive(Debug, Clone)]
pub struct LocalEngine {
    history: UpdateHistory,
}

impl LocalEngine {
    pub fn new(backend_dir: impl Into<Utf8PathBuf>) -> Self {
        let backend_dir = backend_dir.into();
        Self {
            history: UpdateHistory::new(&backend_dir),
        }
    }

    async fn apply(
        &self,
        snapshot: &mut Snapshot,
        path: &Utf8Path,
        plan: &[ResourceState],
        request: &DestroyRequest<'_>,
        renderer: &mut Renderer<'_>,
        scope: &CancellationScope,
    ) -> (usize, Result<(), EngineError>) {
        let limit = request.options.parallelism().limit();
        debug!("applying destroy of {} resources, {} at a time", plan.len(), limit);

        renderer.start_progress(plan.len());
        let mut removed = 0;

        for wave in plan.chunks(limit) {
            if scope.is_cancelled() {
                renderer.stop_progress();
                info!("destroy interrupted after {} of {} resources", removed, plan.len());
                return (removed, Err(EngineError::Cancelled));
            }

            let urns: HashSet<&str> = wave.iter().map(|r| r.urn.as_str()).collect();
            snapshot.resources.retain(|r| !urns.contains(r.urn.as_str()));
            if let Err(e) = snapshot.save(path) {
                renderer.stop_progress();
                let err = anyhow::Error::from(e).context(format!("persisting snapshot {}", path));
                return (removed, Err(EngineError::Failed(err)));
            }

            for resource in wave {
                if request.options.debug {
                    debug!(urn = %resource.urn, kind = %resource.kind, "deleted resource");
                }
                renderer.deleted(resource);
            }
            removed += wave.len();
            renderer.advance(wave.len());

            tokio::task::yield_now().await;
        }

        renderer.stop_progress();
        (removed, Ok(()))
    }
}

#[async_trait]
impl DestroyEngine for LocalEngine {
    async fn destroy(
        &self,
        stack: &StackHandle,
        request: DestroyRequest<'_>,
        scope: &CancellationScope,
    ) -> Result<(), EngineError> {
        let path = Utf8Path::new(stack.location());
        let mut snapshot = Snapshot::load(path)
            .with_context(|| format!("loading snapshot for stack '{}'", stack.name()))?;

        info!(
            "destroying stack '{}' of project '{}' ({})",
            stack.name(),
            request.project.name(),
            request.behavior
        );
        for analyzer in request.options.analyzers.iter() {
            warn!(
                "analyzer '{}' is not available to the local engine; skipping",
                analyzer
            );
        }

        let mut renderer = Renderer::new(request.display);
        if request.display.show_config {
            renderer.config(&snapshot.config);
        }

        let plan = snapshot.deletion_order();
        if request.behavior.renders_preview() {
            renderer.plan(stack.name(), &plan);
        }
        if !request.behavior.applies() {
            debug!("preview only; leaving stack untouched");
            return Ok(());
        }

        let (removed, outcome) = self
            .apply(&mut snapshot, path, &plan, &request, &mut renderer, scope)
            .await;

        let result = match &outcome {
            Ok(()) => UpdateResult::Succeeded,
            Err(EngineError::Cancelled) => UpdateResult::Cancelled,
            Err(EngineError::Failed(_)) => UpdateResult::Failed,
        };
        let record = UpdateRecord::destroy(stack.name(), request.metadata, removed, result);
        if let Err(e) = self.history.append(&record) {
            warn!("failed to record update history: {}", e);
        }

        if outcome.is_ok() {
            renderer.finished(stack.name(), removed);
        }
        outcome
    }
}
