//! Destroy invocation and outcome translation

use stackctl_backend::{DestroyEngine, DestroyRequest, MetadataGatherer};
use stackctl_core::types::{PreviewBehavior, StackHandle};
use stackctl_core::{CancellationScope, EngineError, Error, Project, Result};
use std::time::Duration;
use tracing::{debug, warn};

use super::DestroyConfig;

/// How long the engine may keep running after cancellation is observed
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_secs(30);

/// Assembles options and drives a single engine call
pub struct DestroyInvoker<'a> {
    gatherer: &'a dyn MetadataGatherer,
    engine: &'a dyn DestroyEngine,
    grace_period: Duration,
}

impl<'a> DestroyInvoker<'a> {
    pub fn new(gatherer: &'a dyn MetadataGatherer, engine: &'a dyn DestroyEngine) -> Self {
        Self {
            gatherer,
            engine,
            grace_period: DEFAULT_GRACE_PERIOD,
        }
    }

    pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    pub async fn invoke(
        &self,
        config: &DestroyConfig,
        project: &Project,
        stack: &StackHandle,
        behavior: PreviewBehavior,
        interactive: bool,
        scope: &CancellationScope,
    ) -> Result<()> {
        let options = config.destroy_options();
        let display_options = config.display_options(interactive);
        debug!(?options, ?display_options, "assembled destroy options");

        let metadata = self
            .gatherer
            .gather(&config.message, project.root())
            .await
            .map_err(Error::metadata_gather)?;

        if scope.is_cancelled() {
            return Err(Error::DestroyCancelled);
        }

        let request = DestroyRequest {
            project,
            root: project.root(),
            metadata: &metadata,
            options: &options,
            behavior,
            display: &display_options,
        };

        let engine_call = self.engine.destroy(stack, request, scope);
        tokio::pin!(engine_call);

        let mut cancel_observed = false;
        let outcome = tokio::select! {
            biased;
            _ = scope.cancelled() => {
                cancel_observed = true;
                warn!(
                    "cancellation requested; waiting up to {}s for the engine to stop",
                    self.grace_period.as_secs()
                );
                match tokio::time::timeout(self.grace_period, &mut engine_call).await {
                    Ok(outcome) => outcome,
                    Err(_) => {
                        warn!("engine did not stop within the grace period");
                        Err(EngineError::Cancelled)
                    }
                }
            }
            outcome = &mut engine_call => outcome,
        };

        translate(outcome, cancel_observed)
    }
}

/// Map the engine's outcome to the command result. Cancellation observed
/// while the call was outstanding always wins.
pub fn translate(
    outcome: std::result::Result<(), EngineError>,
    cancel_observed: bool,
) -> Result<()> {
    match outcome {
        _ if cancel_observed => Err(Error::DestroyCancelled),
        Ok(()) => Ok(()),
        Err(EngineError::Cancelled) => Err(Error::DestroyCancelled),
        Err(EngineError::Failed(e)) => Err(Error::Engine(e)),
    }
}
