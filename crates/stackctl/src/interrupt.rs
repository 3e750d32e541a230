//! Ctrl-C handling
//!
//! The first interrupt cancels the invocation's scope so the engine can stop
//! cleanly. A second interrupt exits immediately.

use stackctl_core::CancellationScope;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::output;

/// Listen for interrupts on behalf of `scope`
pub fn install(scope: CancellationScope) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            debug!("unable to listen for interrupts: {}", e);
            return;
        }
        scope.cancel();
        output::warning(
            "Interrupt received; stopping after in-flight operations. Press Ctrl-C again to exit immediately.",
        );

        if tokio::signal::ctrl_c().await.is_ok() {
            output::error("Forced exit; the stack may be partially destroyed");
            std::process::exit(1);
        }
    })
}
