//! Stack resolution

use crate::traits::StackStore;
use stackctl_core::types::{StackHandle, StackName};
use stackctl_core::{Error, Result};
use tracing::debug;

/// Map the `--stack` value (empty for the ambient selection) to a handle.
///
/// Stacks are never created here; a missing stack is an error. A name no
/// stack could have is reported as not found.
pub fn require_stack(store: &dyn StackStore, requested: &str) -> Result<StackHandle> {
    let name = if requested.is_empty() {
        store.current()?.ok_or_else(Error::no_stack_selected)?
    } else {
        StackName::parse(requested).map_err(|_| Error::stack_not_found(requested))?
    };

    debug!("resolving stack '{}'", name);
    store
        .get(&name)?
        .ok_or_else(|| Error::stack_not_found(name.as_str()))
}
