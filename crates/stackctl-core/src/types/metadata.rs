//! Update metadata attached to a destroy operation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Environment key for the HEAD commit of the project's git work tree
pub const GIT_HEAD: &str = "git.head";
/// Environment key for the checked-out branch
pub const GIT_BRANCH: &str = "git.branch";
/// Environment key recording uncommitted changes ("true"/"false")
pub const GIT_DIRTY: &str = "git.dirty";
/// Environment key for the HEAD commit author
pub const GIT_AUTHOR: &str = "git.author";
/// Environment key naming the detected CI system
pub const CI_SYSTEM: &str = "ci.system";
/// Environment key for the CI build identifier
pub const CI_BUILD: &str = "ci.build";

/// Metadata describing who ran an update and from where
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMetadata {
    /// Operator-supplied message (may be empty)
    pub message: String,

    /// Collected environment facts, keyed by dotted names
    #[serde(default)]
    pub environment: BTreeMap<String, String>,
}

impl UpdateMetadata {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            environment: BTreeMap::new(),
        }
    }

    /// Record an environment fact, replacing any previous value
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.environment.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.environment.get(key).map(String::as_str)
    }
}
