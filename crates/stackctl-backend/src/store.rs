//! File-backed stack store
//!
//! Layout under the backend directory:
//!
//! ```text
//! workspace.yaml        # current: <stack>
//! stacks/<name>.json    # one snapshot per stack
//! history/<name>.jsonl  # update history (see history.rs)
//! ```

use crate::traits::StackStore;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use stackctl_core::types::{StackHandle, StackName};
use stackctl_core::Result;
use std::fs;
use tracing::debug;

const WORKSPACE_FILE: &str = "workspace.yaml";
const STACKS_DIR: &str = "stacks";

/// Selection state stored in `workspace.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceFile {
    #[serde(default)]
    pub current: Option<String>,
}

/// Stack store rooted at a local directory
#[derive(Debug, Clone)]
pub struct LocalStackStore {
    dir: Utf8PathBuf,
}

impl LocalStackStore {
    pub fn new(dir: impl Into<Utf8PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Where the snapshot for `name` lives
    pub fn snapshot_path(&self, name: &StackName) -> Utf8PathBuf {
        self.dir.join(STACKS_DIR).join(format!("{}.json", name))
    }

    fn workspace_path(&self) -> Utf8PathBuf {
        self.dir.join(WORKSPACE_FILE)
    }
}

impl StackStore for LocalStackStore {
    fn current(&self) -> Result<Option<StackName>> {
        let path = self.workspace_path();
        if !path.is_file() {
            debug!("no workspace file at {}", path);
            return Ok(None);
        }

        let workspace: WorkspaceFile = serde_yaml_ng::from_str(&fs::read_to_string(&path)?)?;
        match workspace.current.as_deref() {
            None | Some("") => Ok(None),
            Some(name) => StackName::parse(name).map(Some),
        }
    }

    fn get(&self, name: &StackName) -> Result<Option<StackHandle>> {
        let path = self.snapshot_path(name);
        if path.is_file() {
            Ok(Some(StackHandle::new(name.clone(), path.as_str())))
        } else {
            debug!("no snapshot for stack '{}' at {}", name, path);
            Ok(None)
        }
    }
}
