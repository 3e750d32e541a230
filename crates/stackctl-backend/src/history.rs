//! Update history
//!
//! Every applied destroy appends one JSON line to `history/<stack>.jsonl`.

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stackctl_core::types::{StackName, UpdateMetadata};
use stackctl_core::{Error, Result};
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;

const HISTORY_DIR: &str = "history";

/// How an update ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateResult {
    Succeeded,
    Failed,
    Cancelled,
}

/// One history entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRecord {
    pub timestamp: DateTime<Utc>,
    pub kind: String,
    pub stack: String,
    pub message: String,
    #[serde(default)]
    pub environment: BTreeMap<String, String>,
    pub resources_removed: usize,
    pub result: UpdateResult,
}

impl UpdateRecord {
    pub fn destroy(
        stack: &StackName,
        metadata: &UpdateMetadata,
        resources_removed: usize,
        result: UpdateResult,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            kind: "destroy".to_string(),
            stack: stack.to_string(),
            message: metadata.message.clone(),
            environment: metadata.environment.clone(),
            resources_removed,
            result,
        }
    }
}

/// Append-only history store
#[derive(Debug, Clone)]
pub struct UpdateHistory {
    dir: Utf8PathBuf,
}

impl UpdateHistory {
    /// History kept under `<backend_dir>/history`
    pub fn new(backend_dir: &Utf8Path) -> Self {
        Self {
            dir: backend_dir.join(HISTORY_DIR),
        }
    }

    fn path(&self, stack: &str) -> Utf8PathBuf {
        self.dir.join(format!("{}.jsonl", stack))
    }

    pub fn append(&self, record: &UpdateRecord) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path(&record.stack))?;
        writeln!(file, "{}", serde_json::to_string(record)?)?;
        Ok(())
    }

    /// All records for a stack, oldest first
    pub fn read(&self, stack: &StackName) -> Result<Vec<UpdateRecord>> {
        let path = self.path(stack.as_str());
        if !path.is_file() {
            return Ok(Vec::new());
        }
        fs::read_to_string(&path)?
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str::<UpdateRecord>(line).map_err(Error::from))
            .collect()
    }
}
