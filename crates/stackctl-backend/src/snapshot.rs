//! Stack state snapshots
//!
//! A snapshot records a stack's configuration and its resources in creation
//! order. Snapshots are stored as pretty-printed JSON.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use stackctl_core::{Error, Result};
use std::collections::BTreeMap;
use std::fs;

/// Recorded state of a stack
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Stack configuration keys
    #[serde(default)]
    pub config: BTreeMap<String, String>,

    /// Resources in creation order
    #[serde(default)]
    pub resources: Vec<ResourceState>,
}

/// A single managed resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceState {
    /// Unique resource name
    pub urn: String,

    /// Resource type token (e.g. "aws:s3/bucket:Bucket")
    #[serde(rename = "type")]
    pub kind: String,

    /// URNs this resource depends on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

impl ResourceState {
    pub fn new(urn: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            urn: urn.into(),
            kind: kind.into(),
            dependencies: Vec::new(),
        }
    }

    pub fn depends_on(mut self, urn: impl Into<String>) -> Self {
        self.dependencies.push(urn.into());
        self
    }
}

impl Snapshot {
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write the snapshot, replacing the previous file in one rename
    pub fn save(&self, path: &Utf8Path) -> Result<()> {
        let parent = path
            .parent()
            .ok_or_else(|| Error::invalid_project(format!("snapshot path {} has no parent", path)))?;
        fs::create_dir_all(parent)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(self)?)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Resources in the order they must be deleted
    pub fn deletion_order(&self) -> Vec<ResourceState> {
        self.resources.iter().rev().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deletion_order_reverses_creation_order() {
        let snapshot = Snapshot {
            config: BTreeMap::new(),
            resources: vec![
                ResourceState::new("vpc", "net:Vpc"),
                ResourceState::new("subnet", "net:Subnet").depends_on("vpc"),
                ResourceState::new("vm", "compute:Instance").depends_on("subnet"),
            ],
        };
        let order: Vec<_> = snapshot
            .deletion_order()
            .into_iter()
            .map(|r| r.urn)
            .collect();
        assert_eq!(order, vec!["vm", "subnet", "vpc"]);
    }

    #[test]
    fn test_parse_snapshot_json() {
        let json = r#"{
  "config": { "region": "eu-west-1" },
  "resources": [
    { "urn": "bucket", "type": "aws:s3/bucket:Bucket" },
    { "urn": "policy", "type": "aws:s3/bucketPolicy:BucketPolicy", "dependencies": ["bucket"] }
  ]
}"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.config.get("region").map(String::as_str), Some("eu-west-1"));
        assert_eq!(snapshot.resources.len(), 2);
        assert_eq!(snapshot.resources[1].dependencies, vec!["bucket"]);
    }

    #[test]
    fn test_empty_object_is_empty_snapshot() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }
}
