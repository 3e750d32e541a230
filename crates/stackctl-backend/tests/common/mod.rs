//! Common fixtures for stackctl-backend integration tests

use camino::{Utf8Path, Utf8PathBuf};
use stackctl_backend::{LocalStackStore, ResourceState, Snapshot};
use stackctl_core::config::{BackendSection, ProjectFile};
use stackctl_core::types::StackName;
use stackctl_core::Project;
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

/// A throwaway project with a local backend directory
pub struct Fixture {
    _temp: TempDir,
    pub root: Utf8PathBuf,
    pub backend_dir: Utf8PathBuf,
    pub project: Project,
}

impl Fixture {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let root =
            Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("Invalid UTF-8 path");
        let backend_dir = root.join(".stackctl");
        fs::create_dir_all(&backend_dir).unwrap();

        let project = Project {
            file: ProjectFile {
                name: "webapp".to_string(),
                description: None,
                backend: BackendSection::default(),
            },
            path: root.join("stackctl.yaml"),
            root: root.clone(),
        };

        Self {
            _temp: temp,
            root,
            backend_dir,
            project,
        }
    }

    pub fn store(&self) -> LocalStackStore {
        LocalStackStore::new(self.backend_dir.clone())
    }

    /// Write a snapshot for `name` and return its path
    pub fn seed_stack(&self, name: &str, snapshot: &Snapshot) -> Utf8PathBuf {
        let path = self.store().snapshot_path(&StackName::parse(name).unwrap());
        snapshot.save(&path).unwrap();
        path
    }

    pub fn select(&self, name: &str) {
        fs::write(
            self.backend_dir.join("workspace.yaml"),
            format!("current: {}\n", name),
        )
        .unwrap();
    }
}

/// A three-resource snapshot: vpc <- subnet <- instance
pub fn web_snapshot() -> Snapshot {
    Snapshot {
        config: BTreeMap::from([("region".to_string(), "eu-west-1".to_string())]),
        resources: vec![
            ResourceState::new("vpc", "net:Vpc"),
            ResourceState::new("subnet", "net:Subnet").depends_on("vpc"),
            ResourceState::new("instance", "compute:Instance").depends_on("subnet"),
        ],
    }
}

#[allow(dead_code)]
pub fn load(path: &Utf8Path) -> Snapshot {
    Snapshot::load(path).unwrap()
}
