//! Project descriptor discovery and parsing

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::debug;

/// Project file names to search for
const PROJECT_FILE_NAMES: &[&str] = &["stackctl.yaml", "stackctl.yml"];

/// Backend directory used when the project does not name one
pub const DEFAULT_BACKEND_DIR: &str = ".stackctl";

/// Environment variable overriding the backend directory
pub const BACKEND_DIR_ENV: &str = "STACKCTL_BACKEND_DIR";

/// On-disk shape of `stackctl.yaml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFile {
    /// Project name
    pub name: String,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Where stack state lives
    #[serde(default)]
    pub backend: BackendSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSection {
    /// Backend directory, relative to the project root unless absolute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Utf8PathBuf>,
}

/// A loaded project descriptor and its location
#[derive(Debug, Clone)]
pub struct Project {
    /// The parsed descriptor
    pub file: ProjectFile,

    /// Path to the descriptor
    pub path: Utf8PathBuf,

    /// Directory containing the descriptor
    pub root: Utf8PathBuf,
}

impl Project {
    /// Load a descriptor from an explicit path
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::project_not_found(path.as_str())
            } else {
                Error::Io(e)
            }
        })?;
        Self::from_content(path.to_owned(), &content)
    }

    /// Find the nearest descriptor at or above `start` (default: cwd)
    pub fn discover(start: Option<&Utf8Path>) -> Result<Self> {
        let start = match start {
            Some(dir) => dir.to_owned(),
            None => {
                let cwd = std::env::current_dir()?;
                Utf8PathBuf::try_from(cwd).map_err(|_| {
                    Error::invalid_project("current directory path is not valid UTF-8")
                })?
            }
        };

        let mut current = start.as_path();
        loop {
            for name in PROJECT_FILE_NAMES {
                let candidate = current.join(name);
                if candidate.is_file() {
                    debug!("found project descriptor at {}", candidate);
                    return Self::load(&candidate);
                }
            }
            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Err(Error::project_not_found(format!(
            "stackctl.yaml (searched {} and parent directories)",
            start
        )))
    }

    fn from_content(path: Utf8PathBuf, content: &str) -> Result<Self> {
        let file: ProjectFile = serde_yaml_ng::from_str(content)?;
        if file.name.trim().is_empty() {
            return Err(Error::invalid_project(format!(
                "{}: 'name' must not be empty",
                path
            )));
        }

        let root = path
            .parent()
            .filter(|p| !p.as_str().is_empty())
            .map(|p| p.to_owned())
            .unwrap_or_else(|| Utf8PathBuf::from("."));

        Ok(Self { file, path, root })
    }

    pub fn name(&self) -> &str {
        &self.file.name
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Backend directory, honouring `STACKCTL_BACKEND_DIR`
    pub fn backend_dir(&self) -> Utf8PathBuf {
        if let Ok(dir) = std::env::var(BACKEND_DIR_ENV) {
            if !dir.is_empty() {
                return Utf8PathBuf::from(dir);
            }
        }
        match &self.file.backend.path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.root.join(path),
            None => self.root.join(DEFAULT_BACKEND_DIR),
        }
    }
}
