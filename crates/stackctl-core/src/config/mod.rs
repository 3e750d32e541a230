//! Project descriptor loading
//!
//! A project is the directory tree rooted at the nearest `stackctl.yaml`.

mod loader;

pub use loader::{BackendSection, Project, ProjectFile, BACKEND_DIR_ENV, DEFAULT_BACKEND_DIR};
