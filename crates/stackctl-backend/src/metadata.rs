//! Update metadata gathering from git and CI environments

use crate::traits::MetadataGatherer;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use camino::Utf8Path;
use stackctl_core::types::{
    UpdateMetadata, CI_BUILD, CI_SYSTEM, GIT_AUTHOR, GIT_BRANCH, GIT_DIRTY, GIT_HEAD,
};
use tokio::process::Command;
use tracing::debug;

/// Known CI systems: (marker variable, display name, build id variable)
const CI_SYSTEMS: &[(&str, &str, &str)] = &[
    ("GITHUB_ACTIONS", "GitHub Actions", "GITHUB_RUN_ID"),
    ("GITLAB_CI", "GitLab CI", "CI_PIPELINE_ID"),
    ("BUILDKITE", "Buildkite", "BUILDKITE_BUILD_NUMBER"),
    ("CIRCLECI", "CircleCI", "CIRCLE_BUILD_NUM"),
    ("TRAVIS", "Travis CI", "TRAVIS_BUILD_NUMBER"),
    ("TF_BUILD", "Azure Pipelines", "BUILD_BUILDID"),
    ("JENKINS_URL", "Jenkins", "BUILD_NUMBER"),
];

/// Gathers git work-tree facts and CI context
#[derive(Debug, Clone, Default)]
pub struct GitMetadataGatherer;

impl GitMetadataGatherer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MetadataGatherer for GitMetadataGatherer {
    async fn gather(&self, message: &str, root: &Utf8Path) -> Result<UpdateMetadata> {
        let meta = tokio::fs::metadata(root)
            .await
            .with_context(|| format!("reading project root {}", root))?;
        if !meta.is_dir() {
            bail!("project root {} is not a directory", root);
        }

        let mut metadata = UpdateMetadata::new(message);

        if git(root, &["rev-parse", "--is-inside-work-tree"]).await.as_deref() == Some("true") {
            if let Some(head) = git(root, &["rev-parse", "HEAD"]).await {
                metadata.insert(GIT_HEAD, head);
            }
            if let Some(branch) = git(root, &["rev-parse", "--abbrev-ref", "HEAD"]).await {
                metadata.insert(GIT_BRANCH, branch);
            }
            if let Some(author) = git(root, &["log", "-1", "--format=%an <%ae>"]).await {
                metadata.insert(GIT_AUTHOR, author);
            }
            let status = git_output(root, &["status", "--porcelain"]).await;
            record_dirty(&mut metadata, status);
        } else {
            debug!("{} is not inside a git work tree", root);
        }

        if let Some((system, build)) = detect_ci(|var| std::env::var(var).ok()) {
            metadata.insert(CI_SYSTEM, system);
            if let Some(build) = build {
                metadata.insert(CI_BUILD, build);
            }
        }

        Ok(metadata)
    }
}

/// Run git in `root`; `None` on failure or empty output
async fn git(root: &Utf8Path, args: &[&str]) -> Option<String> {
    git_output(root, args).await.filter(|text| !text.is_empty())
}

/// Run git in `root`; `None` only when git could not run or exited non-zero
async fn git_output(root: &Utf8Path, args: &[&str]) -> Option<String> {
    debug!("Running: git {}", args.join(" "));
    let output = Command::new("git")
        .args(args)
        .current_dir(root)
        .output()
        .await
        .ok()?;
    if !output.status.success() {
        debug!("git {} exited with {}", args.join(" "), output.status);
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Record `git.dirty` from `git status --porcelain` output. A failed status
/// leaves the key unset rather than claiming a clean tree.
fn record_dirty(metadata: &mut UpdateMetadata, status: Option<String>) {
    if let Some(status) = status {
        metadata.insert(GIT_DIRTY, (!status.is_empty()).to_string());
    }
}

/// Identify the CI system from environment lookups
fn detect_ci(lookup: impl Fn(&str) -> Option<String>) -> Option<(String, Option<String>)> {
    let set = |var: &str| lookup(var).filter(|v| !v.is_empty() && v != "false");

    for (marker, name, build_var) in CI_SYSTEMS {
        if set(*marker).is_some() {
            return Some((name.to_string(), set(*build_var)));
        }
    }
    set("CI").map(|_| ("unknown".to_string(), None))
}
