//! Stack identity

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("stack name regex is valid"));

/// A validated stack name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StackName(String);

impl StackName {
    pub fn parse(name: &str) -> Result<Self> {
        if NAME_PATTERN.is_match(name) && name != "." && name != ".." {
            Ok(Self(name.to_string()))
        } else {
            Err(Error::InvalidOption {
                option: "stack".to_string(),
                value: name.to_string(),
                expected: "a name made of letters, digits, '-', '_' or '.'".to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StackName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to a deployed stack owned by a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackHandle {
    name: StackName,
    /// Backend-specific locator (for the local backend, the snapshot path)
    location: String,
}

impl StackHandle {
    pub fn new(name: StackName, location: impl Into<String>) -> Self {
        Self {
            name,
            location: location.into(),
        }
    }

    /// Display name of the stack
    pub fn name(&self) -> &StackName {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}
