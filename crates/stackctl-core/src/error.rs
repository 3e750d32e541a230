//! Error types for stackctl-core

use thiserror::Error;

/// Result type alias using stackctl-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the destroy command
#[derive(Error, Debug)]
pub enum Error {
    /// Positional arguments were supplied to a command that takes none
    #[error("{command} does not accept positional arguments (got: {args})")]
    Usage { command: String, args: String },

    /// An option value could not be parsed
    #[error("invalid value for --{option}: '{value}' (expected one of: {expected})")]
    InvalidOption {
        option: String,
        value: String,
        expected: String,
    },

    /// The named stack does not exist in the backend, or no stack was named
    /// and none is currently selected (`name` is `None`)
    #[error("{}", stack_not_found_message(.name.as_deref()))]
    StackNotFound { name: Option<String> },

    /// The operator did not re-enter the stack name
    #[error("confirmation declined")]
    ConfirmationDeclined,

    /// Update metadata could not be collected
    #[error("gathering environment metadata")]
    MetadataGather {
        #[source]
        source: anyhow::Error,
    },

    /// Cancellation was observed while the engine was running
    #[error("destroy cancelled")]
    DestroyCancelled,

    /// Any other failure reported by the destroy engine
    #[error(transparent)]
    Engine(anyhow::Error),

    /// Project descriptor not found
    #[error("no stackctl project found: {searched}")]
    ProjectNotFound { searched: String },

    /// Project descriptor present but unusable
    #[error("invalid project: {message}")]
    InvalidProject { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create a usage error from the offending positional arguments
    pub fn usage(command: impl Into<String>, args: &[String]) -> Self {
        Self::Usage {
            command: command.into(),
            args: args.join(" "),
        }
    }

    /// Create an invalid option error
    pub fn invalid_option(
        option: impl Into<String>,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        Self::InvalidOption {
            option: option.into(),
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Create a stack not found error for a named stack
    pub fn stack_not_found(name: impl Into<String>) -> Self {
        Self::StackNotFound {
            name: Some(name.into()),
        }
    }

    /// Create a stack not found error for a missing selection
    pub fn no_stack_selected() -> Self {
        Self::StackNotFound { name: None }
    }

    /// Wrap a metadata collection failure
    pub fn metadata_gather(source: impl Into<anyhow::Error>) -> Self {
        Self::MetadataGather {
            source: source.into(),
        }
    }

    /// Create a project not found error
    pub fn project_not_found(searched: impl Into<String>) -> Self {
        Self::ProjectNotFound {
            searched: searched.into(),
        }
    }

    /// Create an invalid project error
    pub fn invalid_project(message: impl Into<String>) -> Self {
        Self::InvalidProject {
            message: message.into(),
        }
    }

    /// How this error should be reported when the process exits
    pub fn exit_class(&self) -> ExitClass {
        match self {
            Error::DestroyCancelled => ExitClass::Cancelled,
            _ => ExitClass::Failed,
        }
    }
}

fn stack_not_found_message(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("no stack named '{}' found", name),
        None => "no stack selected; pass --stack <name> or select a stack first".to_string(),
    }
}

/// Failure reported by a destroy engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// The engine stopped because its cancellation scope fired
    #[error("operation cancelled")]
    Cancelled,

    /// Anything else; the detail is passed through untouched
    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

/// Final classification of a command invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitClass {
    Success,
    Cancelled,
    Failed,
}

impl ExitClass {
    /// Classify a finished invocation
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => ExitClass::Success,
            Err(e) => e.exit_class(),
        }
    }
}

impl std::fmt::Display for ExitClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExitClass::Success => write!(f, "success"),
            ExitClass::Cancelled => write!(f, "cancelled"),
            ExitClass::Failed => write!(f, "failed"),
        }
    }
}
