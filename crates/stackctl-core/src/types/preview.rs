//! Preview policy

use crate::error::{Error, Result};
use std::str::FromStr;

/// Raw `--preview` value, validated but not yet combined with interactivity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PreviewFlag {
    /// Flag omitted or empty
    #[default]
    Unset,
    Only,
    Skip,
    Auto,
}

impl PreviewFlag {
    pub const CHOICES: &'static [&'static str] = &["only", "skip", "auto"];
}

impl FromStr for PreviewFlag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" => Ok(PreviewFlag::Unset),
            "only" => Ok(PreviewFlag::Only),
            "skip" => Ok(PreviewFlag::Skip),
            "auto" => Ok(PreviewFlag::Auto),
            other => Err(Error::invalid_option("preview", other, Self::CHOICES)),
        }
    }
}

/// What the engine does with the preview step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewBehavior {
    /// Show the plan; the operator must confirm before anything is applied
    InteractiveConfirm,
    /// Show the plan and stop
    PreviewOnly,
    /// Apply without computing a preview
    SkipPreview,
    /// Show the plan and apply it without asking
    AutoAccept,
}

impl PreviewBehavior {
    /// Combine the flag with the resolved interactivity
    pub fn from_flag(flag: PreviewFlag, interactive: bool) -> Self {
        match flag {
            PreviewFlag::Unset if interactive => PreviewBehavior::InteractiveConfirm,
            PreviewFlag::Unset => PreviewBehavior::SkipPreview,
            PreviewFlag::Only => PreviewBehavior::PreviewOnly,
            PreviewFlag::Skip => PreviewBehavior::SkipPreview,
            PreviewFlag::Auto => PreviewBehavior::AutoAccept,
        }
    }

    /// Whether the operator has to confirm before the engine runs
    pub fn requires_confirmation(&self) -> bool {
        matches!(self, PreviewBehavior::InteractiveConfirm)
    }

    /// Whether the engine renders the plan
    pub fn renders_preview(&self) -> bool {
        !matches!(self, PreviewBehavior::SkipPreview)
    }

    /// Whether the engine applies the plan
    pub fn applies(&self) -> bool {
        !matches!(self, PreviewBehavior::PreviewOnly)
    }
}

impl std::fmt::Display for PreviewBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreviewBehavior::InteractiveConfirm => write!(f, "interactive-confirm"),
            PreviewBehavior::PreviewOnly => write!(f, "preview-only"),
            PreviewBehavior::SkipPreview => write!(f, "skip-preview"),
            PreviewBehavior::AutoAccept => write!(f, "auto-accept"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_depends_on_interactivity() {
        assert_eq!(
            PreviewBehavior::from_flag(PreviewFlag::Unset, true),
            PreviewBehavior::InteractiveConfirm
        );
        assert_eq!(
            PreviewBehavior::from_flag(PreviewFlag::Unset, false),
            PreviewBehavior::SkipPreview
        );
    }

    #[test]
    fn test_explicit_flags_ignore_interactivity() {
        for interactive in [true, false] {
            assert_eq!(
                PreviewBehavior::from_flag(PreviewFlag::Only, interactive),
                PreviewBehavior::PreviewOnly
            );
            assert_eq!(
                PreviewBehavior::from_flag(PreviewFlag::Skip, interactive),
                PreviewBehavior::SkipPreview
            );
            assert_eq!(
                PreviewBehavior::from_flag(PreviewFlag::Auto, interactive),
                PreviewBehavior::AutoAccept
            );
        }
    }

    #[test]
    fn test_only_interactive_confirm_requires_confirmation() {
        assert!(PreviewBehavior::InteractiveConfirm.requires_confirmation());
        assert!(!PreviewBehavior::PreviewOnly.requires_confirmation());
        assert!(!PreviewBehavior::SkipPreview.requires_confirmation());
        assert!(!PreviewBehavior::AutoAccept.requires_confirmation());
    }

    #[test]
    fn test_raw_flag_resolution_table() {
        let cases = [
            (true, "", PreviewBehavior::InteractiveConfirm),
            (false, "", PreviewBehavior::SkipPreview),
            (true, "only", PreviewBehavior::PreviewOnly),
            (false, "skip", PreviewBehavior::SkipPreview),
            (true, "auto", PreviewBehavior::AutoAccept),
        ];
        for (interactive, raw, expected) in cases {
            let flag: PreviewFlag = raw.parse().unwrap();
            assert_eq!(PreviewBehavior::from_flag(flag, interactive), expected);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        for raw in ["ONLY", "yes", " ", "dry-run", "skip "] {
            let err = raw.parse::<PreviewFlag>().unwrap_err();
            assert!(
                matches!(err, Error::InvalidOption { ref value, .. } if value == raw),
                "expected InvalidOption for {raw:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_accepts_empty() {
        assert_eq!("".parse::<PreviewFlag>().unwrap(), PreviewFlag::Unset);
    }
}
