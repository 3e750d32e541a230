//! Confirmation gate
//!
//! The only safeguard between an operator and an irreversible destroy. When
//! the preview policy is interactive-confirm the operator must type the stack
//! name back exactly; anything else aborts before the engine is contacted.

use stackctl_core::types::{PreviewBehavior, StackName};
use stackctl_core::{Error, Result};
use tracing::debug;

use crate::output;

/// Source of operator answers
pub trait Prompter {
    /// Show `warning`, then ask `prompt`. `None` means the operator refused
    /// to answer (EOF, interrupt, or terminal error).
    fn ask(&self, warning: &str, prompt: &str) -> Option<String>;
}

/// Prompter backed by the controlling terminal
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&self, warning: &str, prompt: &str) -> Option<String> {
        output::warning(warning);
        match dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
        {
            Ok(answer) => Some(answer),
            Err(e) => {
                debug!("confirmation prompt aborted: {}", e);
                None
            }
        }
    }
}

pub struct ConfirmationGate<'a> {
    prompter: &'a dyn Prompter,
}

impl<'a> ConfirmationGate<'a> {
    pub fn new(prompter: &'a dyn Prompter) -> Self {
        Self { prompter }
    }

    /// Pass, or fail with `ConfirmationDeclined`
    pub fn check(
        &self,
        behavior: PreviewBehavior,
        interactive: bool,
        stack: &StackName,
    ) -> Result<()> {
        if !(interactive && behavior.requires_confirmation()) {
            debug!(
                "confirmation not required (interactive: {}, preview: {})",
                interactive, behavior
            );
            return Ok(());
        }

        let warning = format!(
            "This will permanently destroy all resources in the '{}' stack!",
            stack
        );
        let prompt = format!(
            "Please confirm that this is what you'd like to do by typing (\"{}\")",
            stack
        );

        match self.prompter.ask(&warning, &prompt) {
            Some(answer) if answer.trim() == stack.as_str() => Ok(()),
            _ => Err(Error::ConfirmationDeclined),
        }
    }
}
