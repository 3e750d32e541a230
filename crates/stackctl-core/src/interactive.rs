//! Interactivity resolution

use std::io::IsTerminal;
use tracing::debug;

/// Environment variables that indicate an unattended CI run
const CI_ENV_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "TF_BUILD",
    "JENKINS_URL",
    "TRAVIS",
    "CIRCLECI",
];

/// Facts about the terminal the command runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalContext {
    pub stdin_is_tty: bool,
    pub stdout_is_tty: bool,
    pub ci: bool,
}

impl TerminalContext {
    /// Probe the current process
    pub fn detect() -> Self {
        let ctx = Self {
            stdin_is_tty: std::io::stdin().is_terminal(),
            stdout_is_tty: std::io::stdout().is_terminal(),
            ci: running_in_ci(),
        };
        debug!(?ctx, "detected terminal context");
        ctx
    }

    /// Interactive unless either stream is redirected or CI is detected
    pub fn is_interactive(&self) -> bool {
        self.stdin_is_tty && self.stdout_is_tty && !self.ci
    }
}

fn running_in_ci() -> bool {
    CI_ENV_VARS.iter().any(|var| match std::env::var(var) {
        Ok(value) => !value.is_empty() && value != "false" && value != "0",
        Err(_) => false,
    })
}

/// Compute interactivity; `--non-interactive` always wins
pub fn resolve_interactive(ctx: &TerminalContext, non_interactive: bool) -> bool {
    !non_interactive && ctx.is_interactive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const TTY: TerminalContext = TerminalContext {
        stdin_is_tty: true,
        stdout_is_tty: true,
        ci: false,
    };

    #[test]
    fn test_non_interactive_override_wins() {
        assert!(resolve_interactive(&TTY, false));
        assert!(!resolve_interactive(&TTY, true));
    }

    #[test]
    fn test_redirected_streams_are_not_interactive() {
        let piped_in = TerminalContext {
            stdin_is_tty: false,
            ..TTY
        };
        let piped_out = TerminalContext {
            stdout_is_tty: false,
            ..TTY
        };
        let ci = TerminalContext { ci: true, ..TTY };
        assert!(!resolve_interactive(&piped_in, false));
        assert!(!resolve_interactive(&piped_out, false));
        assert!(!resolve_interactive(&ci, false));
    }

    #[test]
    #[serial]
    fn test_ci_detection_honours_false_values() {
        let saved: Vec<_> = CI_ENV_VARS
            .iter()
            .map(|v| (*v, std::env::var(v).ok()))
            .collect();
        for var in CI_ENV_VARS {
            std::env::remove_var(var);
        }

        std::env::set_var("CI", "false");
        assert!(!running_in_ci());
        std::env::set_var("CI", "true");
        assert!(running_in_ci());

        for (var, value) in saved {
            match value {
                Some(v) => std::env::set_var(var, v),
                None => std::env::remove_var(var),
            }
        }
    }
}
