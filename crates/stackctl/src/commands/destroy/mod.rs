//! Destroy command
//!
//! Resolves the target stack and preview policy, gates the operation behind
//! an explicit confirmation, and hands the work to the destroy engine.

mod confirm;
mod invoke;

use anyhow::Result;
use camino::Utf8Path;
use clap::Args;
use stackctl_backend::{
    require_stack, DestroyEngine, GitMetadataGatherer, LocalEngine, LocalStackStore,
    MetadataGatherer, StackStore,
};
use stackctl_core::interactive::{resolve_interactive, TerminalContext};
use stackctl_core::types::{
    ColorMode, DestroyOptions, DisplayOptions, PreviewBehavior, PreviewFlag,
};
use stackctl_core::{CancellationScope, Error, ExitClass, Project};
use std::time::Duration;
use tracing::{debug, info, warn};

use confirm::{ConfirmationGate, Prompter, TerminalPrompter};
use invoke::DestroyInvoker;

use crate::interrupt;

/// Overrides how long a cancelled engine may keep running, in seconds
const GRACE_PERIOD_ENV: &str = "STACKCTL_CANCEL_GRACE_SECS";

#[derive(Args, Debug)]
pub struct DestroyArgs {
    /// Positional arguments are rejected
    #[arg(hide = true)]
    pub args: Vec<String>,

    /// Print detailed debugging output during resource operations
    #[arg(short, long)]
    pub debug: bool,

    /// Choose a stack other than the currently selected one
    #[arg(short, long)]
    pub stack: Option<String>,

    /// Optional message to associate with the destroy operation
    #[arg(short, long)]
    pub message: Option<String>,

    /// Run one or more analyzers as part of this update
    #[arg(long = "analyzer", value_delimiter = ',')]
    pub analyzers: Vec<String>,

    /// Colorize output. Choices are: always, never, raw, auto
    #[arg(short, long)]
    pub color: Option<String>,

    /// Display operation as a rich diff showing the overall change
    #[arg(long)]
    pub diff: bool,

    /// Allow P resource operations to run in parallel at once (<=1 for no parallelism)
    #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
    pub parallel: i32,

    /// Preview behavior. Choices are: only (dry-run), skip (no preview, just update), auto (auto-accept)
    #[arg(long)]
    pub preview: Option<String>,

    /// Show configuration keys and variables
    #[arg(long)]
    pub show_config: bool,

    /// Show detailed resource replacement creates and deletes instead of a single step
    #[arg(long)]
    pub show_replacement_steps: bool,

    /// Show resources that don't need to be updated because they haven't changed, alongside those that do
    #[arg(long)]
    pub show_sames: bool,

    /// Disable interactive mode
    #[arg(long)]
    pub non_interactive: bool,
}

/// Validated, immutable destroy settings
#[derive(Debug, Clone, Default)]
pub struct DestroyConfig {
    pub debug: bool,
    /// Empty selects the current stack
    pub stack: String,
    pub message: String,
    pub analyzers: Vec<String>,
    pub color: ColorMode,
    pub diff: bool,
    pub parallel: i32,
    pub preview: PreviewFlag,
    pub show_config: bool,
    pub show_replacement_steps: bool,
    pub show_sames: bool,
    pub non_interactive: bool,
}

impl DestroyArgs {
    /// Validate the invocation shape and closed-choice options
    pub fn into_config(self) -> stackctl_core::Result<DestroyConfig> {
        if !self.args.is_empty() {
            return Err(Error::usage("destroy", &self.args));
        }
        let preview = match self.preview.as_deref() {
            Some(raw) => raw.parse()?,
            None => PreviewFlag::default(),
        };
        let color = match self.color.as_deref() {
            Some(raw) => raw.parse()?,
            None => ColorMode::default(),
        };

        Ok(DestroyConfig {
            debug: self.debug,
            stack: self.stack.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
            analyzers: self.analyzers,
            color,
            diff: self.diff,
            parallel: self.parallel,
            preview,
            show_config: self.show_config,
            show_replacement_steps: self.show_replacement_steps,
            show_sames: self.show_sames,
            non_interactive: self.non_interactive,
        })
    }
}

impl DestroyConfig {
    pub fn destroy_options(&self) -> DestroyOptions {
        DestroyOptions {
            analyzers: self.analyzers.clone(),
            parallel: self.parallel,
            debug: self.debug,
        }
    }

    pub fn display_options(&self, interactive: bool) -> DisplayOptions {
        DisplayOptions {
            color: self.color,
            show_config: self.show_config,
            show_replacement_steps: self.show_replacement_steps,
            show_same_resources: self.show_sames,
            is_interactive: interactive,
            diff_display: self.diff,
            debug: self.debug,
        }
    }
}

/// External services the command talks to
pub struct Collaborators<'a> {
    pub store: &'a dyn StackStore,
    pub gatherer: &'a dyn MetadataGatherer,
    pub engine: &'a dyn DestroyEngine,
    pub prompter: &'a dyn Prompter,
}

fn grace_period() -> Duration {
    match std::env::var(GRACE_PERIOD_ENV) {
        Ok(raw) => match raw.parse::<u64>() {
            Ok(secs) => Duration::from_secs(secs),
            Err(_) => {
                warn!("ignoring invalid {}={:?}", GRACE_PERIOD_ENV, raw);
                invoke::DEFAULT_GRACE_PERIOD
            }
        },
        Err(_) => invoke::DEFAULT_GRACE_PERIOD,
    }
}

pub async fn run(args: DestroyArgs, cwd: Option<&Utf8Path>) -> Result<()> {
    let config = args.into_config()?;
    let project = Project::discover(cwd)?;
    let backend_dir = project.backend_dir();
    debug!("using backend at {}", backend_dir);

    let store = LocalStackStore::new(backend_dir.clone());
    let engine = LocalEngine::new(backend_dir);
    let gatherer = GitMetadataGatherer::new();
    let deps = Collaborators {
        store: &store,
        gatherer: &gatherer,
        engine: &engine,
        prompter: &TerminalPrompter,
    };

    let scope = CancellationScope::new();
    let listener = interrupt::install(scope.clone());
    let result = execute(
        &config,
        &project,
        TerminalContext::detect(),
        &deps,
        &scope,
        grace_period(),
    )
    .await;
    listener.abort();

    info!("destroy finished: {}", ExitClass::of(&result));
    Ok(result?)
}

/// Run the destroy protocol against the given collaborators
pub async fn execute(
    config: &DestroyConfig,
    project: &Project,
    terminal: TerminalContext,
    deps: &Collaborators<'_>,
    scope: &CancellationScope,
    grace_period: Duration,
) -> stackctl_core::Result<()> {
    let interactive = resolve_interactive(&terminal, config.non_interactive);
    let behavior = PreviewBehavior::from_flag(config.preview, interactive);
    debug!("interactive: {}, preview: {}", interactive, behavior);

    let stack = require_stack(deps.store, &config.stack)?;

    ConfirmationGate::new(deps.prompter).check(behavior, interactive, stack.name())?;

    DestroyInvoker::new(deps.gatherer, deps.engine)
        .with_grace_period(grace_period)
        .invoke(config, project, &stack, behavior, interactive, scope)
        .await
}
