//! Plan and progress rendering for the local engine

use crate::snapshot::ResourceState;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use stackctl_core::types::{DisplayOptions, StackName};
use std::collections::BTreeMap;

pub(crate) struct Renderer<'a> {
    display: &'a DisplayOptions,
    progress: Option<ProgressBar>,
}

impl<'a> Renderer<'a> {
    pub(crate) fn new(display: &'a DisplayOptions) -> Self {
        if let Some(enabled) = display.color.styling() {
            console::set_colors_enabled(enabled);
            console::set_colors_enabled_stderr(enabled);
        }
        Self {
            display,
            progress: None,
        }
    }

    fn line(&self, text: &str) {
        match &self.progress {
            Some(pb) => pb.println(text),
            None => println!("{}", text),
        }
    }

    pub(crate) fn config(&self, config: &BTreeMap<String, String>) {
        self.line(&format!("{}", style("Configuration:").bold()));
        if config.is_empty() {
            self.line("    (none)");
        }
        for (key, value) in config {
            self.line(&format!("    {}: {}", style(key).dim(), value));
        }
    }

    pub(crate) fn plan(&self, stack: &StackName, plan: &[ResourceState]) {
        self.line(&format!(
            "{}",
            style(format!("Previewing destroy of stack '{}'", stack))
                .bold()
                .underlined()
        ));
        for resource in plan {
            self.line(&self.describe(resource));
        }
        self.line(&self.summary(plan.len(), "to delete"));
    }

    pub(crate) fn deleted(&self, resource: &ResourceState) {
        self.line(&format!("{} deleted", self.describe(resource)));
    }

    pub(crate) fn finished(&self, stack: &StackName, removed: usize) {
        self.line(&format!(
            "{} stack '{}': {}",
            style("Destroyed").green().bold(),
            stack,
            self.summary(removed, "deleted")
        ));
    }

    fn describe(&self, resource: &ResourceState) -> String {
        if self.display.diff_display {
            format!("{}", style(format!("- {}", resource.urn)).red())
        } else {
            format!(
                "  {} {} {}",
                style("-").red().bold(),
                style(&resource.kind).dim(),
                resource.urn
            )
        }
    }

    fn summary(&self, count: usize, verb: &str) -> String {
        let noun = if count == 1 { "resource" } else { "resources" };
        if self.display.show_same_resources {
            format!("{} {} {}, 0 unchanged", count, noun, verb)
        } else {
            format!("{} {} {}", count, noun, verb)
        }
    }

    /// Start a progress bar when the display allows one
    pub(crate) fn start_progress(&mut self, len: usize) {
        if !(self.display.is_interactive && self.display.color.allows_decorations()) {
            return;
        }
        let pb = ProgressBar::new(len as u64);
        if let Ok(progress_style) = ProgressStyle::with_template(
            "{spinner:.red} [{elapsed_precise}] [{bar:40.red/blue}] {pos}/{len} {msg}",
        ) {
            pb.set_style(progress_style.progress_chars("#>-"));
        }
        pb.set_message("deleting");
        self.progress = Some(pb);
    }

    pub(crate) fn advance(&self, n: usize) {
        if let Some(pb) = &self.progress {
            pb.inc(n as u64);
        }
    }

    pub(crate) fn stop_progress(&mut self) {
        if let Some(pb) = self.progress.take() {
            pb.finish_and_clear();
        }
    }
}
