//! Check command implementation.
//!
//! The `envcheck check` command runs every environment check. It is also
//! what runs when no subcommand is given.

use crate::checks::CheckContext;
use crate::error::{EnvCheckError, Result};
use crate::report::Report;
use crate::runner::{CheckRunner, RunOptions};
use crate::ui::{NonInteractiveUI, OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    ctx: CheckContext,
    options: RunOptions,
    json: bool,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(ctx: CheckContext, generate_runner: bool, json: bool) -> Self {
        Self {
            ctx,
            options: RunOptions { generate_runner },
            json,
        }
    }

    /// Get the check context.
    pub fn context(&self) -> &CheckContext {
        &self.ctx
    }

    fn run(&self, ui: &mut dyn UserInterface) -> Result<Report> {
        CheckRunner::new(&self.ctx).run(&self.options, ui)
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = if self.json {
            // check lines would interleave with the JSON document; errors
            // still reach stderr
            let mut quiet = NonInteractiveUI::new(OutputMode::Silent);
            let report = self.run(&mut quiet)?;
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| EnvCheckError::Other(e.into()))?;
            ui.message(&json);
            report
        } else {
            self.run(ui)?
        };

        if let Some(reason) = &report.aborted {
            if !self.json {
                ui.error(&format!("Environment check aborted: {}", reason));
            }
        }

        tracing::debug!(
            "Finished with {} passed, {} warnings, {} errors",
            report.successes(),
            report.warnings(),
            report.errors()
        );
        Ok(CommandResult::with_exit_code(report.exit_code()))
    }
}
