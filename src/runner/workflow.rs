//! Check workflow orchestration.

use std::time::Instant;

use crate::checks::{
    dependencies, documents, runner_script, structure, summary, syntax, system, tools,
    CheckContext, Flow,
};
use crate::error::Result;
use crate::report::{Report, Reporter};
use crate::runlog::RunLog;
use crate::ui::UserInterface;

/// Title written at the top of the run log.
const LOG_TITLE: &str = "envcheck run";

/// Options for a check run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Write the runner script after the summary.
    pub generate_runner: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            generate_runner: true,
        }
    }
}

/// Runs every stage in order against one context.
pub struct CheckRunner<'a> {
    ctx: &'a CheckContext,
}

impl<'a> CheckRunner<'a> {
    pub fn new(ctx: &'a CheckContext) -> Self {
        Self { ctx }
    }

    /// Run the workflow.
    ///
    /// A fatal check ends the run right away: no later stage, no summary
    /// and no runner script. Errors returned here mean envcheck itself
    /// failed (the log could not be written), not that a check failed.
    pub fn run(&self, options: &RunOptions, ui: &mut dyn UserInterface) -> Result<Report> {
        let start = Instant::now();
        let ctx = self.ctx;
        let log = RunLog::start(&ctx.log_path(), LOG_TITLE)?;
        tracing::debug!("Logging to {}", log.path().display());
        let mut reporter = Reporter::new(ui, log);

        tracing::debug!(
            "Checking {} from {}",
            ctx.config.app_name,
            ctx.test_dir.display()
        );

        system::check_system(ctx, &mut reporter)?;

        if let Flow::Abort(reason) = tools::check_tools(ctx, &mut reporter)? {
            tracing::debug!("Stopped after tool checks: {}", reason);
            return Ok(reporter.finish());
        }
        if let Flow::Abort(reason) = structure::check_structure(ctx, &mut reporter)? {
            tracing::debug!("Stopped after structure checks: {}", reason);
            return Ok(reporter.finish());
        }

        dependencies::check_dependencies(ctx, &mut reporter)?;
        documents::check_documents(ctx, &mut reporter)?;
        syntax::check_syntax(ctx, &mut reporter)?;

        summary::report_summary(ctx, &mut reporter, start.elapsed())?;

        if options.generate_runner {
            runner_script::generate_runner(ctx, &mut reporter)?;
        } else {
            tracing::debug!("Runner script generation disabled");
        }

        Ok(reporter.finish())
    }
}
