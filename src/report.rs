//! Result accumulation.
//!
//! The [`Reporter`] is the single sink every stage writes through: each
//! outcome is printed immediately, appended to the run log, and recorded in
//! the [`Report`] returned at the end of the run.

use serde::Serialize;
use std::path::PathBuf;

use crate::checks::documents::DocumentStats;
use crate::checks::summary::SummaryStats;
use crate::checks::system::SystemInfo;
use crate::checks::tools::ToolReport;
use crate::checks::{CheckOutcome, CheckStatus, Section};
use crate::error::Result;
use crate::runlog::RunLog;
use crate::ui::{SpinnerHandle, UserInterface};

/// Exit code when every check passed or only warned.
pub const EXIT_OK: i32 = 0;
/// Exit code when non-fatal errors were reported.
pub const EXIT_ERRORS: i32 = 1;
/// Exit code when a fatal check stopped the run.
pub const EXIT_ABORTED: i32 = 2;

/// Everything a run found, in the order it was found.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub outcomes: Vec<CheckOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<DocumentStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runner_script: Option<PathBuf>,
    /// Name of the fatal check that stopped the run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aborted: Option<String>,
}

impl Report {
    /// Number of outcomes with the given status.
    pub fn count(&self, status: CheckStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    pub fn successes(&self) -> usize {
        self.count(CheckStatus::Success)
    }

    pub fn warnings(&self) -> usize {
        self.count(CheckStatus::Warning)
    }

    pub fn errors(&self) -> usize {
        self.count(CheckStatus::Error)
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }

    /// Outcomes reported by one stage.
    pub fn section(&self, section: Section) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(move |o| o.section == section)
    }

    /// Whether any outcome was reported for a stage.
    pub fn reached(&self, section: Section) -> bool {
        self.section(section).next().is_some()
    }

    /// Process exit code for this report.
    pub fn exit_code(&self) -> i32 {
        if self.is_aborted() {
            EXIT_ABORTED
        } else if self.errors() > 0 {
            EXIT_ERRORS
        } else {
            EXIT_OK
        }
    }
}

/// Writes outcomes to the UI and the run log, and records them.
pub struct Reporter<'a> {
    ui: &'a mut dyn UserInterface,
    log: RunLog,
    report: Report,
    section: Section,
}

impl<'a> Reporter<'a> {
    pub fn new(ui: &'a mut dyn UserInterface, log: RunLog) -> Self {
        Self {
            ui,
            log,
            report: Report::default(),
            section: Section::Environment,
        }
    }

    /// Start a stage: print its header and mark it in the log.
    pub fn begin(&mut self, section: Section) -> Result<()> {
        tracing::debug!("Checking {}", section.title().to_lowercase());
        self.section = section;
        self.ui.show_header(section.title());
        self.log.append("INFO", &format!("=== {} ===", section.title()))
    }

    pub fn success(&mut self, message: impl Into<String>) -> Result<()> {
        self.record(CheckStatus::Success, message.into())
    }

    pub fn warning(&mut self, message: impl Into<String>) -> Result<()> {
        self.record(CheckStatus::Warning, message.into())
    }

    pub fn error(&mut self, message: impl Into<String>) -> Result<()> {
        self.record(CheckStatus::Error, message.into())
    }

    /// Report an outcome with an explicit status.
    pub fn record(&mut self, status: CheckStatus, message: String) -> Result<()> {
        self.ui.status(status, &message);
        self.log.append(status.log_level(), &message)?;
        self.report.outcomes.push(CheckOutcome {
            section: self.section,
            status,
            message,
        });
        Ok(())
    }

    /// Plain informational line, shown and logged but not counted.
    pub fn info(&mut self, message: &str) -> Result<()> {
        self.ui.message(message);
        self.log.append("INFO", message)
    }

    /// Probe detail: logged always, shown only in verbose mode.
    pub fn detail(&mut self, message: &str) -> Result<()> {
        if self.ui.output_mode().shows_details() {
            self.ui.message(&format!("    {}", message));
        }
        self.log.append("INFO", message)
    }

    /// Spinner for a blocking external probe.
    pub fn spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.ui.start_spinner(message)
    }

    /// Mark the run as stopped by a fatal check.
    pub fn abort(&mut self, reason: &str) -> Result<()> {
        tracing::warn!("Aborting: {}", reason);
        self.report.aborted = Some(reason.to_string());
        self.log.append("ERROR", &format!("Aborted: {}", reason))
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn report_mut(&mut self) -> &mut Report {
        &mut self.report
    }

    /// Finish the run and hand back what was recorded.
    pub fn finish(self) -> Report {
        self.report
    }
}
