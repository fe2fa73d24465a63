//! The environment checks.
//!
//! Each submodule implements one stage of the workflow. Stages report
//! through a [`Reporter`](crate::report::Reporter); only the tool and
//! structure stages can stop the run, by returning [`Flow::Abort`].
//!
//! - [`system`] - OS, memory and disk
//! - [`tools`] - external toolchain programs
//! - [`structure`] - project directories and files
//! - [`dependencies`] - dependency marker artifacts
//! - [`documents`] - sample document presence and sizes
//! - [`syntax`] - sample document syntax validation
//! - [`summary`] - final report
//! - [`runner_script`] - generated helper script

pub mod dependencies;
pub mod documents;
pub mod runner_script;
pub mod structure;
pub mod summary;
pub mod syntax;
pub mod system;
pub mod tools;

use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CheckConfig;
use crate::shell::parse_system_path;

/// Severity of a single check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Success,
    Warning,
    Error,
}

impl CheckStatus {
    /// Level written to the run log.
    pub fn log_level(&self) -> &'static str {
        match self {
            CheckStatus::Success => "SUCCESS",
            CheckStatus::Warning => "WARNING",
            CheckStatus::Error => "ERROR",
        }
    }
}

/// Workflow stage a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Environment,
    Tools,
    Structure,
    Dependencies,
    Documents,
    Syntax,
    Runner,
}

impl Section {
    /// Header shown when the stage starts.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Environment => "System environment",
            Section::Tools => "Required tools",
            Section::Structure => "Project structure",
            Section::Dependencies => "Dependencies",
            Section::Documents => "Sample documents",
            Section::Syntax => "Syntax validation",
            Section::Runner => "Test runner",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One reported check result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub section: Section,
    pub status: CheckStatus,
    pub message: String,
}

/// Whether the workflow continues after a stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// A fatal check failed; the message names it.
    Abort(String),
}

impl Flow {
    pub fn is_abort(&self) -> bool {
        matches!(self, Flow::Abort(_))
    }
}

/// Paths and lookup state shared by every stage.
#[derive(Debug, Clone)]
pub struct CheckContext {
    pub config: CheckConfig,
    /// Directory holding the samples, the log and the runner script.
    pub test_dir: PathBuf,
    pub project_root: PathBuf,
    pub app_dir: PathBuf,
    /// Directories searched for external programs.
    pub search_path: Vec<PathBuf>,
}

impl CheckContext {
    /// Build a context, deriving the project root and app dir from config
    /// unless a project root is given explicitly. An existing root is
    /// canonicalized so `..` segments never reach the summary.
    pub fn new(config: CheckConfig, test_dir: &Path, project_root: Option<&Path>) -> Self {
        let joined = project_root
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.project_root_for(test_dir));
        let project_root = fs::canonicalize(&joined).unwrap_or(joined);
        let app_dir = project_root.join(&config.app_dir);

        Self {
            config,
            test_dir: test_dir.to_path_buf(),
            project_root,
            app_dir,
            search_path: parse_system_path(),
        }
    }

    /// Replace the directories searched for external programs.
    pub fn with_search_path(mut self, search_path: Vec<PathBuf>) -> Self {
        self.search_path = search_path;
        self
    }

    /// Path of a sample document.
    pub fn sample_path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.test_dir.join(name)
    }

    pub fn log_path(&self) -> PathBuf {
        self.test_dir.join(&self.config.log_file)
    }

    pub fn runner_path(&self) -> PathBuf {
        self.test_dir.join(&self.config.runner_script)
    }
}
