//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::ui::OutputMode;

/// envcheck - Development environment validation for TecGPT Desktop.
#[derive(Debug, Parser)]
#[command(name = "envcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the sample documents (defaults to the current directory)
    #[arg(short, long, global = true, env = "ENVCHECK_TEST_DIR")]
    pub test_dir: Option<PathBuf>,

    /// Project root (defaults to two levels above the test directory)
    #[arg(short, long, global = true)]
    pub project_root: Option<PathBuf>,

    /// Path to config file (defaults to envcheck.yml in the test directory)
    #[arg(short, long, global = true, env = "ENVCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the report as JSON after the run
    #[arg(long, global = true)]
    pub json: bool,

    /// Do not generate the test runner script
    #[arg(long, global = true)]
    pub no_runner: bool,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Whether the check workflow runs (explicitly or as the default).
    pub fn runs_checks(&self) -> bool {
        matches!(self.command, None | Some(Commands::Check))
    }

    pub fn output_mode(&self) -> OutputMode {
        match (self.quiet, self.verbose) {
            (true, _) => OutputMode::Quiet,
            (_, true) => OutputMode::Verbose,
            _ => OutputMode::Normal,
        }
    }

    /// Terminal styling is off in CI and while `--json` owns stdout.
    pub fn wants_terminal(&self, ci: bool) -> bool {
        !ci && !(self.json && self.runs_checks())
    }
}

/// Available subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Run every environment check (default if no command specified)
    Check,

    /// Show the configured checks without running them
    List,
}
