//! envcheck - Development environment validation for TecGPT Desktop.
//!
//! envcheck walks a fixed checklist before anyone tries to build or
//! exercise the desktop app: machine resources, the Node and Rust
//! toolchains, the project layout, installed dependencies, and the sample
//! documents used to test the app's indexing. Every result is printed,
//! appended to a persistent run log, and collected into a [`Report`].
//!
//! # Modules
//!
//! - [`checks`] - The individual check stages
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`report`] - Outcome accumulation and exit codes
//! - [`runlog`] - Persistent run log
//! - [`runner`] - Check workflow orchestration
//! - [`shell`] - External program execution and PATH lookup
//! - [`ui`] - Terminal output, spinners, and test doubles
//!
//! # Example
//!
//! ```
//! use envcheck::checks::CheckContext;
//! use envcheck::config::CheckConfig;
//! use envcheck::runner::{CheckRunner, RunOptions};
//! use envcheck::ui::MockUI;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let ctx = CheckContext::new(CheckConfig::default(), temp.path(), None)
//!     .with_search_path(Vec::new());
//! let mut ui = MockUI::new();
//!
//! // node is not on the (empty) search path, so the run stops early
//! let report = CheckRunner::new(&ctx).run(&RunOptions::default(), &mut ui).unwrap();
//! assert!(report.is_aborted());
//! assert_eq!(report.exit_code(), 2);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod runlog;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{EnvCheckError, Result};
pub use report::Report;
