//! Mock UI implementation for testing.
//!
//! `MockUI` records every message, result, header and spinner regardless
//! of output mode, so tests can assert on what a stage reported.
//!
//! # Example
//!
//! ```
//! use envcheck::checks::CheckStatus;
//! use envcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.status(CheckStatus::Success, "Node.js found: v20.11.0");
//! ui.status(CheckStatus::Error, "test_data.csv is missing or unreadable");
//!
//! assert!(ui.has_success("Node.js"));
//! assert!(ui.has_error("test_data.csv"));
//! assert_eq!(ui.count(CheckStatus::Warning), 0);
//! ```

use super::{OutputMode, SpinnerHandle, UserInterface};
use crate::checks::CheckStatus;

/// Captures everything shown through [`UserInterface`].
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    results: Vec<(CheckStatus, String)>,
    headers: Vec<String>,
    spinners: Vec<String>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock reporting a specific output mode (output is still captured).
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Results with one status, in the order shown.
    pub fn results(&self, status: CheckStatus) -> Vec<&str> {
        self.results
            .iter()
            .filter(|(s, _)| *s == status)
            .map(|(_, msg)| msg.as_str())
            .collect()
    }

    pub fn count(&self, status: CheckStatus) -> usize {
        self.results.iter().filter(|(s, _)| *s == status).count()
    }

    pub fn successes(&self) -> Vec<&str> {
        self.results(CheckStatus::Success)
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.results(CheckStatus::Warning)
    }

    pub fn errors(&self) -> Vec<&str> {
        self.results(CheckStatus::Error)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Messages of every spinner started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    fn has_result(&self, status: CheckStatus, msg: &str) -> bool {
        self.results
            .iter()
            .any(|(s, m)| *s == status && m.contains(msg))
    }

    pub fn has_success(&self, msg: &str) -> bool {
        self.has_result(CheckStatus::Success, msg)
    }

    pub fn has_warning(&self, msg: &str) -> bool {
        self.has_result(CheckStatus::Warning, msg)
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.has_result(CheckStatus::Error, msg)
    }

    pub fn has_header(&self, title: &str) -> bool {
        self.headers.iter().any(|h| h.contains(title))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn status(&mut self, status: CheckStatus, msg: &str) {
        self.results.push((status, msg.to_string()));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that records its lifecycle.
#[derive(Debug, Default)]
pub struct MockSpinner {
    messages: Vec<String>,
    finished: bool,
}

impl MockSpinner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages set after creation.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}
