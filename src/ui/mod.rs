//! Terminal output for check results.
//!
//! Every check outcome reaches the screen through [`UserInterface::status`].
//! Three implementations exist:
//! - [`TerminalUI`] for an interactive terminal (colors, spinners)
//! - [`NonInteractiveUI`] for CI and piped output
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use envcheck::checks::CheckStatus;
//! use envcheck::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Required tools");
//! ui.status(CheckStatus::Warning, "Tauri CLI is not installed (optional)");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod progress;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use progress::{format_duration, format_size};
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, EnvCheckTheme};

use crate::checks::CheckStatus;

/// Where check results and messages are shown.
pub trait UserInterface {
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display one check result.
    fn status(&mut self, status: CheckStatus, msg: &str);

    fn success(&mut self, msg: &str) {
        self.status(CheckStatus::Success, msg);
    }

    fn warning(&mut self, msg: &str) {
        self.status(CheckStatus::Warning, msg);
    }

    /// Errors are shown in every output mode.
    fn error(&mut self, msg: &str) {
        self.status(CheckStatus::Error, msg);
    }

    /// Start a spinner for a blocking external probe.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a stage header.
    fn show_header(&mut self, title: &str);

    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    fn set_message(&mut self, msg: &str);

    /// Stop the spinner and remove it from the terminal.
    fn finish(&mut self);
}
