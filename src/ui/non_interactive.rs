//! Non-interactive UI for CI and piped output.

use super::{EnvCheckTheme, OutputMode, SpinnerHandle, UserInterface};
use crate::checks::CheckStatus;

/// Plain text, no colors and no spinners. Successes and messages go to
/// stdout; warnings and errors go to stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", msg);
        }
    }

    fn status(&mut self, status: CheckStatus, msg: &str) {
        if !self.mode.shows(status) {
            return;
        }
        let symbol = EnvCheckTheme::symbol(status);
        match status {
            CheckStatus::Success => println!("  {} {}", symbol, msg),
            CheckStatus::Warning | CheckStatus::Error => eprintln!("  {} {}", symbol, msg),
        }
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_messages() {
            println!("\n{}", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish(&mut self) {}
}
