//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::{
    EnvCheckTheme, NonInteractiveUI, OutputMode, ProgressSpinner, SpinnerHandle, UserInterface,
};
use crate::checks::CheckStatus;

/// Colored output with spinners for a real terminal.
pub struct TerminalUI {
    term: Term,
    theme: EnvCheckTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            theme: EnvCheckTheme::detect(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn status(&mut self, status: CheckStatus, msg: &str) {
        if !self.mode.shows(status) {
            return;
        }
        let line = format!("  {}", self.theme.format_status(status, msg));
        // errors go to stderr so a silenced stdout still reports them
        if status == CheckStatus::Error {
            Term::stderr().write_line(&line).ok();
        } else {
            self.term.write_line(&line).ok();
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_messages() {
            writeln!(self.term).ok();
            writeln!(self.term, "{}", self.theme.format_header(title)).ok();
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Terminal UI when stdout is a terminal and interaction is allowed,
/// plain output otherwise.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
