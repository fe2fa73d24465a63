//! Colors and symbols for check results.

use console::Style;

use crate::checks::CheckStatus;

/// envcheck's visual theme.
#[derive(Debug, Clone)]
pub struct EnvCheckTheme {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub dim: Style,
    pub highlight: Style,
    pub header: Style,
}

impl Default for EnvCheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvCheckTheme {
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
        }
    }

    /// Theme without colors, for NO_COLOR and non-TTY output.
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
        }
    }

    /// Pick the colored or plain theme for the current terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Symbol printed in front of a result.
    pub fn symbol(status: CheckStatus) -> &'static str {
        match status {
            CheckStatus::Success => "✓",
            CheckStatus::Warning => "⚠",
            CheckStatus::Error => "✗",
        }
    }

    fn style(&self, status: CheckStatus) -> &Style {
        match status {
            CheckStatus::Success => &self.success,
            CheckStatus::Warning => &self.warning,
            CheckStatus::Error => &self.error,
        }
    }

    /// `✓ message`, colored by status.
    pub fn format_status(&self, status: CheckStatus, msg: &str) -> String {
        self.style(status)
            .apply_to(format!("{} {}", Self::symbol(status), msg))
            .to_string()
    }

    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("▸"),
            self.highlight.apply_to(title)
        )
    }
}

/// Colors are off when NO_COLOR is set or stdout is not a terminal.
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::Term::stdout().is_term()
}
