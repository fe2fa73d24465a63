//! Output verbosity.

use crate::checks::CheckStatus;

/// How much of a run is printed. The run log always gets everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Every result plus probe details (resolved paths, validators).
    Verbose,
    #[default]
    Normal,
    /// Warnings, errors, headers and the summary.
    Quiet,
    /// Errors only. Used while `--json` owns stdout.
    Silent,
}

impl OutputMode {
    /// Whether a check result with this status is printed.
    pub fn shows(&self, status: CheckStatus) -> bool {
        match status {
            CheckStatus::Error => true,
            CheckStatus::Warning => self.shows_messages(),
            CheckStatus::Success => matches!(self, Self::Verbose | Self::Normal),
        }
    }

    /// Headers, plain messages and the summary block.
    pub fn shows_messages(&self) -> bool {
        !matches!(self, Self::Silent)
    }

    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
