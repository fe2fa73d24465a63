//! Platform detection.

use serde::Serialize;
use std::fmt;

/// Operating system family the checker runs on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OsFamily {
    Linux,
    MacOs,
    Windows,
    /// Anything else, carrying the raw OS name.
    Unknown(String),
}

impl OsFamily {
    /// Detect the family of the running system.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Classify an OS name as reported by `std::env::consts::OS`.
    pub fn from_os_name(name: &str) -> Self {
        match name {
            "linux" => OsFamily::Linux,
            "macos" => OsFamily::MacOs,
            "windows" => OsFamily::Windows,
            other => OsFamily::Unknown(other.to_string()),
        }
    }

    /// Whether the family is one of the supported desktop platforms.
    pub fn is_known(&self) -> bool {
        !matches!(self, OsFamily::Unknown(_))
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsFamily::Linux => write!(f, "Linux"),
            OsFamily::MacOs => write!(f, "macOS"),
            OsFamily::Windows => write!(f, "Windows"),
            OsFamily::Unknown(name) => write!(f, "unknown ({})", name),
        }
    }
}

const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Whether the process runs under a CI service.
pub fn is_ci() -> bool {
    ci_from(|name| std::env::var_os(name).is_some())
}

fn ci_from(is_set: impl Fn(&str) -> bool) -> bool {
    CI_VARS.iter().any(|name| is_set(name))
}
