//! Errors that stop envcheck itself.
//!
//! A failed check (missing file, broken sample, absent tool) is not an
//! error here; it is recorded as a
//! [`CheckOutcome`](crate::checks::CheckOutcome) and counted in the report.
//! [`EnvCheckError`] covers the cases where the checker cannot go on:
//! unusable configuration, an unwritable log, a program that cannot be
//! started.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvCheckError {
    /// An explicitly requested config file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Config parsed but describes an impossible check set.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    #[error("Could not start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, EnvCheckError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn parse_error_names_file_and_cause() {
        let err = EnvCheckError::ConfigParseError {
            path: PathBuf::from("/docs/envcheck.yml"),
            message: "did not find expected node content".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse config at /docs/envcheck.yml: did not find expected node content"
        );
    }

    #[test]
    fn spawn_error_keeps_source() {
        let err = EnvCheckError::Spawn {
            program: "xmllint".into(),
            source: std::io::Error::new(ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().starts_with("Could not start `xmllint`"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn log_file_error_names_path() {
        let err = EnvCheckError::LogFile {
            path: PathBuf::from("/tmp/envcheck.log"),
            source: std::io::Error::new(ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/envcheck.log"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn io_and_anyhow_convert() {
        let io: EnvCheckError = std::io::Error::new(ErrorKind::NotFound, "gone").into();
        assert!(matches!(io, EnvCheckError::Io(_)));
        let other: EnvCheckError = anyhow::anyhow!("report encoding failed").into();
        assert_eq!(other.to_string(), "report encoding failed");
    }
}
