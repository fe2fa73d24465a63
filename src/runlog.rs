//! Persistent run log.
//!
//! The log lives in the test directory and survives across runs. Starting
//! a run replaces the first line (the header) with a fresh one and keeps the
//! rest of the previous content; every line of the new run is appended
//! after it.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{EnvCheckError, Result};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only log for one run.
#[derive(Debug)]
pub struct RunLog {
    path: PathBuf,
    file: File,
}

impl RunLog {
    /// Start a run: rewrite the header line, then open for appending.
    pub fn start(path: &Path, title: &str) -> Result<Self> {
        let header = format!("{} started at {}", title, timestamp());
        let previous = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(log_error(path, e)),
        };

        let mut content = header;
        content.push('\n');
        if let Some((_, rest)) = previous.split_once('\n') {
            content.push_str(rest);
        }
        fs::write(path, content).map_err(|e| log_error(path, e))?;

        let file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|e| log_error(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Append one `[timestamp] LEVEL: message` line.
    pub fn append(&mut self, level: &str, message: &str) -> Result<()> {
        writeln!(self.file, "[{}] {}: {}", timestamp(), level, message)
            .map_err(|e| log_error(&self.path, e))
    }

    /// Location of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

fn log_error(path: &Path, source: io::Error) -> EnvCheckError {
    EnvCheckError::LogFile {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn start_creates_log_with_header() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("envcheck.log");

        RunLog::start(&path, "envcheck").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.starts_with("envcheck started at "));
    }

    #[test]
    fn append_writes_level_and_message() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("envcheck.log");

        let mut log = RunLog::start(&path, "envcheck").unwrap();
        log.append("SUCCESS", "Node.js found").unwrap();
        log.append("ERROR", "Missing file").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with("SUCCESS: Node.js found"));
        assert!(lines[2].starts_with('['));
        assert!(lines[2].ends_with("ERROR: Missing file"));
    }

    #[test]
    fn second_run_resets_header_and_keeps_history() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("envcheck.log");

        {
            let mut log = RunLog::start(&path, "first").unwrap();
            log.append("INFO", "from run one").unwrap();
        }
        {
            let mut log = RunLog::start(&path, "second").unwrap();
            log.append("INFO", "from run two").unwrap();
        }

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert!(lines[0].starts_with("second started at"));
        assert!(!content.contains("first started at"));
        assert!(content.contains("from run one"));
        assert!(content.contains("from run two"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn start_fails_in_missing_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("envcheck.log");

        let err = RunLog::start(&path, "envcheck").unwrap_err();
        assert!(matches!(err, EnvCheckError::LogFile { .. }));
    }
}
