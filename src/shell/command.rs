//! External program execution.
//!
//! Programs are spawned directly (no intermediate shell) and block until
//! they exit. There is no timeout: a hung probe hangs the run.

use crate::error::{EnvCheckError, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing an external program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the program succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// First non-empty line of stdout, falling back to stderr.
    ///
    /// Some tools (older `java`, `python2`) print their version on stderr.
    pub fn first_line(&self) -> Option<&str> {
        first_non_empty(&self.stdout).or_else(|| first_non_empty(&self.stderr))
    }

    /// First non-empty line of stderr, falling back to stdout.
    ///
    /// Linters report diagnostics on stderr; use this for failure messages.
    pub fn diagnostic(&self) -> Option<&str> {
        first_non_empty(&self.stderr).or_else(|| first_non_empty(&self.stdout))
    }
}

fn first_non_empty(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|line| !line.is_empty())
}

/// Run a program with arguments, capturing stdout and stderr.
///
/// A non-zero exit is reported through [`CommandResult::success`]; only a
/// failure to spawn the program is an error.
pub fn run_program<P, I, S>(program: P, args: I, cwd: Option<&Path>) -> Result<CommandResult>
where
    P: AsRef<OsStr>,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let start = Instant::now();

    let mut cmd = Command::new(program.as_ref());
    cmd.args(args);
    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }
    cmd.stdin(Stdio::null());

    let output = cmd.output().map_err(|source| EnvCheckError::Spawn {
        program: program.as_ref().to_string_lossy().into_owned(),
        source,
    })?;

    let duration = start.elapsed();
    tracing::debug!(
        "{:?} exited with {:?} in {:?}",
        program.as_ref(),
        output.status.code(),
        duration
    );

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration,
        success: output.status.success(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(stdout: &str, stderr: &str) -> CommandResult {
        CommandResult {
            exit_code: Some(0),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            duration: Duration::ZERO,
            success: true,
        }
    }

    #[test]
    fn first_line_skips_blank_lines() {
        let r = result("\n\n  v20.11.0  \nextra\n", "");
        assert_eq!(r.first_line(), Some("v20.11.0"));
    }

    #[test]
    fn first_line_falls_back_to_stderr() {
        let r = result("", "Python 2.7.18\n");
        assert_eq!(r.first_line(), Some("Python 2.7.18"));
    }

    #[test]
    fn first_line_none_when_silent() {
        assert_eq!(result("", "  \n").first_line(), None);
    }

    #[test]
    fn diagnostic_prefers_stderr() {
        let r = result("ok", "line 3: syntax error\n");
        assert_eq!(r.diagnostic(), Some("line 3: syntax error"));
    }

    #[test]
    fn run_program_missing_binary_is_error() {
        let result = run_program("envcheck-definitely-not-a-program", ["--version"], None);
        assert!(matches!(result, Err(EnvCheckError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn run_program_captures_output() {
        let r = run_program("sh", ["-c", "echo hello; echo oops >&2"], None).unwrap();
        assert!(r.success);
        assert_eq!(r.exit_code, Some(0));
        assert_eq!(r.stdout.trim(), "hello");
        assert_eq!(r.stderr.trim(), "oops");
    }

    #[cfg(unix)]
    #[test]
    fn run_program_reports_failure_exit() {
        let r = run_program("sh", ["-c", "exit 3"], None).unwrap();
        assert!(!r.success);
        assert_eq!(r.exit_code, Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn run_program_honors_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "").unwrap();
        let r = run_program("ls", Vec::<&str>::new(), Some(temp.path())).unwrap();
        assert!(r.stdout.contains("marker.txt"));
    }
}
