//! Toolchain presence and version checks.
//!
//! A missing required tool is one of the two fatal checks: the workflow
//! stops as soon as one is found missing.

use regex::Regex;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::checks::{CheckContext, Flow, Section};
use crate::config::ToolSpec;
use crate::error::Result;
use crate::report::Reporter;
use crate::shell::{resolve_tool_path, run_program};

static VERSION_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+(?:\.\d+)?").expect("valid version regex"));

/// What was found for one tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolReport {
    pub name: String,
    pub program: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// First line the version probe printed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Dotted version number pulled out of `version`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_number: Option<String>,
}

impl ToolReport {
    pub fn is_present(&self) -> bool {
        self.path.is_some()
    }
}

/// Pull a dotted version number (`20.11.0`, `1.77`) out of probe output.
pub fn extract_version(text: &str) -> Option<String> {
    VERSION_NUMBER.find(text).map(|m| m.as_str().to_string())
}

/// Locate a tool and run its version probe.
pub fn probe_tool(spec: &ToolSpec, search_path: &[PathBuf]) -> ToolReport {
    let path = resolve_tool_path(&spec.program, search_path);
    let version = path.as_ref().and_then(|p| {
        match run_program(p, &spec.version_args, None) {
            Ok(result) if result.success => result.first_line().map(str::to_string),
            Ok(result) => {
                tracing::warn!(
                    "{} version probe exited with {:?}",
                    spec.program,
                    result.exit_code
                );
                None
            }
            Err(e) => {
                tracing::warn!("{} version probe failed: {}", spec.program, e);
                None
            }
        }
    });
    let version_number = version.as_deref().and_then(extract_version);

    ToolReport {
        name: spec.name.clone(),
        program: spec.program.clone(),
        required: spec.required,
        path,
        version,
        version_number,
    }
}

/// Check every configured tool, stopping at the first missing required one.
pub fn check_tools(ctx: &CheckContext, reporter: &mut Reporter<'_>) -> Result<Flow> {
    reporter.begin(Section::Tools)?;

    for spec in &ctx.config.tools {
        let mut spinner = reporter.spinner(&format!("Checking {}...", spec.name));
        let tool = probe_tool(spec, &ctx.search_path);
        spinner.finish();

        let flow = report_tool(spec, &tool, reporter)?;
        reporter.report_mut().tools.push(tool);
        if flow.is_abort() {
            return Ok(flow);
        }
    }

    Ok(Flow::Continue)
}

fn report_tool(spec: &ToolSpec, tool: &ToolReport, reporter: &mut Reporter<'_>) -> Result<Flow> {
    let hint = spec
        .install_hint
        .as_deref()
        .map(|h| format!(" ({})", h))
        .unwrap_or_default();

    match (&tool.path, &tool.version) {
        (Some(path), Some(version)) => {
            reporter.success(format!("{} found: {}", spec.name, version))?;
            reporter.detail(&format!("{} resolved to {}", spec.program, path.display()))?;
        }
        (Some(path), None) => {
            reporter.warning(format!(
                "{} found at {} but its version could not be read",
                spec.name,
                path.display()
            ))?;
        }
        (None, _) if spec.required => {
            reporter.error(format!(
                "{} is not installed: `{}` not found on PATH{}",
                spec.name, spec.program, hint
            ))?;
            let reason = format!("required tool {} is missing", spec.name);
            reporter.abort(&reason)?;
            return Ok(Flow::Abort(reason));
        }
        (None, _) => {
            reporter.warning(format!("{} is not installed (optional){}", spec.name, hint))?;
        }
    }

    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheckConfig;
    use crate::report::Report;
    use crate::runlog::RunLog;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn spec(name: &str, program: &str, required: bool) -> ToolSpec {
        ToolSpec {
            name: name.to_string(),
            role: String::new(),
            program: program.to_string(),
            version_args: vec!["--version".to_string()],
            required,
            install_hint: Some(format!("install {}", program)),
        }
    }

    #[cfg(unix)]
    fn fake_tool(dir: &Path, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", script)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn run(tools: Vec<ToolSpec>, bin: &Path, work: &Path) -> (Flow, Report, MockUI) {
        let config = CheckConfig {
            tools,
            ..Default::default()
        };
        let ctx =
            CheckContext::new(config, work, None).with_search_path(vec![bin.to_path_buf()]);
        let mut ui = MockUI::new();
        let (flow, report) = {
            let log = RunLog::start(&work.join("envcheck.log"), "t").unwrap();
            let mut reporter = Reporter::new(&mut ui, log);
            let flow = check_tools(&ctx, &mut reporter).unwrap();
            (flow, reporter.finish())
        };
        (flow, report, ui)
    }

    #[test]
    fn extract_version_finds_numbers() {
        assert_eq!(extract_version("v20.11.0"), Some("20.11.0".to_string()));
        assert_eq!(
            extract_version("rustc 1.77.2 (25ef9e3d8 2024-04-09)"),
            Some("1.77.2".to_string())
        );
        assert_eq!(extract_version("tauri-cli 2.0"), Some("2.0".to_string()));
        assert_eq!(extract_version("unknown"), None);
    }

    #[cfg(unix)]
    #[test]
    fn present_tool_reports_version() {
        let bin = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        fake_tool(bin.path(), "node", "echo v20.11.0");

        let (flow, report, ui) = run(vec![spec("Node.js", "node", true)], bin.path(), work.path());

        assert_eq!(flow, Flow::Continue);
        assert!(ui.has_success("Node.js found: v20.11.0"));
        assert_eq!(report.tools[0].version_number.as_deref(), Some("20.11.0"));
        assert_eq!(ui.spinners(), &["Checking Node.js...".to_string()]);
    }

    #[test]
    fn missing_required_tool_aborts() {
        let bin = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();

        let (flow, report, ui) = run(
            vec![spec("Node.js", "node", true), spec("npm", "npm", true)],
            bin.path(),
            work.path(),
        );

        assert!(flow.is_abort());
        assert!(ui.has_error("Node.js is not installed"));
        assert!(ui.has_error("install node"));
        // npm is never looked at
        assert_eq!(report.tools.len(), 1);
        assert!(report.is_aborted());
    }

    #[test]
    fn missing_optional_tool_warns_and_continues() {
        let bin = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();

        let (flow, report, ui) = run(
            vec![spec("Tauri CLI", "cargo-tauri", false)],
            bin.path(),
            work.path(),
        );

        assert_eq!(flow, Flow::Continue);
        assert!(ui.has_warning("Tauri CLI is not installed (optional)"));
        assert_eq!(report.errors(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn failing_version_probe_warns() {
        let bin = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        fake_tool(bin.path(), "cargo", "exit 1");

        let (flow, report, ui) = run(vec![spec("Cargo", "cargo", true)], bin.path(), work.path());

        assert_eq!(flow, Flow::Continue);
        assert!(ui.has_warning("version could not be read"));
        assert!(report.tools[0].is_present());
        assert!(report.tools[0].version.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn version_on_stderr_is_accepted() {
        let bin = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        fake_tool(bin.path(), "python", "echo 'Python 2.7.18' >&2");

        let (_, report, _) = run(vec![spec("Python", "python", true)], bin.path(), work.path());

        assert_eq!(report.tools[0].version.as_deref(), Some("Python 2.7.18"));
    }
}
