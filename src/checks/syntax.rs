//! Syntax validation of sample documents.
//!
//! Each rule names a sample and a validator. External validators that are
//! not installed make the rule a warning, never an error.

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use crate::checks::{CheckContext, CheckStatus, Section};
use crate::config::{SyntaxRule, Validator};
use crate::error::Result;
use crate::report::Reporter;
use crate::shell::{resolve_tool_path, run_program};

/// Result of applying one rule.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleResult {
    Valid,
    Invalid(String),
    Skipped(String),
}

impl RuleResult {
    fn status(&self) -> CheckStatus {
        match self {
            RuleResult::Valid => CheckStatus::Success,
            RuleResult::Invalid(_) => CheckStatus::Error,
            RuleResult::Skipped(_) => CheckStatus::Warning,
        }
    }
}

/// Apply one rule to its sample.
pub fn validate_rule(rule: &SyntaxRule, ctx: &CheckContext) -> Result<RuleResult> {
    let path = ctx.sample_path(&rule.file);

    match &rule.validator {
        Validator::Command { program, args } => {
            // a missing validator is reported even when the file is missing too
            let Some(resolved) = resolve_tool_path(program, &ctx.search_path) else {
                return Ok(RuleResult::Skipped(format!("{} not installed", program)));
            };
            if !path.is_file() {
                return Ok(RuleResult::Skipped("file missing".to_string()));
            }
            run_validator(&resolved, args, &path)
        }
        _ if !path.is_file() => Ok(RuleResult::Skipped("file missing".to_string())),
        Validator::Json => Ok(parse_in_process(&path, |text| {
            serde_json::from_str::<serde_json::Value>(text)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })),
        Validator::Yaml => Ok(parse_in_process(&path, |text| {
            serde_yaml::from_str::<serde_yaml::Value>(text)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })),
    }
}

fn run_validator(program: &Path, args: &[String], file: &Path) -> Result<RuleResult> {
    let argv: Vec<OsString> = args
        .iter()
        .map(OsString::from)
        .chain(std::iter::once(file.as_os_str().to_os_string()))
        .collect();

    let result = run_program(program, argv, file.parent())?;
    if result.success {
        Ok(RuleResult::Valid)
    } else {
        let diagnostic = result
            .diagnostic()
            .map(str::to_string)
            .unwrap_or_else(|| format!("exited with {:?}", result.exit_code));
        Ok(RuleResult::Invalid(diagnostic))
    }
}

fn parse_in_process<F>(path: &Path, parse: F) -> RuleResult
where
    F: Fn(&str) -> std::result::Result<(), String>,
{
    match fs::read_to_string(path) {
        Ok(text) => match parse(&text) {
            Ok(()) => RuleResult::Valid,
            Err(e) => RuleResult::Invalid(e),
        },
        Err(e) => RuleResult::Invalid(format!("cannot read file: {}", e)),
    }
}

/// Run every syntax rule in order. A failing rule never stops later ones.
pub fn check_syntax(ctx: &CheckContext, reporter: &mut Reporter<'_>) -> Result<()> {
    reporter.begin(Section::Syntax)?;

    for rule in &ctx.config.syntax {
        let mut spinner = reporter.spinner(&format!("Validating {}...", rule.label));
        let result = validate_rule(rule, ctx);
        spinner.finish();

        let result = match result {
            Ok(result) => result,
            // the program was on PATH but could not be spawned
            Err(e) => RuleResult::Skipped(e.to_string()),
        };
        reporter.record(result.status(), describe(rule, &result))?;
        reporter.detail(&format!("{}: {}", rule.label, rule.validator.describe()))?;
    }

    Ok(())
}

fn describe(rule: &SyntaxRule, result: &RuleResult) -> String {
    let file = rule.file.display();
    match result {
        RuleResult::Valid => format!("{} syntax valid ({})", rule.label, file),
        RuleResult::Invalid(diagnostic) => {
            format!("{} syntax error in {}: {}", rule.label, file, diagnostic)
        }
        RuleResult::Skipped(reason) => {
            format!("{} validation skipped ({})", rule.label, reason)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheckConfig;
    use crate::report::Report;
    use crate::runlog::RunLog;
    use crate::ui::MockUI;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn rule(label: &str, file: &str, validator: Validator) -> SyntaxRule {
        SyntaxRule {
            label: label.to_string(),
            file: PathBuf::from(file),
            validator,
        }
    }

    fn run(rules: Vec<SyntaxRule>, dir: &Path, bin: &Path) -> (Report, MockUI) {
        let config = CheckConfig {
            syntax: rules,
            ..Default::default()
        };
        let ctx =
            CheckContext::new(config, dir, Some(dir)).with_search_path(vec![bin.to_path_buf()]);
        let mut ui = MockUI::new();
        let report = {
            let log = RunLog::start(&dir.join("envcheck.log"), "t").unwrap();
            let mut reporter = Reporter::new(&mut ui, log);
            check_syntax(&ctx, &mut reporter).unwrap();
            reporter.finish()
        };
        (report, ui)
    }

    #[cfg(unix)]
    fn fake_tool(dir: &Path, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", script)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn invalid_json_is_error_and_later_rules_run() {
        let dir = TempDir::new().unwrap();
        let bin = TempDir::new().unwrap();
        fs::write(dir.path().join("test_data.json"), "{\"a\": [1, 2,}").unwrap();
        fs::write(dir.path().join("config.yml"), "name: demo\nitems: [1, 2]\n").unwrap();

        let (report, ui) = run(
            vec![
                rule("JSON", "test_data.json", Validator::Json),
                rule("YAML", "config.yml", Validator::Yaml),
            ],
            dir.path(),
            bin.path(),
        );

        assert!(ui.has_error("JSON syntax error in test_data.json"));
        assert!(ui.has_success("YAML syntax valid (config.yml)"));
        assert_eq!(report.errors(), 1);
    }

    #[test]
    fn valid_json_passes() {
        let dir = TempDir::new().unwrap();
        let bin = TempDir::new().unwrap();
        fs::write(dir.path().join("test_data.json"), r#"{"rows": [{"id": 1}]}"#).unwrap();

        let (report, _) = run(
            vec![rule("JSON", "test_data.json", Validator::Json)],
            dir.path(),
            bin.path(),
        );
        assert_eq!(report.successes(), 1);
    }

    #[test]
    fn missing_validator_program_is_skipped() {
        let dir = TempDir::new().unwrap();
        let bin = TempDir::new().unwrap();
        fs::write(dir.path().join("test_page.html"), "<html></html>").unwrap();

        let validator = Validator::Command {
            program: "xmllint".to_string(),
            args: vec!["--html".to_string(), "--noout".to_string()],
        };
        let (report, ui) = run(
            vec![rule("HTML", "test_page.html", validator)],
            dir.path(),
            bin.path(),
        );

        assert!(ui.has_warning("HTML validation skipped (xmllint not installed)"));
        assert_eq!(report.warnings(), 1);
    }

    #[test]
    fn missing_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        let bin = TempDir::new().unwrap();

        let (_, ui) = run(
            vec![rule("JSON", "test_data.json", Validator::Json)],
            dir.path(),
            bin.path(),
        );
        assert!(ui.has_warning("JSON validation skipped (file missing)"));
    }

    #[cfg(unix)]
    #[test]
    fn failing_external_validator_reports_diagnostic() {
        let dir = TempDir::new().unwrap();
        let bin = TempDir::new().unwrap();
        fs::write(dir.path().join("test_script.sh"), "if then fi").unwrap();
        fake_tool(
            bin.path(),
            "shcheck",
            "echo \"$1: line 1: syntax error near unexpected token\" >&2; exit 2",
        );

        let validator = Validator::Command {
            program: "shcheck".to_string(),
            args: vec![],
        };
        let (report, ui) = run(
            vec![rule("Shell", "test_script.sh", validator)],
            dir.path(),
            bin.path(),
        );

        assert!(ui.has_error("Shell syntax error in test_script.sh"));
        assert!(ui.has_error("syntax error near unexpected token"));
        assert_eq!(report.errors(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn external_validator_receives_args_then_file() {
        let dir = TempDir::new().unwrap();
        let bin = TempDir::new().unwrap();
        fs::write(dir.path().join("test_code.py"), "print('hi')\n").unwrap();
        fake_tool(
            bin.path(),
            "pycheck",
            "[ \"$1\" = \"-m\" ] && [ \"$2\" = \"py_compile\" ] && [ -f \"$3\" ]",
        );

        let validator = Validator::Command {
            program: "pycheck".to_string(),
            args: vec!["-m".to_string(), "py_compile".to_string()],
        };
        let (_, ui) = run(
            vec![rule("Python", "test_code.py", validator)],
            dir.path(),
            bin.path(),
        );
        assert!(ui.has_success("Python syntax valid (test_code.py)"));
    }
}
