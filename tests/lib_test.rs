//! Library integration tests.

use envcheck::checks::{CheckContext, Section};
use envcheck::config::CheckConfig;
use envcheck::runner::{CheckRunner, RunOptions};
use envcheck::ui::MockUI;
use envcheck::EnvCheckError;
use std::fs;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = EnvCheckError::ConfigValidationError {
        message: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> envcheck::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use envcheck::cli::{Cli, Commands};

    let cli = Cli::parse_from(["envcheck", "list", "--test-dir", "/tmp"]);
    assert_eq!(cli.command, Some(Commands::List));
}

#[test]
fn runner_reports_through_mock_ui() {
    let temp = TempDir::new().unwrap();
    let project = temp.path();
    let test_dir = project.join("tests").join("docs");
    fs::create_dir_all(&test_dir).unwrap();
    fs::create_dir_all(project.join("tecgpt-desktop/src")).unwrap();

    let config = CheckConfig {
        tools: Vec::new(),
        ..Default::default()
    };
    let ctx = CheckContext::new(config, &test_dir, None).with_search_path(Vec::new());
    let mut ui = MockUI::new();

    let report = CheckRunner::new(&ctx)
        .run(&RunOptions::default(), &mut ui)
        .unwrap();

    // src exists, src-tauri/src does not
    assert!(ui.has_success("Directory src exists"));
    assert!(ui.has_error("Directory src-tauri/src is missing"));
    assert!(report.is_aborted());
    assert!(!report.reached(Section::Documents));

    let log = fs::read_to_string(test_dir.join("envcheck.log")).unwrap();
    assert!(log.contains("ERROR: Directory src-tauri/src is missing"));
    assert!(log.contains("Aborted: required directory src-tauri/src is missing"));
}
