//! Project layout checks.

use std::fs::File;
use std::path::Path;

use crate::checks::{CheckContext, Flow, Section};
use crate::error::Result;
use crate::report::Reporter;

/// Check required directories, then required files, under the app dir.
///
/// The first missing directory stops the run. Missing files are errors
/// but do not.
pub fn check_structure(ctx: &CheckContext, reporter: &mut Reporter<'_>) -> Result<Flow> {
    reporter.begin(Section::Structure)?;
    tracing::debug!("App directory: {}", ctx.app_dir.display());

    for dir in &ctx.config.directories {
        let full = ctx.app_dir.join(dir);
        if full.is_dir() {
            reporter.success(format!("Directory {} exists", dir.display()))?;
            continue;
        }

        if !ctx.app_dir.is_dir() {
            reporter.error(format!(
                "Directory {} is missing (app directory {} not found)",
                dir.display(),
                ctx.app_dir.display()
            ))?;
        } else {
            reporter.error(format!("Directory {} is missing", dir.display()))?;
        }
        let reason = format!("required directory {} is missing", dir.display());
        reporter.abort(&reason)?;
        return Ok(Flow::Abort(reason));
    }

    for file in &ctx.config.files {
        match open_file(&ctx.app_dir.join(file)) {
            Ok(()) => reporter.success(format!("File {} found", file.display()))?,
            Err(reason) => {
                reporter.error(format!("File {} {}", file.display(), reason))?;
            }
        }
    }

    Ok(Flow::Continue)
}

fn open_file(path: &Path) -> std::result::Result<(), &'static str> {
    if !path.is_file() {
        return Err("is missing");
    }
    File::open(path).map(|_| ()).map_err(|e| {
        tracing::debug!("Cannot open {}: {}", path.display(), e);
        "is not readable"
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheckConfig;
    use crate::report::Report;
    use crate::runlog::RunLog;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn run(root: &Path) -> (Flow, Report, MockUI) {
        let ctx = CheckContext::new(CheckConfig::default(), root, Some(root));
        let mut ui = MockUI::new();
        let (flow, report) = {
            let log = RunLog::start(&root.join("envcheck.log"), "t").unwrap();
            let mut reporter = Reporter::new(&mut ui, log);
            let flow = check_structure(&ctx, &mut reporter).unwrap();
            (flow, reporter.finish())
        };
        (flow, report, ui)
    }

    fn scaffold(root: &Path) {
        let app = root.join("tecgpt-desktop");
        fs::create_dir_all(app.join("src")).unwrap();
        fs::create_dir_all(app.join("src-tauri/src")).unwrap();
        fs::write(app.join("package.json"), "{}").unwrap();
        fs::write(app.join("package-lock.json"), "{}").unwrap();
        fs::write(app.join("src-tauri/tauri.conf.json"), "{}").unwrap();
    }

    #[test]
    fn complete_layout_passes() {
        let temp = TempDir::new().unwrap();
        scaffold(temp.path());

        let (flow, report, _) = run(temp.path());

        assert_eq!(flow, Flow::Continue);
        assert_eq!(report.successes(), 5);
        assert_eq!(report.errors(), 0);
    }

    #[test]
    fn missing_backend_source_aborts() {
        let temp = TempDir::new().unwrap();
        scaffold(temp.path());
        fs::remove_dir_all(temp.path().join("tecgpt-desktop/src-tauri/src")).unwrap();

        let (flow, report, ui) = run(temp.path());

        assert!(flow.is_abort());
        assert!(ui.has_error("src-tauri/src is missing"));
        // files are never checked once a directory is missing
        assert!(!ui.has_success("package.json"));
        assert_eq!(report.exit_code(), crate::report::EXIT_ABORTED);
    }

    #[test]
    fn missing_app_dir_reported_against_first_directory() {
        let temp = TempDir::new().unwrap();

        let (flow, _, ui) = run(temp.path());

        assert!(flow.is_abort());
        assert_eq!(ui.errors().len(), 1);
        assert!(ui.has_error("Directory src is missing (app directory"));
    }

    #[test]
    fn missing_file_is_not_fatal() {
        let temp = TempDir::new().unwrap();
        scaffold(temp.path());
        fs::remove_file(temp.path().join("tecgpt-desktop/package-lock.json")).unwrap();

        let (flow, report, ui) = run(temp.path());

        assert_eq!(flow, Flow::Continue);
        assert!(ui.has_error("File package-lock.json is missing"));
        assert!(ui.has_success("src-tauri/tauri.conf.json"));
        assert_eq!(report.errors(), 1);
    }

    #[test]
    fn directory_in_place_of_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        scaffold(temp.path());
        let pkg = temp.path().join("tecgpt-desktop/package.json");
        fs::remove_file(&pkg).unwrap();
        fs::create_dir(&pkg).unwrap();

        let (_, _, ui) = run(temp.path());
        assert!(ui.has_error("File package.json is missing"));
    }
}
