//! Generated helper script for manual testing.
//!
//! The script lists the samples that existed when it was written and
//! prints search queries to try in the application. It validates nothing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::checks::{CheckContext, Section};
use crate::error::Result;
use crate::report::Reporter;

/// Script body for the given samples and queries.
pub fn render(app_name: &str, present: &[&str], queries: &[String]) -> String {
    let mut script = String::from("#!/bin/bash\n");
    script.push_str(&format!("# Generated by envcheck for {}\n\n", app_name));
    script.push_str("cd \"$(dirname \"$0\")\"\n\n");

    script.push_str("echo \"Sample documents:\"\n");
    for name in present {
        script.push_str(&format!("ls -la {}\n", shell_quote(name)));
    }

    script.push_str("\necho\necho \"Suggested search queries:\"\n");
    for query in queries {
        script.push_str(&format!("echo {}\n", shell_quote(&format!("  - {}", query))));
    }
    script
}

fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

/// Samples that exist right now, in sample order.
pub fn present_samples(ctx: &CheckContext) -> Vec<&str> {
    ctx.config
        .samples
        .iter()
        .filter(|name| ctx.sample_path(name.as_str()).is_file())
        .map(String::as_str)
        .collect()
}

/// Write the script with execute permission.
pub fn write_script(path: &Path, body: &str) -> std::io::Result<()> {
    fs::write(path, body)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    }
    Ok(())
}

/// Generate the runner script. A write failure is an error outcome, not a
/// failure of the run.
pub fn generate_runner(
    ctx: &CheckContext,
    reporter: &mut Reporter<'_>,
) -> Result<Option<PathBuf>> {
    reporter.begin(Section::Runner)?;

    let present = present_samples(ctx);
    let body = render(&ctx.config.app_name, &present, &ctx.config.search_queries);
    let path = ctx.runner_path();

    match write_script(&path, &body) {
        Ok(()) => {
            reporter.success(format!(
                "Test runner written to {} ({} samples)",
                path.display(),
                present.len()
            ))?;
            reporter.report_mut().runner_script = Some(path.clone());
            Ok(Some(path))
        }
        Err(e) => {
            reporter.error(format!("Could not write {}: {}", path.display(), e))?;
            Ok(None)
        }
    }
}
