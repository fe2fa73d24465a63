//! Dependency installation checks.
//!
//! Presence of a lock or vendor artifact is taken as proof that the
//! ecosystem's install step ran. Nothing is resolved or verified.

use crate::checks::{CheckContext, Section};
use crate::error::Result;
use crate::report::Reporter;

pub fn check_dependencies(ctx: &CheckContext, reporter: &mut Reporter<'_>) -> Result<()> {
    reporter.begin(Section::Dependencies)?;

    for marker in &ctx.config.markers {
        let path = ctx.app_dir.join(&marker.path);
        tracing::debug!("Looking for {} marker {}", marker.ecosystem, path.display());
        if path.exists() {
            reporter.success(format!(
                "{} dependencies resolved ({} present)",
                marker.ecosystem,
                marker.path.display()
            ))?;
        } else {
            reporter.warning(format!(
                "{} dependencies not installed: run `{}`",
                marker.ecosystem, marker.install_command
            ))?;
        }
    }

    Ok(())
}
