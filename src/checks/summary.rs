//! End-of-run summary.

use serde::Serialize;
use std::fs;
use std::time::Duration;

use crate::checks::CheckContext;
use crate::error::Result;
use crate::report::Reporter;
use crate::ui::{format_duration, format_size};

const RULE: &str = "==========================================";

/// Sample totals, counted independently of the document pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SummaryStats {
    pub file_count: usize,
    pub total_bytes: u64,
}

/// Count the samples that are regular files and sum their sizes.
pub fn collect_stats(ctx: &CheckContext) -> SummaryStats {
    ctx.config
        .samples
        .iter()
        .filter_map(|name| fs::metadata(ctx.sample_path(name)).ok())
        .filter(|meta| meta.is_file())
        .fold(SummaryStats::default(), |acc, meta| SummaryStats {
            file_count: acc.file_count + 1,
            total_bytes: acc.total_bytes + meta.len(),
        })
}

/// Lines of the summary block.
pub fn render_summary(
    ctx: &CheckContext,
    stats: &SummaryStats,
    counts: (usize, usize, usize),
    elapsed: Duration,
) -> Vec<String> {
    let (passed, warnings, errors) = counts;
    vec![
        String::new(),
        RULE.to_string(),
        format!("  {} Environment Check Summary", ctx.config.app_name),
        RULE.to_string(),
        format!("  Test directory:  {}", ctx.test_dir.display()),
        format!("  Project root:    {}", ctx.project_root.display()),
        format!("  Sample files:    {}", stats.file_count),
        format!("  Total size:      {}", format_size(stats.total_bytes)),
        format!(
            "  Results:         {} passed, {} warnings, {} errors",
            passed, warnings, errors
        ),
        format!("  Log file:        {}", ctx.log_path().display()),
        format!("  Duration:        {}", format_duration(elapsed)),
        String::new(),
        "Next steps:".to_string(),
        format!("  1. cd {} && npm run tauri dev", ctx.app_dir.display()),
        format!(
            "  2. Add {} as an indexed folder in the application",
            ctx.test_dir.display()
        ),
        format!(
            "  3. Run ./{} for suggested search queries",
            ctx.config.runner_script
        ),
    ]
}

/// Print the summary block and record the totals.
pub fn report_summary(
    ctx: &CheckContext,
    reporter: &mut Reporter<'_>,
    elapsed: Duration,
) -> Result<SummaryStats> {
    let stats = collect_stats(ctx);
    let counts = {
        let report = reporter.report();
        (report.successes(), report.warnings(), report.errors())
    };

    for line in render_summary(ctx, &stats, counts, elapsed) {
        reporter.info(&line)?;
    }

    reporter.report_mut().summary = Some(stats);
    Ok(stats)
}
