//! Sample document presence and sizes.

use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::checks::{CheckContext, Section};
use crate::error::Result;
use crate::report::Reporter;
use crate::ui::format_size;

/// Totals from the document pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentStats {
    pub total: usize,
    pub valid: usize,
    pub total_bytes: u64,
    /// Samples that were missing or unreadable, in sample order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}

impl DocumentStats {
    pub fn all_valid(&self) -> bool {
        self.valid == self.total
    }
}

/// Size of a sample that exists and opens for reading.
fn readable_size(path: &Path) -> std::io::Result<u64> {
    let file = File::open(path)?;
    let meta = file.metadata()?;
    if !meta.is_file() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "not a regular file",
        ));
    }
    Ok(meta.len())
}

pub fn check_documents(ctx: &CheckContext, reporter: &mut Reporter<'_>) -> Result<DocumentStats> {
    reporter.begin(Section::Documents)?;

    let mut stats = DocumentStats {
        total: ctx.config.samples.len(),
        ..Default::default()
    };

    for name in &ctx.config.samples {
        let path = ctx.sample_path(name);
        match readable_size(&path) {
            Ok(size) => {
                stats.valid += 1;
                stats.total_bytes += size;
                reporter.success(format!("{} ({})", name, format_size(size)))?;
            }
            Err(e) => {
                tracing::debug!("{}: {}", path.display(), e);
                stats.missing.push(name.clone());
                reporter.error(format!("{} is missing or unreadable", name))?;
            }
        }
    }

    let line = format!(
        "{}/{} sample files valid ({})",
        stats.valid,
        stats.total,
        format_size(stats.total_bytes)
    );
    if stats.all_valid() {
        reporter.success(line)?;
    } else {
        reporter.error(line)?;
    }

    reporter.report_mut().documents = Some(stats.clone());
    Ok(stats)
}
