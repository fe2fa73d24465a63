//! OS, memory and disk probing.

use serde::Serialize;
use std::path::{Path, PathBuf};
use sysinfo::{Disks, System};

use crate::checks::{CheckContext, Section};
use crate::error::Result;
use crate::report::Reporter;
use crate::shell::OsFamily;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Snapshot of the machine the checks run on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemInfo {
    pub os: OsFamily,
    pub arch: String,
    /// None when the platform does not report memory.
    pub total_memory_mb: Option<u64>,
    /// None when no disk holds the test directory.
    pub free_disk_mb: Option<u64>,
}

/// Read OS, memory and the free space of the disk holding `test_dir`.
pub fn probe_system(test_dir: &Path) -> SystemInfo {
    let mut system = System::new();
    system.refresh_memory();
    let total_memory_mb = match system.total_memory() / BYTES_PER_MB {
        0 => None,
        mb => Some(mb),
    };

    let disks = Disks::new_with_refreshed_list();
    let mounts: Vec<(PathBuf, u64)> = disks
        .list()
        .iter()
        .map(|d| (d.mount_point().to_path_buf(), d.available_space()))
        .collect();
    let target = test_dir
        .canonicalize()
        .unwrap_or_else(|_| test_dir.to_path_buf());
    let free_disk_mb = free_space_for(&target, &mounts).map(|bytes| bytes / BYTES_PER_MB);

    SystemInfo {
        os: OsFamily::current(),
        arch: std::env::consts::ARCH.to_string(),
        total_memory_mb,
        free_disk_mb,
    }
}

/// Available bytes on the mount with the longest prefix of `path`.
pub fn free_space_for(path: &Path, mounts: &[(PathBuf, u64)]) -> Option<u64> {
    mounts
        .iter()
        .filter(|(mount, _)| path.starts_with(mount))
        .max_by_key(|(mount, _)| mount.components().count())
        .map(|(_, available)| *available)
}

/// Probe the machine and report on it.
pub fn check_system(ctx: &CheckContext, reporter: &mut Reporter<'_>) -> Result<()> {
    reporter.begin(Section::Environment)?;
    let info = probe_system(&ctx.test_dir);
    tracing::debug!("System probe: {:?}", info);
    report_system(&info, ctx.config.min_memory_mb, reporter)?;
    reporter.report_mut().system = Some(info);
    Ok(())
}

/// Turn a system snapshot into outcomes.
pub fn report_system(
    info: &SystemInfo,
    min_memory_mb: u64,
    reporter: &mut Reporter<'_>,
) -> Result<()> {
    if info.os.is_known() {
        reporter.success(format!("Operating system: {} ({})", info.os, info.arch))?;
    } else {
        reporter.warning(format!(
            "Operating system: {} ({}), not a supported desktop platform",
            info.os, info.arch
        ))?;
    }

    match info.total_memory_mb {
        Some(mb) if mb >= min_memory_mb => {
            reporter.success(format!("Memory: {} MB", mb))?;
        }
        Some(mb) => {
            reporter.warning(format!(
                "Memory: {} MB (at least {} MB recommended)",
                mb, min_memory_mb
            ))?;
        }
        None => tracing::debug!("Total memory unavailable on this platform, skipping"),
    }

    match info.free_disk_mb {
        Some(mb) => reporter.success(format!("Free disk space: {} MB", mb))?,
        None => reporter.warning("Could not determine free disk space")?,
    }

    Ok(())
}
