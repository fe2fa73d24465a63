//! Locating tool binaries on a search path without spawning `which`.

use std::path::{Path, PathBuf};

#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .is_ok_and(|meta| meta.permissions().mode() & 0o111 != 0)
}

/// Windows has no execute bit; the extension decides.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

fn file_names(program: &str) -> Vec<String> {
    if cfg!(windows) && Path::new(program).extension().is_none() {
        ["exe", "cmd", "bat"]
            .iter()
            .map(|ext| format!("{program}.{ext}"))
            .collect()
    } else {
        vec![program.to_string()]
    }
}

/// First executable regular file named `program` in `search_path`, in
/// order.
pub fn resolve_tool_path(program: &str, search_path: &[PathBuf]) -> Option<PathBuf> {
    let names = file_names(program);
    search_path.iter().find_map(|dir| {
        names
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file() && is_executable(candidate))
    })
}

/// Directories listed in `PATH`, empty when it is unset.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}
