//! Configuration file discovery and loading.
//!
//! A config file is optional. Lookup order:
//! 1. An explicit path (`--config` / `ENVCHECK_CONFIG`), which must exist
//! 2. `envcheck.yml` in the test directory
//! 3. `.envcheck.yml` in the test directory
//! 4. Built-in defaults

use crate::config::schema::CheckConfig;
use crate::error::{EnvCheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File names searched for in the test directory, in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &["envcheck.yml", ".envcheck.yml"];

/// Find a config file in the test directory.
pub fn discover_config(test_dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| test_dir.join(name))
        .find(|path| path.is_file())
}

/// Load a single config file and parse it into CheckConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<CheckConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EnvCheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EnvCheckError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into CheckConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<CheckConfig> {
    if content.trim().is_empty() {
        return Ok(CheckConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| EnvCheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override, then validate it.
///
/// Returns the config together with the file it came from (None when the
/// built-in defaults are used).
pub fn load_config(
    test_dir: &Path,
    config_override: Option<&Path>,
) -> Result<(CheckConfig, Option<PathBuf>)> {
    let source = match config_override {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(test_dir),
    };

    let config = match &source {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(path)?
        }
        None => {
            tracing::debug!("No config file found, using built-in defaults");
            CheckConfig::default()
        }
    };

    config.validate()?;
    Ok((config, source))
}
