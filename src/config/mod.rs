//! Configuration loading, parsing, and validation for envcheck.
//!
//! - Schema definitions and built-in check tables in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use envcheck::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("envcheck.yml"), "app_name: Demo").unwrap();
//!
//! let (config, source) = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.app_name, "Demo");
//! assert!(source.is_some());
//! ```

pub mod loader;
pub mod schema;

pub use loader::{discover_config, load_config, load_config_file, parse_config};
pub use schema::{CheckConfig, DependencyMarker, SyntaxRule, ToolSpec, Validator};
