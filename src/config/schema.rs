//! Configuration schema definitions for envcheck.
//!
//! Every check the workflow runs is described here as data: the tool
//! table, the required layout, dependency markers, sample documents and
//! syntax rules. The built-in defaults describe the TecGPT Desktop
//! project; an `envcheck.yml` only needs to name what it changes.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{EnvCheckError, Result};

/// Root configuration structure for envcheck.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Application name (for display purposes)
    pub app_name: String,

    /// Project root, relative to the test directory
    pub project_root: PathBuf,

    /// Application subtree, relative to the project root
    pub app_dir: PathBuf,

    /// Log file name inside the test directory
    pub log_file: String,

    /// Generated runner script name inside the test directory
    pub runner_script: String,

    /// Memory below this many megabytes produces a warning
    pub min_memory_mb: u64,

    /// External programs to look for, in check order
    pub tools: Vec<ToolSpec>,

    /// Directories that must exist under the app dir (first missing aborts)
    pub directories: Vec<PathBuf>,

    /// Files expected under the app dir
    pub files: Vec<PathBuf>,

    /// Artifacts whose presence means dependencies were installed
    pub markers: Vec<DependencyMarker>,

    /// Sample documents in the test directory
    pub samples: Vec<String>,

    /// Syntax validation rules for sample documents
    pub syntax: Vec<SyntaxRule>,

    /// Search queries suggested by the generated runner script
    pub search_queries: Vec<String>,
}

/// An external program the environment needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Display name
    pub name: String,

    /// What the tool is for (runtime, compiler, ...)
    #[serde(default)]
    pub role: String,

    /// Executable looked up on PATH
    pub program: String,

    /// Arguments that make the program print its version
    #[serde(default = "default_version_args")]
    pub version_args: Vec<String>,

    /// Whether a missing tool aborts the run
    #[serde(default = "default_true")]
    pub required: bool,

    /// Shown when the tool is missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_hint: Option<String>,
}

/// A lock or manifest artifact standing in for "dependencies installed".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyMarker {
    /// Ecosystem name (npm, cargo)
    pub ecosystem: String,

    /// Path relative to the app dir
    pub path: PathBuf,

    /// Command that produces the marker
    pub install_command: String,
}

/// How one sample file is syntax-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxRule {
    /// File type label shown in output
    pub label: String,

    /// Sample file name, relative to the test directory
    pub file: PathBuf,

    /// Validator used for the file
    pub validator: Validator,
}

/// A syntax validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Validator {
    /// Run an external program with the file path appended to `args`.
    Command {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },
    /// Parse as JSON in-process.
    Json,
    /// Parse as YAML in-process.
    Yaml,
}

impl Validator {
    /// External program this validator depends on, if any.
    pub fn program(&self) -> Option<&str> {
        match self {
            Validator::Command { program, .. } => Some(program),
            Validator::Json | Validator::Yaml => None,
        }
    }

    /// Short human-readable description.
    pub fn describe(&self) -> String {
        match self {
            Validator::Command { program, args } if args.is_empty() => program.clone(),
            Validator::Command { program, args } => format!("{} {}", program, args.join(" ")),
            Validator::Json => "built-in JSON parser".to_string(),
            Validator::Yaml => "built-in YAML parser".to_string(),
        }
    }
}

fn default_version_args() -> Vec<String> {
    vec!["--version".to_string()]
}

fn default_true() -> bool {
    true
}

fn tool(name: &str, role: &str, program: &str, required: bool, install_hint: &str) -> ToolSpec {
    ToolSpec {
        name: name.to_string(),
        role: role.to_string(),
        program: program.to_string(),
        version_args: default_version_args(),
        required,
        install_hint: Some(install_hint.to_string()),
    }
}

fn command_validator(program: &str, args: &[&str]) -> Validator {
    Validator::Command {
        program: program.to_string(),
        args: args.iter().map(|a| a.to_string()).collect(),
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            app_name: "TecGPT Desktop".to_string(),
            project_root: PathBuf::from("../.."),
            app_dir: PathBuf::from("tecgpt-desktop"),
            log_file: "envcheck.log".to_string(),
            runner_script: "run_tests.sh".to_string(),
            min_memory_mb: 8192,
            tools: vec![
                tool(
                    "Node.js",
                    "runtime",
                    "node",
                    true,
                    "Install Node.js 18+ from https://nodejs.org",
                ),
                tool("npm", "package manager", "npm", true, "npm ships with Node.js"),
                tool("Rust", "compiler", "rustc", true, "Install Rust via https://rustup.rs"),
                tool("Cargo", "build tool", "cargo", true, "Cargo ships with rustup"),
                tool(
                    "Tauri CLI",
                    "packaging",
                    "cargo-tauri",
                    false,
                    "cargo install tauri-cli",
                ),
            ],
            directories: vec![PathBuf::from("src"), PathBuf::from("src-tauri/src")],
            files: vec![
                PathBuf::from("package.json"),
                PathBuf::from("package-lock.json"),
                PathBuf::from("src-tauri/tauri.conf.json"),
            ],
            markers: vec![
                DependencyMarker {
                    ecosystem: "npm".to_string(),
                    path: PathBuf::from("node_modules"),
                    install_command: "npm install".to_string(),
                },
                DependencyMarker {
                    ecosystem: "cargo".to_string(),
                    path: PathBuf::from("src-tauri/Cargo.lock"),
                    install_command: "cd src-tauri && cargo fetch".to_string(),
                },
            ],
            samples: [
                "test_code.py",
                "test_data.json",
                "test_page.html",
                "test_script.sh",
                "test_document.md",
                "test_notes.txt",
                "test_data.csv",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            syntax: vec![
                SyntaxRule {
                    label: "Python".to_string(),
                    file: PathBuf::from("test_code.py"),
                    validator: command_validator("python3", &["-m", "py_compile"]),
                },
                SyntaxRule {
                    label: "JSON".to_string(),
                    file: PathBuf::from("test_data.json"),
                    validator: Validator::Json,
                },
                SyntaxRule {
                    label: "HTML".to_string(),
                    file: PathBuf::from("test_page.html"),
                    validator: command_validator("xmllint", &["--html", "--noout"]),
                },
                SyntaxRule {
                    label: "Shell".to_string(),
                    file: PathBuf::from("test_script.sh"),
                    validator: command_validator("bash", &["-n"]),
                },
            ],
            search_queries: [
                "DocumentProcessor",
                "python function",
                "database schema",
                "search index",
                "configuration",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl CheckConfig {
    /// Reject configurations the workflow cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.samples.is_empty() {
            return Err(invalid("at least one sample file is required"));
        }
        if self.min_memory_mb == 0 {
            return Err(invalid("min_memory_mb must be greater than zero"));
        }
        if self.log_file.trim().is_empty() || self.runner_script.trim().is_empty() {
            return Err(invalid("log_file and runner_script must not be empty"));
        }
        for tool in &self.tools {
            if tool.program.trim().is_empty() {
                return Err(invalid(&format!("tool '{}' has no program", tool.name)));
            }
        }

        let relative = self
            .directories
            .iter()
            .chain(&self.files)
            .chain(self.markers.iter().map(|m| &m.path))
            .chain(self.syntax.iter().map(|r| &r.file));
        for path in relative {
            if path.is_absolute() {
                return Err(invalid(&format!(
                    "'{}' must be relative to its base directory",
                    path.display()
                )));
            }
        }
        Ok(())
    }

    /// Resolve the project root for a test directory.
    pub fn project_root_for(&self, test_dir: &Path) -> PathBuf {
        test_dir.join(&self.project_root)
    }
}

fn invalid(message: &str) -> EnvCheckError {
    EnvCheckError::ConfigValidationError {
        message: message.to_string(),
    }
}
