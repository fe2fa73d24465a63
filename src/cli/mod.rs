//! Command-line interface for envcheck.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::{Command, CommandDispatcher, CommandResult};
