//! External program execution, PATH lookup and platform detection.

pub mod command;
pub mod lookup;
pub mod platform;

pub use command::{run_program, CommandResult};
pub use lookup::{is_executable, parse_system_path, resolve_tool_path};
pub use platform::{is_ci, OsFamily};
