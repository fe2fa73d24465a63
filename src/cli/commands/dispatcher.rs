//! Routes a parsed [`Cli`] to the subcommand it names. Configuration is
//! loaded once here, so every subcommand sees the same [`CheckContext`].

use std::path::{Path, PathBuf};

use crate::checks::CheckContext;
use crate::cli::args::{Cli, Commands};
use crate::config::load_config;
use crate::error::Result;
use crate::ui::UserInterface;

use super::check::CheckCommand;
use super::list::ListCommand;

/// A CLI subcommand.
pub trait Command {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Process exit status a command finished with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    pub exit_code: i32,
}

impl CommandResult {
    pub fn ok() -> Self {
        Self::with_exit_code(0)
    }

    pub fn with_exit_code(exit_code: i32) -> Self {
        Self { exit_code }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

pub struct CommandDispatcher {
    test_dir: PathBuf,
}

impl CommandDispatcher {
    pub fn new(test_dir: PathBuf) -> Self {
        Self { test_dir }
    }

    pub fn test_dir(&self) -> &Path {
        &self.test_dir
    }

    /// Load configuration and build the shared check context.
    pub fn context(&self, cli: &Cli) -> Result<CheckContext> {
        let (config, _) = load_config(&self.test_dir, cli.config.as_deref())?;
        Ok(CheckContext::new(config, &self.test_dir, cli.project_root.as_deref()))
    }

    /// Run the requested subcommand, `check` when none is given.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = self.context(cli)?;
        let command: Box<dyn Command> = match cli.command.unwrap_or(Commands::Check) {
            Commands::Check => Box::new(CheckCommand::new(ctx, !cli.no_runner, cli.json)),
            Commands::List => Box::new(ListCommand::new(ctx)),
        };
        command.execute(ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn only_exit_code_zero_is_success() {
        assert!(CommandResult::ok().is_success());
        assert!(!CommandResult::with_exit_code(1).is_success());
        assert_eq!(CommandResult::with_exit_code(2).exit_code, 2);
    }

    #[test]
    fn context_uses_config_in_test_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("envcheck.yml"), "app_dir: desktop\n").unwrap();

        let cli = Cli::try_parse_from(["envcheck", "-p", "/work"]).unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let ctx = dispatcher.context(&cli).unwrap();

        assert_eq!(ctx.app_dir, PathBuf::from("/work/desktop"));
        assert_eq!(dispatcher.test_dir(), temp.path());
    }

    #[test]
    fn dispatch_fails_on_bad_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("envcheck.yml"), "samples: [").unwrap();

        let cli = Cli::try_parse_from(["envcheck", "list"]).unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let mut ui = MockUI::new();

        assert!(dispatcher.dispatch(&cli, &mut ui).is_err());
    }
}
