//! List command implementation.
//!
//! The `envcheck list` command shows what a check run would look at,
//! without probing anything.

use crate::checks::CheckContext;
use crate::error::Result;
use crate::ui::{EnvCheckTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    ctx: CheckContext,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(ctx: CheckContext) -> Self {
        Self { ctx }
    }

    fn section(ui: &mut dyn UserInterface, theme: &EnvCheckTheme, title: &str, items: &[String]) {
        ui.message(&format!("  {}", theme.header.apply_to(title)));
        if items.is_empty() {
            ui.message(&format!("    {}", theme.dim.apply_to("(none)")));
        }
        for item in items {
            ui.message(&format!("    {}", item));
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = &self.ctx.config;
        let theme = EnvCheckTheme::detect();

        ui.message(&format!(
            "{} in {}",
            theme.highlight.apply_to(&config.app_name),
            self.ctx.app_dir.display()
        ));
        ui.message(&format!(
            "  {}",
            theme
                .dim
                .apply_to(format!("samples in {}", self.ctx.test_dir.display()))
        ));
        ui.message("");

        let tools: Vec<String> = config
            .tools
            .iter()
            .map(|t| {
                let kind = if t.required { "required" } else { "optional" };
                let role = if t.role.is_empty() {
                    String::new()
                } else {
                    format!(", {}", t.role)
                };
                format!("{} ({}{}) - {}", t.name, kind, role, t.program)
            })
            .collect();
        Self::section(ui, &theme, "Tools:", &tools);

        let dirs: Vec<String> = config
            .directories
            .iter()
            .map(|d| format!("{}/", d.display()))
            .collect();
        Self::section(ui, &theme, "Directories:", &dirs);

        let files: Vec<String> = config.files.iter().map(|f| f.display().to_string()).collect();
        Self::section(ui, &theme, "Files:", &files);

        let markers: Vec<String> = config
            .markers
            .iter()
            .map(|m| format!("{} ({}, `{}`)", m.path.display(), m.ecosystem, m.install_command))
            .collect();
        Self::section(ui, &theme, "Dependency markers:", &markers);

        Self::section(ui, &theme, "Samples:", &config.samples);

        let rules: Vec<String> = config
            .syntax
            .iter()
            .map(|r| format!("{} - {} ({})", r.label, r.file.display(), r.validator.describe()))
            .collect();
        Self::section(ui, &theme, "Syntax rules:", &rules);

        Ok(CommandResult::ok())
    }
}
