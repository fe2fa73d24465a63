use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use envcheck::cli::{Cli, CommandDispatcher};
use envcheck::shell::is_ci;
use envcheck::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// `--debug` forces debug logs for envcheck; otherwise `RUST_LOG` decides,
/// falling back to info. Logs go to stderr so `--json` stays parseable.
fn init_tracing(debug: bool) {
    let filter = match debug {
        true => EnvFilter::new("envcheck=debug"),
        false => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("envcheck=info")),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    tracing::debug!(?cli, "parsed arguments");

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let test_dir = match &cli.test_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let mut ui = create_ui(cli.wants_terminal(is_ci()), cli.output_mode());
    let dispatcher = CommandDispatcher::new(test_dir);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
