//! modelprep CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use modelprep::cli::{Cli, CommandDispatcher};
use modelprep::config::Settings;
use modelprep::ui::{should_use_colors, Console, Theme};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("modelprep=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("modelprep=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("modelprep starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let theme = if should_use_colors() {
        Theme::new()
    } else {
        Theme::plain()
    };
    let console = Console::new(theme, cli.quiet);

    // All environment reads happen here, once.
    let settings = Settings::from_env();
    let dispatcher = CommandDispatcher::new(settings);

    match dispatcher.dispatch(&cli, &console) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            console.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
