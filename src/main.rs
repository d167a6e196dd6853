// todo-tui - an in-memory todo list in the terminal
//
// Architecture:
// - Todo store: ordered items with positional ids and expiry sweeps
// - Controller: state machine reducing key actions and timer ticks
// - TUI (ratatui): event loop, key map and drawing around the controller
// - Logging: tracing captured into a buffer while the TUI owns the screen

mod cli;
mod config;
mod controller;
mod logging;
mod startup;
mod todo;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LogRotation};
use controller::Controller;
use logging::{LogBuffer, TuiLogLayer};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the tracing subscriber
///
/// In TUI mode logs go to the in-memory buffer (writing to the terminal would
/// garble the display); otherwise to stderr. File logging is added on top when
/// enabled. The returned guard must live until exit so file logs flush.
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_logging(config: &Config, tui_mode: bool, log_buffer: &LogBuffer) -> Option<WorkerGuard> {
    let default_filter = format!("todo_tui={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = tui_mode.then(|| TuiLogLayer::new(log_buffer.clone()));
    let stderr_layer =
        (!tui_mode).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let mut guard = None;
    let file_layer = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let dir = &config.logging.file_dir;
                let prefix = &config.logging.file_prefix;
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(dir, prefix),
                    LogRotation::Daily => tracing_appender::rolling::daily(dir, prefix),
                    LogRotation::Never => tracing_appender::rolling::never(dir, prefix),
                };

                // Writes happen on a background thread
                let (non_blocking, worker) = tracing_appender::non_blocking(file_appender);
                guard = Some(worker);
                Some(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Config { show, path, reset }) = cli.command {
        return cli::handle_config(show, path, reset);
    }

    // Helps users discover the options
    Config::ensure_config_exists();
    let config = Config::from_env();

    let tui_mode = cli.command.is_none();
    let log_buffer = LogBuffer::new();
    let _file_guard = init_logging(&config, tui_mode, &log_buffer);

    let store = startup::initial_store(&cli, &config)?;
    let controller = Controller::new(store, config.expiry.default_due());

    if !tui_mode {
        println!("{}", controller.render());
        return Ok(());
    }

    let theme = tui::theme::ThemeKind::from_name(&config.theme).theme();

    tracing::info!(
        sweep_interval_secs = config.expiry.sweep_interval_secs,
        default_due_hours = config.expiry.default_due_hours,
        "Starting TUI"
    );
    tui::run_tui(
        controller,
        log_buffer,
        theme,
        config.expiry.sweep_interval(),
    )
    .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
