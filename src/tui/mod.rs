// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - The event loop (keyboard input, expiry timer, Ctrl+C)
// - Rendering after every reduction

pub mod app;
pub mod components;
pub mod keymap;
pub mod theme;
pub mod ui;

use crate::controller::{Controller, Event};
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event as TermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use theme::Theme;
use tokio::time::Instant;

/// How long one input poll may block before the loop checks its other sources
const INPUT_POLL: Duration = Duration::from_millis(10);

/// Run the TUI until the controller asks to terminate
///
/// Sets up the terminal, runs the event loop, and always restores the
/// terminal before returning, even when the loop failed.
pub async fn run_tui(
    controller: Controller,
    log_buffer: LogBuffer,
    theme: Theme,
    sweep_interval: Duration,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(controller, log_buffer, theme);

    let result = run_event_loop(&mut terminal, &mut app, sweep_interval).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Three sources feed the controller, one event per iteration:
/// 1. Keyboard input, mapped through the key map for the current mode
/// 2. The expiry timer, a one-shot sleep re-armed only when the controller
///    emits `RearmExpiry` after handling the tick
/// 3. SIGINT (raw mode turns Ctrl+C into a key, but `kill -INT` still lands here)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    sweep_interval: Duration,
) -> Result<()> {
    let expiry = tokio::time::sleep(sweep_interval);
    tokio::pin!(expiry);
    let mut expiry_armed = true;

    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            biased;

            _ = &mut interrupt => {
                app.dispatch(Event::Interrupt);
            }

            () = &mut expiry, if expiry_armed => {
                expiry_armed = false;
                app.dispatch(Event::ExpiryTick);
            }

            input = async { poll_input() } => {
                if let Some(TermEvent::Key(key)) = input.context("Failed to read terminal input")? {
                    if let Some(event) = keymap::map_key(app.controller.mode(), &key) {
                        app.dispatch(event);
                    }
                }
            }
        }

        if app.take_rearm() {
            expiry.as_mut().reset(Instant::now() + sweep_interval);
            expiry_armed = true;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Wait briefly for one terminal event
fn poll_input() -> io::Result<Option<TermEvent>> {
    if event::poll(INPUT_POLL)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}
