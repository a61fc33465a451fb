// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Songs Like.
//!
//! A terminal front end for a song recommendation service: search for a
//! track, pick one, and browse songs similar to it.
//!
//! This application coordinates a TUI frontend built with `ratatui` and an
//! interaction controller running on a `tokio` runtime.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * **Async Tasks** run the search debounce timer and the HTTP requests to
//!   the recommendation service, writing their outcomes into the page.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Terminal events
//! reach the main thread through a `std::sync::mpsc` channel; the controller
//! and its page are shared with the async tasks.

mod backend;
mod components;
mod config;
mod controller;
mod events;
mod markup;
mod model;
mod page;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use env_logger::{Env, Target};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::OpenOptions,
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    backend::{Backend, HttpBackend},
    components::SearchBox,
    config::AppConfig,
    controller::Controller,
    events::{AppEvent, process_events},
    page::Document,
    render::ScreenAreas,
    theme::Theme,
};

/// Minimum redraw rate, so async outcomes appear without user input.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Time allowed for in-flight requests to wind down on exit.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

/// Result of the startup health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BackendStatus {
    Checking,
    Online,
    Offline,
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub controller: Controller<HttpBackend, Document>,

    pub search_box: SearchBox,
    pub recommendations_scroll: u16,

    pub backend_status: BackendStatus,

    /// Where things were drawn in the last frame.
    pub screen: ScreenAreas,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let backend = HttpBackend::new(&config.backend_url, config.request_timeout())
            .context("Failed to create HTTP client")?;
        let controller = Controller::new(backend, Document::new(), config.debounce());

        Ok(Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            controller,
            search_box: SearchBox::new(),
            recommendations_scroll: 0,
            backend_status: BackendStatus::Checking,
            screen: ScreenAreas::default(),
        })
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging and the async runtime, manages the
/// terminal lifecycle, and returns an error if any part of the execution
/// fails.
fn main() -> Result<()> {
    let config = config::load_config();

    init_logging(&config)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let res = {
        let _runtime = runtime.enter();
        start(config)
    };

    runtime.shutdown_timeout(SHUTDOWN_GRACE);

    res
}

/// Sends log output to the configured file, the terminal belongs to the UI.
///
/// `RUST_LOG` overrides the configured level.
fn init_logging(config: &AppConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file))?;

    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to initialise logging")
}

fn start(config: AppConfig) -> Result<()> {
    log::info!("Starting with backend {}", config.backend_url);

    let mut app = App::new(config).context("Failed to initialise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer and captures the
///   mouse.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();

    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&mut stdout, &hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`] on a best-effort
/// basis, and makes the cursor visible again.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg(&mut io::stdout()).ok();
    terminal.show_cursor().ok();
}

/// Starts the background workers and enters the main event loop.
///
/// This function spawns:
/// * An input thread to forward keyboard and mouse events.
/// * A tick thread to trigger periodic UI refreshes.
/// * A one-off health check of the recommendation service.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(_) => continue,
                Err(err) => {
                    log::error!("Failed to read terminal event: {err}");
                    break;
                }
            };

            if tx_input.send(event).is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_RATE);
        }
    });

    let controller = app.controller.clone();
    let tx_status = app.event_tx.clone();
    tokio::spawn(async move {
        let online = match controller.backend().health().await {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Recommendation service health check failed: {err}");
                false
            }
        };
        tx_status.send(AppEvent::BackendStatus(online)).ok();
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
