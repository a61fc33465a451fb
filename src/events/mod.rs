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

//! Application event distribution.
//!
//! Terminal input, the periodic tick and the startup health check all arrive
//! as [`AppEvent`]s on one channel. Each event is handed to the controller
//! (or updates front-end state directly) and the screen is redrawn.
//!
//! # Organization
//!
//! * [`key_handlers`]: Keyboard routing.
//! * [`handlers`]: Mouse routing and the remaining events.

mod handlers;
mod key_handlers;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, render::draw};

/// Number of lines PageUp/PageDown move the recommendations.
const SCROLL_STEP: u16 = 5;

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    /// Outcome of the startup health check.
    BackendStatus(bool),

    Tick,

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,

            AppEvent::Key(key) => key_handlers::process_key_event(app, key)?,
            AppEvent::Mouse(mouse) => handlers::handle_mouse_event(app, mouse),
            AppEvent::BackendStatus(online) => handlers::handle_backend_status(app, online),

            // Async outcomes land in the page between events
            AppEvent::Tick => {}
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
