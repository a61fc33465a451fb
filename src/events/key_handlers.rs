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

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    App,
    controller::Key,
    events::{AppEvent, SCROLL_STEP, handlers::scroll_recommendations},
};

/// Maps keyboard input to controller and front-end actions.
///
/// * **Application Control**: Ctrl+C exits.
/// * **Selection**: Enter picks the first search result, Escape dismisses
///   the dropdown.
/// * **Scrolling**: PageUp/PageDown move through the recommendations.
/// * **Editing**: Everything else goes to the search box; a changed value is
///   written to the page and raised as an input event.
///
/// # Errors
///
/// Returns an error if the exit event cannot be sent.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Enter, _) => {
            app.controller.on_keydown(Key::Enter);
            app.recommendations_scroll = 0;
        }
        (KeyCode::Esc, _) => app.controller.on_keydown(Key::Escape),

        (KeyCode::PageDown, _) => scroll_recommendations(app, i32::from(SCROLL_STEP)),
        (KeyCode::PageUp, _) => scroll_recommendations(app, -i32::from(SCROLL_STEP)),

        _ => {
            app.controller.on_keydown(Key::Other);

            // The page may have been cleared by a selection since the last draw
            let current = app.controller.with_page(|page| page.input_text().to_string());
            app.search_box.sync(&current);

            if let Some(text) = app.search_box.handle_key(key) {
                app.controller.with_page_mut(|page| page.set_input_text(&text));
                app.controller.on_input(&text);
            }
        }
    }

    Ok(())
}
