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

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::{App, BackendStatus, controller::ClickTarget, render::ScreenAreas};

pub(super) fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let position = Position::new(mouse.column, mouse.row);
            let target = classify_click(&app.screen, position);
            app.controller.on_click(target);

            if let Some(row) = app.screen.dropdown_row(position) {
                app.controller.select_result(row);
                app.recommendations_scroll = 0;
            }
        }
        MouseEventKind::ScrollDown => scroll_recommendations(app, 1),
        MouseEventKind::ScrollUp => scroll_recommendations(app, -1),
        _ => {}
    }
}

pub(super) fn handle_backend_status(app: &mut App, online: bool) {
    app.backend_status = if online {
        BackendStatus::Online
    } else {
        BackendStatus::Offline
    };
}

/// Moves the recommendations view by `delta` lines. The upper bound is
/// applied when drawing, once the content height is known.
pub(super) fn scroll_recommendations(app: &mut App, delta: i32) {
    let scroll = i32::from(app.recommendations_scroll).saturating_add(delta);
    app.recommendations_scroll = u16::try_from(scroll.max(0)).unwrap_or(u16::MAX);
}

/// Works out which part of the last drawn screen a click landed on.
fn classify_click(screen: &ScreenAreas, position: Position) -> ClickTarget {
    if screen.input.contains(position) {
        ClickTarget::Input
    } else if screen.dropdown.is_some_and(|dropdown| dropdown.contains(position)) {
        ClickTarget::Dropdown
    } else {
        ClickTarget::Elsewhere
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::AppConfig,
        markup,
        model::Track,
        page::{Element, Page},
        render::draw,
    };
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend, layout::Rect};

    fn screen(dropdown: Option<Rect>) -> ScreenAreas {
        ScreenAreas {
            input: Rect::new(0, 1, 80, 3),
            dropdown,
            dropdown_rows: Vec::new(),
        }
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app_showing_results(names: &[&str]) -> App {
        let mut app = App::new(AppConfig::default()).unwrap();
        let tracks: Vec<Track> = names
            .iter()
            .enumerate()
            .map(|(i, name)| Track {
                id: format!("t{}", i + 1),
                name: name.to_string(),
                ..Track::default()
            })
            .collect();
        app.controller.with_page_mut(|page| {
            page.set_input_text("song");
            page.set_markup(Element::SearchDropdown, markup::search_results(&tracks));
            page.set_visible(Element::SearchDropdown, true);
        });

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        app
    }

    #[test]
    fn clicks_on_input_and_dropdown_are_recognised() {
        let screen = screen(Some(Rect::new(0, 4, 80, 6)));

        assert_eq!(classify_click(&screen, Position::new(10, 2)), ClickTarget::Input);
        assert_eq!(classify_click(&screen, Position::new(10, 5)), ClickTarget::Dropdown);
        assert_eq!(classify_click(&screen, Position::new(10, 12)), ClickTarget::Elsewhere);
    }

    #[test]
    fn hidden_dropdown_area_counts_as_elsewhere() {
        let screen = screen(None);

        assert_eq!(classify_click(&screen, Position::new(10, 5)), ClickTarget::Elsewhere);
    }

    #[tokio::test]
    async fn clicking_a_later_row_selects_it() {
        let mut app = app_showing_results(&["One", "Two"]);
        let dropdown = app.screen.dropdown.unwrap();
        // One / [Select] / blank / Two / [Select], inside the top border
        let second_row = dropdown.y + 1 + 3;

        handle_mouse_event(&mut app, left_click(dropdown.x + 2, second_row));

        app.controller.with_page(|page| {
            assert!(!page.is_visible(Element::SearchDropdown));
            assert!(page.is_visible(Element::RecommendationsSection));
            assert!(page.is_visible(Element::RecommendationsLoading));
            assert_eq!(page.input_text(), "");
        });
    }

    #[tokio::test]
    async fn clicking_between_rows_keeps_the_dropdown() {
        let mut app = app_showing_results(&["One", "Two"]);
        let dropdown = app.screen.dropdown.unwrap();
        let separator = dropdown.y + 1 + 2;

        handle_mouse_event(&mut app, left_click(dropdown.x + 2, separator));

        app.controller.with_page(|page| {
            assert!(page.is_visible(Element::SearchDropdown));
            assert!(!page.is_visible(Element::RecommendationsSection));
            assert_eq!(page.input_text(), "song");
        });
    }
}
