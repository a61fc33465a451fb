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

//! User interface rendering logic.
//!
//! This module translates the page held by the controller into `ratatui`
//! widgets. The page is captured once per frame into a [`PageView`], with
//! every rendered container already flattened into text lines, so no lock is
//! held while widgets are built.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! event and tick. It also records where the input and dropdown ended up so
//! that mouse clicks can be classified against the last frame.

mod dropdown;
mod footer;
mod recommendations;
mod search_box;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::{
    App,
    markup::text::to_lines,
    page::{Document, Element, Page},
    render::{
        dropdown::{draw_dropdown, row_map},
        footer::draw_footer,
        recommendations::draw_recommendations,
        search_box::draw_search_box,
    },
};

/// Screen areas of the last frame that matter for click handling.
#[derive(Debug, Default, Clone)]
pub(crate) struct ScreenAreas {
    pub(crate) input: Rect,
    /// Only set while the dropdown is on screen.
    pub(crate) dropdown: Option<Rect>,
    /// Result row shown on each dropdown line, `None` for separators.
    pub(crate) dropdown_rows: Vec<Option<usize>>,
}

impl ScreenAreas {
    /// Result row under `position`, if it is inside the dropdown's border.
    pub(crate) fn dropdown_row(&self, position: Position) -> Option<usize> {
        let area = self.dropdown.filter(|area| area.contains(position))?;
        if position.y == area.y || position.y + 1 >= area.bottom() {
            return None;
        }

        let line = usize::from(position.y - area.y - 1);
        self.dropdown_rows.get(line).copied().flatten()
    }
}

/// Snapshot of the page for one frame.
#[derive(Debug, Default)]
pub(crate) struct PageView {
    pub(crate) input: String,
    pub(crate) searching: bool,
    /// Dropdown lines, if the dropdown is visible.
    pub(crate) dropdown: Option<Vec<String>>,

    pub(crate) recommendations_visible: bool,
    pub(crate) recommendations_loading: bool,
    /// Error slot lines, if the error slot is visible.
    pub(crate) error: Option<Vec<String>>,
    pub(crate) cards: Vec<String>,
}

impl PageView {
    pub(crate) fn capture(page: &Document) -> Self {
        let lines_if_visible =
            |element| page.is_visible(element).then(|| to_lines(page.markup(element)));

        Self {
            input: page.input_text().to_string(),
            searching: page.is_visible(Element::SearchLoading),
            dropdown: lines_if_visible(Element::SearchDropdown),
            recommendations_visible: page.is_visible(Element::RecommendationsSection),
            recommendations_loading: page.is_visible(Element::RecommendationsLoading),
            error: lines_if_visible(Element::ErrorMessage),
            cards: to_lines(page.markup(Element::RecommendationsGrid)),
        }
    }
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split into a header, the search box, the recommendations
/// and a one line footer. The dropdown is drawn last, over the top of the
/// recommendations, directly below the search box.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let view = app.controller.with_page(PageView::capture);

    // A selection may have cleared the input since the last key press
    app.search_box.sync(&view.input);

    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(app.theme.background_colour)), area);

    // Outer layout: header, search box, recommendations, footer
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    draw_search_box(f, outer[1], app, view.searching);

    draw_recommendations(f, outer[2], app, &view);

    draw_footer(f, outer[3], app);

    let (dropdown, dropdown_rows) = match view.dropdown.as_deref() {
        Some(lines) => (
            Some(draw_dropdown(f, outer[1], outer[2], lines, &app.theme)),
            row_map(lines),
        ),
        None => (None, Vec::new()),
    };

    app.screen = ScreenAreas {
        input: outer[1],
        dropdown,
        dropdown_rows,
    };
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let header = Line::from(vec![
        Span::styled(
            " Songs Like ",
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "find songs similar to one you love",
            Style::default().fg(app.theme.muted_colour),
        ),
    ]);

    f.render_widget(Paragraph::new(header), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, model::Track, markup};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn screen_text(buffer: &Buffer) -> String {
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        screen_text(terminal.backend().buffer())
    }

    #[test]
    fn capture_flattens_visible_containers_only() {
        let mut page = Document::new();
        page.set_input_text("cat");
        page.set_markup(Element::SearchDropdown, markup::search_message("Hidden", false));
        page.set_text(Element::ErrorMessage, "Boom & bust");
        page.set_visible(Element::ErrorMessage, true);

        let view = PageView::capture(&page);

        assert_eq!(view.input, "cat");
        assert_eq!(view.dropdown, None);
        assert_eq!(view.error, Some(vec!["Boom & bust".to_string()]));
        assert!(view.cards.is_empty());
    }

    #[test]
    fn draws_dropdown_rows_below_the_search_box() {
        let mut app = App::new(AppConfig::default()).unwrap();
        app.controller.with_page_mut(|page| {
            let tracks = [Track {
                id: "t1".to_string(),
                name: "Harder Better".to_string(),
                artists: "Daft Punk".to_string(),
                ..Track::default()
            }];
            page.set_markup(Element::SearchDropdown, markup::search_results(&tracks));
            page.set_visible(Element::SearchDropdown, true);
        });

        let text = render(&mut app);

        assert!(text.contains("Harder Better"));
        assert!(text.contains("Daft Punk"));
        let dropdown = app.screen.dropdown.expect("dropdown drawn");
        assert!(dropdown.y >= app.screen.input.bottom());
    }

    #[test]
    fn dropdown_lines_map_back_to_result_rows() {
        let mut app = App::new(AppConfig::default()).unwrap();
        app.controller.with_page_mut(|page| {
            let tracks = [
                Track {
                    id: "t1".to_string(),
                    name: "One".to_string(),
                    ..Track::default()
                },
                Track {
                    id: "t2".to_string(),
                    name: "Two".to_string(),
                    ..Track::default()
                },
            ];
            page.set_markup(Element::SearchDropdown, markup::search_results(&tracks));
            page.set_visible(Element::SearchDropdown, true);
        });

        render(&mut app);

        let dropdown = app.screen.dropdown.expect("dropdown drawn");
        let at = |line: u16| app.screen.dropdown_row(Position::new(dropdown.x + 2, dropdown.y + 1 + line));

        // One / [Select] / blank / Two / [Select]
        assert_eq!(at(0), Some(0));
        assert_eq!(at(2), None);
        assert_eq!(at(3), Some(1));
        assert_eq!(at(4), Some(1));
        assert_eq!(app.screen.dropdown_row(Position::new(dropdown.x + 2, dropdown.y)), None);
        assert_eq!(app.screen.dropdown_row(Position::new(dropdown.x + 2, dropdown.bottom() - 1)), None);
    }

    #[test]
    fn draws_recommendation_cards_and_errors() {
        let mut app = App::new(AppConfig::default()).unwrap();
        app.controller.with_page_mut(|page| {
            let tracks = [Track {
                id: "r1".to_string(),
                name: "Around the World".to_string(),
                artists: "Daft Punk".to_string(),
                ..Track::default()
            }];
            page.set_visible(Element::RecommendationsSection, true);
            page.set_markup(Element::RecommendationsGrid, markup::recommendation_cards(&tracks));
        });

        let text = render(&mut app);
        assert!(text.contains("Around the World"));
        assert!(app.screen.dropdown.is_none());

        app.controller.with_page_mut(|page| {
            page.set_markup(Element::RecommendationsGrid, String::new());
            page.set_text(Element::ErrorMessage, markup::RECOMMENDATIONS_FAILED);
            page.set_visible(Element::ErrorMessage, true);
        });

        let text = render(&mut app);
        assert!(text.contains(markup::RECOMMENDATIONS_FAILED));
        assert!(!text.contains("Around the World"));
    }
}
