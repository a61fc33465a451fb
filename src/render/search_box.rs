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

//! Render the search box.
//!
//! This module renders the search input, its cursor and the indicator shown
//! while a search is pending.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

use crate::App;

const PLACEHOLDER: &str = "Type a song or artist";
const SEARCHING: &str = "searching...";

pub(crate) fn draw_search_box(f: &mut Frame, area: Rect, app: &App, searching: bool) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if searching {
            theme.accent_colour
        } else {
            theme.border_colour
        }))
        .title(" Search for a song ");

    let inner = block.inner(area);
    f.render_widget(block, area);

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(SEARCHING.len() as u16 + 1)])
        .horizontal_margin(1)
        .split(inner);

    // Keep the cursor inside the visible part of the field, in display columns
    let width = usize::from(container[0].width).max(1);
    let cursor = app.search_box.visual_cursor();
    let scroll = cursor.saturating_sub(width - 1);

    let value = app.search_box.value();
    let text = if value.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(theme.muted_colour))
    } else {
        Span::styled(value, Style::default().fg(theme.text_colour))
    };
    f.render_widget(
        Paragraph::new(text).scroll((0, u16::try_from(scroll).unwrap_or(u16::MAX))),
        container[0],
    );

    if searching {
        f.render_widget(
            Paragraph::new(Span::styled(SEARCHING, Style::default().fg(theme.muted_colour)))
                .alignment(Alignment::Right),
            container[1],
        );
    }

    let offset = u16::try_from(cursor - scroll).unwrap_or(0);
    f.set_cursor_position((container[0].x + offset, container[0].y));
}
