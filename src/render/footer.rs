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

//! Render the footer: key help on the left, backend and its status on the
//! right.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, BackendStatus};

const KEY_HELP: &str = " Enter/click select | Esc dismiss | PgUp/PgDn scroll | Ctrl+C quit";

pub(crate) fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let base = Style::default().bg(theme.footer_bg);

    let (status, colour) = match app.backend_status {
        BackendStatus::Checking => ("checking", theme.muted_colour),
        BackendStatus::Online => ("online", theme.online_colour),
        BackendStatus::Offline => ("offline", theme.offline_colour),
    };

    let backend = Line::from(vec![
        Span::styled(format!("{} ", app.config.backend_url), Style::default().fg(theme.muted_colour)),
        Span::styled(status, Style::default().fg(colour)),
        Span::raw(" "),
    ]);
    let backend_width = u16::try_from(backend.width()).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(backend_width)])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(KEY_HELP, Style::default().fg(theme.muted_colour))).style(base),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(backend).alignment(Alignment::Right).style(base),
        chunks[1],
    );
}
