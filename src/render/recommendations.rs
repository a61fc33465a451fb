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

//! Render the recommendations section.
//!
//! The loading indicator, the error slot and the song cards share one
//! scrollable column. Before the first selection the section is hidden and a
//! short usage hint is shown in its place.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{App, render::PageView, theme::Theme};

const HINT: &str = "Search for a track, then press Enter to find songs like it.";
const LOADING: &str = "Finding similar songs...";

pub(crate) fn draw_recommendations(f: &mut Frame, area: Rect, app: &mut App, view: &PageView) {
    let theme = app.theme;

    if !view.recommendations_visible {
        let hint = Paragraph::new(Line::styled(HINT, Style::default().fg(theme.muted_colour)))
            .alignment(Alignment::Center)
            .block(Block::default().padding(Padding::top(area.height / 2)));
        f.render_widget(hint, area);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1))
        .title(" Similar songs ");

    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();

    if view.recommendations_loading {
        lines.push(Line::styled(LOADING, Style::default().fg(theme.muted_colour)));
    }

    if let Some(error) = &view.error {
        lines.extend(
            error
                .iter()
                .map(|line| Line::styled(line.clone(), Style::default().fg(theme.error_colour))),
        );
    }

    lines.extend(view.cards.iter().map(|line| card_line(line, &theme)));

    let max_scroll = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_sub(inner.height);
    app.recommendations_scroll = app.recommendations_scroll.min(max_scroll);

    f.render_widget(
        Paragraph::new(lines).scroll((app.recommendations_scroll, 0)),
        inner,
    );
}

fn card_line(line: &str, theme: &Theme) -> Line<'static> {
    let colour = if line.starts_with('[') || line.starts_with("Tempo:") || line == "No Image" {
        theme.muted_colour
    } else if line.starts_with("Open in Spotify") {
        theme.accent_colour
    } else {
        theme.text_colour
    };

    Line::styled(line.to_string(), Style::default().fg(colour))
}
