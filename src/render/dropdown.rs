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

//! Render the search results dropdown as an overlay.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::Theme;

/// Draws `lines` in a box directly below `anchor`, over whatever `below`
/// already shows, and returns the area used.
pub(crate) fn draw_dropdown(f: &mut Frame, anchor: Rect, below: Rect, lines: &[String], theme: &Theme) -> Rect {
    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(below.height);

    let area = Rect::new(anchor.x, below.y, anchor.width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_colour))
        .style(Style::default().bg(theme.dropdown_bg))
        .title(" Click a match, Enter picks the first ");

    let lines: Vec<Line> = lines
        .iter()
        .map(|line| {
            let colour = if line == "[Select]" {
                theme.accent_colour
            } else {
                theme.text_colour
            };
            Line::styled(line.clone(), Style::default().fg(colour))
        })
        .collect();

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);

    area
}

/// Result row of each dropdown line. Rows are separated by blank lines,
/// which belong to no row.
pub(crate) fn row_map(lines: &[String]) -> Vec<Option<usize>> {
    let mut row = 0;
    let mut in_row = false;

    lines
        .iter()
        .map(|line| {
            if line.is_empty() {
                if in_row {
                    row += 1;
                    in_row = false;
                }
                None
            } else {
                in_row = true;
                Some(row)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn blank_lines_separate_rows() {
        let rows = row_map(&lines(&["One", "A", "[Select]", "", "Two", "[Select]", "", "Three"]));

        assert_eq!(
            rows,
            vec![Some(0), Some(0), Some(0), None, Some(1), Some(1), None, Some(2)]
        );
    }

    #[test]
    fn message_is_a_single_row() {
        assert_eq!(row_map(&lines(&["No songs found"])), vec![Some(0)]);
        assert!(row_map(&[]).is_empty());
    }
}
