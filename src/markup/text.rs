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

//! Text-mode reading of rendered markup.
//!
//! The terminal front end cannot display markup, so it reads the page the
//! way a text browser would. Only the small vocabulary produced by the
//! [`markup`](crate::markup) module is understood:
//!
//! * Block elements start and end lines; top-level blocks are separated by a
//!   blank line.
//! * Images become `[image: alt]`, audio elements become `[preview]` followed
//!   by the clip URL.
//! * Links are followed by their target, buttons are bracketed.
//! * Entities are unescaped and whitespace is collapsed.

use crate::markup::unescape_html;

const BLOCK_TAGS: &[&str] = &["div", "p", "section", "ul", "ol", "li", "h1", "h2", "h3"];

/// Flattens markup into display lines.
pub(crate) fn to_lines(markup: &str) -> Vec<String> {
    let mut reader = TextReader::default();
    let mut rest = markup;

    while let Some(start) = rest.find('<') {
        reader.text(&rest[..start]);

        match rest[start..].find('>') {
            Some(len) => {
                reader.tag(&rest[start + 1..start + len]);
                rest = &rest[start + len + 1..];
            }
            None => {
                reader.text(&rest[start..]);
                rest = "";
            }
        }
    }

    reader.text(rest);
    reader.finish()
}

#[derive(Default)]
struct TextReader {
    lines: Vec<String>,
    current: String,
    depth: usize,
    gap: bool,
    link: Option<String>,
    in_audio: bool,
}

impl TextReader {
    fn tag(&mut self, raw: &str) {
        let closing = raw.starts_with('/');
        let name = raw
            .trim_start_matches('/')
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        if self.in_audio {
            match (name.as_str(), closing) {
                ("audio", true) => self.in_audio = false,
                ("source", false) => {
                    if let Some(src) = attribute(raw, "src") {
                        self.current.push_str(&format!(" <{src}>"));
                    }
                }
                _ => {}
            }
            return;
        }

        match (name.as_str(), closing) {
            ("audio", false) => {
                self.space();
                self.current.push_str("[preview]");
                self.in_audio = true;
            }
            ("img", _) => {
                let alt = attribute(raw, "alt").unwrap_or_default();
                self.flush();
                self.current.push_str(&format!("[image: {alt}]"));
                self.flush();
            }
            ("a", false) => {
                self.space();
                self.link = attribute(raw, "href");
            }
            ("a", true) => {
                if let Some(href) = self.link.take() {
                    self.space();
                    self.current.push_str(&format!("<{href}>"));
                }
            }
            ("button", false) => {
                self.space();
                self.current.push('[');
            }
            ("button", true) => self.current.push(']'),
            ("span", false) => self.space(),
            ("br", _) => self.flush(),
            (block, false) if BLOCK_TAGS.contains(&block) => {
                self.flush();
                self.depth += 1;
            }
            (block, true) if BLOCK_TAGS.contains(&block) => {
                self.flush();
                self.depth = self.depth.saturating_sub(1);
                if self.depth == 0 {
                    self.gap = true;
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, raw: &str) {
        if self.in_audio || raw.is_empty() {
            return;
        }

        let text = unescape_html(raw);
        if text.trim().is_empty() {
            self.space();
            return;
        }

        if text.starts_with(char::is_whitespace) {
            self.space();
        }
        self.current
            .push_str(&text.split_whitespace().collect::<Vec<_>>().join(" "));
        if text.ends_with(char::is_whitespace) {
            self.space();
        }
    }

    fn space(&mut self) {
        if !self.current.is_empty() && !self.current.ends_with(' ') {
            self.current.push(' ');
        }
    }

    fn flush(&mut self) {
        let line = self.current.trim();
        if !line.is_empty() {
            if self.gap && !self.lines.is_empty() {
                self.lines.push(String::new());
            }
            self.gap = false;
            self.lines.push(line.to_string());
        }
        self.current.clear();
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.lines
    }
}

fn attribute(tag: &str, name: &str) -> Option<String> {
    let needle = format!(" {name}=\"");
    let start = tag.find(&needle)? + needle.len();
    let len = tag[start..].find('"')?;
    Some(unescape_html(&tag[start..start + len]))
}
