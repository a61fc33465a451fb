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

//! The page surface the controller renders into.
//!
//! The controller never touches a concrete display. It reads and writes a
//! handful of named elements through the [`Page`] trait: visibility flags,
//! the inner markup of containers, and the search input value. [`Document`]
//! is the in-memory implementation shared with the terminal front end.

use std::collections::{HashMap, HashSet};

use crate::markup::{self, TRACK_ID_ATTR};

/// Named elements of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Element {
    SearchInput,
    SearchDropdown,
    SearchLoading,
    RecommendationsSection,
    RecommendationsGrid,
    RecommendationsLoading,
    ErrorMessage,
}

pub(crate) trait Page: Send {
    /// Empties the search input.
    fn clear_input(&mut self);

    fn set_visible(&mut self, element: Element, visible: bool);

    fn is_visible(&self, element: Element) -> bool;

    /// Replaces the inner markup of `element`.
    fn set_markup(&mut self, element: Element, markup: String);

    /// Replaces the content of `element` with plain text, escaped.
    fn set_text(&mut self, element: Element, text: &str);

    /// Track id of the select control at position `index` (in rendering
    /// order) inside `element`.
    fn selectable(&self, element: Element, index: usize) -> Option<String>;
}

/// In-memory page.
///
/// Starts out the way the static page does: an empty, visible input and an
/// empty recommendations grid, with every other panel hidden.
#[derive(Debug)]
pub(crate) struct Document {
    input: String,
    visible: HashSet<Element>,
    contents: HashMap<Element, String>,
}

impl Document {
    pub(crate) fn new() -> Self {
        Self {
            input: String::new(),
            visible: HashSet::from([Element::SearchInput, Element::RecommendationsGrid]),
            contents: HashMap::new(),
        }
    }

    pub(crate) fn input_text(&self) -> &str {
        &self.input
    }

    /// Stores the value typed into the search input. The caller is expected
    /// to raise the input event afterwards.
    pub(crate) fn set_input_text(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub(crate) fn markup(&self, element: Element) -> &str {
        self.contents.get(&element).map(String::as_str).unwrap_or_default()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for Document {
    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn set_visible(&mut self, element: Element, visible: bool) {
        if visible {
            self.visible.insert(element);
        } else {
            self.visible.remove(&element);
        }
    }

    fn is_visible(&self, element: Element) -> bool {
        self.visible.contains(&element)
    }

    fn set_markup(&mut self, element: Element, markup: String) {
        self.contents.insert(element, markup);
    }

    fn set_text(&mut self, element: Element, text: &str) {
        self.contents.insert(element, markup::escape_html(text));
    }

    fn selectable(&self, element: Element, index: usize) -> Option<String> {
        let markup = self.contents.get(&element)?;
        let needle = format!("{TRACK_ID_ATTR}=\"");
        let (start, _) = markup.match_indices(&needle).nth(index)?;
        let value = &markup[start + needle.len()..];
        let len = value.find('"')?;
        Some(markup::unescape_html(&value[..len]))
    }
}
