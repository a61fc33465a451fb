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

//! Search input editing.
//!
//! This module wraps a `tui-input` text field. Editing keys are delegated to
//! the field, and the caller learns whether the value changed so it can raise
//! the input event. The page owns the authoritative input value; the field
//! is brought back in line with it before every draw.

use crossterm::event::{Event, KeyEvent};
use tui_input::{Input, backend::crossterm::EventHandler};

pub(crate) struct SearchBox {
    input: Input,
}

impl SearchBox {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
        }
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    /// Cursor position in display columns rather than characters.
    pub(crate) fn visual_cursor(&self) -> usize {
        self.input.visual_cursor()
    }

    /// Applies an editing key, returning the new value if it changed.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<String> {
        let before = self.input.value().to_string();

        self.input.handle_event(&Event::Key(key));

        (self.input.value() != before).then(|| self.input.value().to_string())
    }

    /// Replaces the field's value with `value` unless they already agree.
    pub(crate) fn sync(&mut self, value: &str) {
        if self.input.value() != value {
            self.input = Input::new(value.to_string());
        }
    }
}
