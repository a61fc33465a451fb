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

//! The interaction controller.
//!
//! This module owns all mutable interaction state and mediates between raw
//! input, the two asynchronous backend calls, and the page. Every handler
//! converts its outcome into page updates; nothing propagates further up.
//!
//! # Organization
//!
//! * [`search`]: Debounced search and stale response suppression.
//! * [`selection`]: Track selection and the recommendations panel.
//!
//! # Ordering
//!
//! * At most one debounce timer is outstanding. Scheduling a search aborts
//!   the previous timer; in-flight requests are never aborted, their results
//!   are discarded instead.
//! * A search response is applied only if its query is still the current
//!   query.
//! * A recommendations response is applied only if its selection is still
//!   the latest one.
//!
//! State and page are always locked in that order and never held across an
//! `.await`.

mod search;
mod selection;


use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tokio::task::JoinHandle;

use crate::{
    backend::Backend,
    page::{Element, Page},
};

/// Quiet period after the last keystroke before a search is issued.
pub(crate) const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Key {
    Enter,
    Escape,
    Other,
}

/// Where on the page a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClickTarget {
    Input,
    Dropdown,
    Elsewhere,
}

pub(crate) struct Controller<B, P> {
    shared: Arc<Shared<B, P>>,
}

impl<B, P> Clone for Controller<B, P> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

struct Shared<B, P> {
    backend: B,
    page: Mutex<P>,
    state: Mutex<ControlState>,
    debounce: Duration,
}

#[derive(Default)]
struct ControlState {
    /// Trimmed text of the latest query; the anchor for discarding stale
    /// search responses.
    current_query: String,
    search_timer: Option<JoinHandle<()>>,
    /// Sequence number of the latest selection.
    selection: u64,
}

impl ControlState {
    fn cancel_search_timer(&mut self) {
        if let Some(timer) = self.search_timer.take() {
            timer.abort();
        }
    }
}

impl<B, P> Controller<B, P>
where
    B: Backend + 'static,
    P: Page + 'static,
{
    pub(crate) fn new(backend: B, page: P, debounce: Duration) -> Self {
        Self {
            shared: Arc::new(Shared {
                backend,
                page: Mutex::new(page),
                state: Mutex::new(ControlState::default()),
                debounce,
            }),
        }
    }

    pub(crate) fn backend(&self) -> &B {
        &self.shared.backend
    }

    pub(crate) fn with_page<R>(&self, f: impl FnOnce(&P) -> R) -> R {
        f(&self.lock_page())
    }

    pub(crate) fn with_page_mut<R>(&self, f: impl FnOnce(&mut P) -> R) -> R {
        f(&mut self.lock_page())
    }

    /// Hides the dropdown and the search loading indicator.
    pub(crate) fn dismiss_dropdown(&self) {
        hide_dropdown(&mut *self.lock_page());
    }

    pub(crate) fn on_keydown(&self, key: Key) {
        match key {
            Key::Enter => self.select_result(0),
            Key::Escape => self.dismiss_dropdown(),
            Key::Other => {}
        }
    }

    /// Selects the track of the `index`th row of the dropdown. Does nothing
    /// unless the dropdown is visible and has such a row.
    pub(crate) fn select_result(&self, index: usize) {
        let track_id = self.with_page(|page| {
            page.is_visible(Element::SearchDropdown)
                .then(|| page.selectable(Element::SearchDropdown, index))
                .flatten()
        });

        if let Some(track_id) = track_id {
            tokio::spawn(self.select_track(&track_id));
        }
    }

    pub(crate) fn on_click(&self, target: ClickTarget) {
        if target == ClickTarget::Elsewhere {
            self.dismiss_dropdown();
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, ControlState> {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_page(&self) -> MutexGuard<'_, P> {
        self.shared
            .page
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> (MutexGuard<'_, ControlState>, MutexGuard<'_, P>) {
        let state = self.lock_state();
        let page = self.lock_page();
        (state, page)
    }
}

fn hide_dropdown(page: &mut impl Page) {
    page.set_visible(Element::SearchDropdown, false);
    page.set_visible(Element::SearchLoading, false);
}
