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

//! Debounced search.

use tokio::time::{self, Instant};

use crate::{
    backend::{Backend, BackendError},
    controller::{Controller, hide_dropdown},
    markup::{self, SEARCH_FAILED},
    model::Track,
    page::{Element, Page},
};

impl<B, P> Controller<B, P>
where
    B: Backend + 'static,
    P: Page + 'static,
{
    /// Handles a change of the search input.
    ///
    /// Empty (or whitespace only) text hides the dropdown immediately and
    /// never issues a request. Anything else shows the loading indicator
    /// straight away and schedules a search for the end of the quiet period,
    /// replacing whichever search was scheduled before.
    pub(crate) fn on_input(&self, text: &str) {
        let query = text.trim().to_string();
        let (mut state, mut page) = self.lock();

        state.cancel_search_timer();
        state.current_query.clone_from(&query);

        if query.is_empty() {
            hide_dropdown(&mut *page);
            return;
        }

        page.set_visible(Element::SearchLoading, true);

        let deadline = Instant::now() + self.shared.debounce;
        let controller = self.clone();
        state.search_timer = Some(tokio::spawn(async move {
            time::sleep_until(deadline).await;
            // Detached so that a later abort of this timer cannot cancel the
            // request itself.
            tokio::spawn(async move { controller.search(query).await });
        }));
    }

    /// Runs one search and renders its outcome, unless a newer query has
    /// superseded it in the meantime.
    pub(crate) async fn search(&self, query: String) {
        self.lock_state().current_query.clone_from(&query);

        let outcome = self.shared.backend.search(&query).await;

        self.show_search_outcome(&query, outcome);
    }

    fn show_search_outcome(&self, query: &str, outcome: Result<Vec<Track>, BackendError>) {
        let (state, mut page) = self.lock();

        if state.current_query == query {
            let rows = match outcome {
                Ok(tracks) => markup::search_results(&tracks),
                Err(err) => {
                    log::error!("Search for {query:?} failed: {err}");
                    markup::search_message(SEARCH_FAILED, true)
                }
            };
            page.set_markup(Element::SearchDropdown, rows);
            page.set_visible(Element::SearchDropdown, true);
        }

        page.set_visible(Element::SearchLoading, false);
    }
}
