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

//! Track selection and the recommendations panel.
//!
//! Overlapping selections resolve as last-selected-wins: each selection
//! takes a new ticket, and a response is only rendered if its ticket is
//! still the latest. A superseded response changes nothing on the page, so
//! the panel keeps showing the loading state of the newer selection.

use crate::{
    backend::{Backend, BackendError},
    controller::{Controller, hide_dropdown},
    markup::{self, NO_SIMILAR_SONGS, RECOMMENDATIONS_FAILED},
    model::Track,
    page::{Element, Page},
};

impl<B, P> Controller<B, P>
where
    B: Backend + 'static,
    P: Page + 'static,
{
    /// Selects a track and fetches its recommendations.
    ///
    /// The page is reset before this returns: dropdown dismissed, input
    /// cleared, recommendations section revealed with an empty grid, error
    /// hidden and loading shown. The returned future performs the fetch and
    /// renders its outcome.
    pub(crate) fn select_track(&self, track_id: &str) -> impl Future<Output = ()> + Send + use<B, P> {
        let ticket = self.begin_selection();
        let controller = self.clone();
        let track_id = track_id.to_string();

        async move {
            let outcome = controller.shared.backend.recommendations(&track_id).await;
            controller.show_recommendations(ticket, &track_id, outcome);
        }
    }

    fn begin_selection(&self) -> u64 {
        let (mut state, mut page) = self.lock();

        state.cancel_search_timer();
        state.current_query.clear();
        state.selection += 1;

        hide_dropdown(&mut *page);
        page.clear_input();
        page.set_visible(Element::RecommendationsSection, true);
        page.set_markup(Element::RecommendationsGrid, String::new());
        page.set_visible(Element::ErrorMessage, false);
        page.set_visible(Element::RecommendationsLoading, true);

        state.selection
    }

    fn show_recommendations(
        &self,
        ticket: u64,
        track_id: &str,
        outcome: Result<Vec<Track>, BackendError>,
    ) {
        let (state, mut page) = self.lock();

        if state.selection != ticket {
            return;
        }

        match outcome {
            Ok(tracks) if tracks.is_empty() => {
                page.set_text(Element::ErrorMessage, NO_SIMILAR_SONGS);
                page.set_visible(Element::ErrorMessage, true);
            }
            Ok(tracks) => {
                page.set_markup(Element::RecommendationsGrid, markup::recommendation_cards(&tracks));
            }
            Err(err) => {
                log::error!("Recommendations for track {track_id} failed: {err}");
                page.set_text(Element::ErrorMessage, RECOMMENDATIONS_FAILED);
                page.set_visible(Element::ErrorMessage, true);
            }
        }

        page.set_visible(Element::RecommendationsLoading, false);
    }
}
