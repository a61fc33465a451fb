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

//! Markup rendering for search rows and recommendation cards.
//!
//! Every function here is pure: it takes tracks or messages and produces a
//! markup string for the page. Any free text that originates from the
//! backend (names, artists, ids, URLs) passes through [`escape_html`] before
//! it is interpolated; the structural markup itself is trusted.
//!
//! # Sub-modules
//!
//! * [`text`]: Reads rendered markup back as plain display lines.

pub(crate) mod text;

use crate::model::{AudioFeatures, Track};

pub(crate) const NO_RESULTS: &str = "No results found.";
pub(crate) const SEARCH_FAILED: &str = "Search failed. Please try again.";
pub(crate) const RECOMMENDATIONS_FAILED: &str = "Could not fetch recommendations. Try again.";
pub(crate) const NO_SIMILAR_SONGS: &str = "No similar songs found. Try another track.";

/// Attribute carried by the select control of each search row.
pub(crate) const TRACK_ID_ATTR: &str = "data-track-id";

/// Escape markup-significant characters.
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Reverse of [`escape_html`].
///
/// `&amp;` is replaced last so that escaped entities such as `&amp;lt;`
/// come back as the literal text `&lt;`.
pub(crate) fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Renders the dropdown rows for a set of search results.
///
/// An empty result set is not a failure: it renders the "no results" row.
pub(crate) fn search_results(tracks: &[Track]) -> String {
    if tracks.is_empty() {
        return search_message(NO_RESULTS, false);
    }

    tracks.iter().map(search_row).collect()
}

/// Renders a single dropdown row: name, artists and a select control keyed by
/// the track id.
pub(crate) fn search_row(track: &Track) -> String {
    format!(
        r#"<div class="dropdown-item"><div class="track-info"><div class="track-name">{name}</div><div class="track-artist">{artists}</div></div><button class="select-btn" {attr}="{id}">Select</button></div>"#,
        name = escape_html(&track.name),
        artists = escape_html(&track.artists),
        attr = TRACK_ID_ATTR,
        id = escape_html(&track.id),
    )
}

/// Renders a single message row for the dropdown. Failures get the error
/// styling, empty results do not.
pub(crate) fn search_message(message: &str, is_error: bool) -> String {
    let class = if is_error { "error-message" } else { "empty-message" };
    format!(r#"<div class="{class}">{}</div>"#, escape_html(message))
}

/// Renders the recommendation grid, one card per track.
pub(crate) fn recommendation_cards(tracks: &[Track]) -> String {
    tracks.iter().map(song_card).collect()
}

/// Renders a recommendation card.
///
/// Optional blocks (feature chips, audio preview) are only emitted when the
/// track carries the data for them; a missing cover image is replaced by a
/// placeholder block.
pub(crate) fn song_card(track: &Track) -> String {
    let image = match track.image() {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" class="song-image">"#,
            escape_html(url),
            escape_html(&track.name)
        ),
        None => r#"<div class="placeholder-image">No Image</div>"#.to_string(),
    };

    let features = track.features.as_ref().map(feature_chips).unwrap_or_default();
    let preview = track.preview_url().map(preview_player).unwrap_or_default();

    format!(
        r#"<div class="song-card">{image}<div class="song-title">{name}</div><div class="song-artist">{artists}</div>{features}<div class="song-actions"><a href="{url}" target="_blank" class="spotify-link">Open in Spotify</a>{preview}</div></div>"#,
        name = escape_html(&track.name),
        artists = escape_html(&track.artists),
        url = escape_html(&track.external_url),
    )
}

fn feature_chips(features: &AudioFeatures) -> String {
    format!(
        r#"<div class="song-features"><span class="feature-chip">Tempo: {} BPM</span><span class="feature-chip">Energy: {}</span><span class="feature-chip">Valence: {}</span><span class="feature-chip">Dance: {}</span></div>"#,
        features.tempo, features.energy, features.valence, features.danceability
    )
}

fn preview_player(url: &str) -> String {
    format!(
        r#"<audio controls class="preview-audio"><source src="{}" type="audio/mpeg">Your browser does not support audio playback.</audio>"#,
        escape_html(url)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hostile_track() -> Track {
        Track {
            id: "1".to_string(),
            name: "<script>".to_string(),
            artists: "A & B".to_string(),
            external_url: "https://x".to_string(),
            ..Track::default()
        }
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom's & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom&#39;s &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn unescape_reverses_escape() {
        let original = r#"&lt; is "literal" <b>"#;
        assert_eq!(unescape_html(&escape_html(original)), original);
    }

    #[test]
    fn search_row_escapes_backend_text() {
        let row = search_row(&hostile_track());

        assert!(row.contains("&lt;script&gt;"));
        assert!(row.contains("A &amp; B"));
        assert!(!row.contains("<script>"));
        assert!(row.contains(r#"data-track-id="1""#));
    }

    #[test]
    fn song_card_escapes_backend_text() {
        let card = song_card(&hostile_track());

        assert!(card.contains("&lt;script&gt;"));
        assert!(card.contains("A &amp; B"));
        assert!(!card.contains("<script>"));
        assert!(card.contains(r#"href="https://x""#));
    }

    #[test]
    fn attribute_values_cannot_break_out() {
        let track = Track {
            id: r#"x" onclick="alert(1)"#.to_string(),
            image: Some(r#"https://img" onerror="alert(1)"#.to_string()),
            ..hostile_track()
        };

        assert!(!search_row(&track).contains(r#"" onclick=""#));
        assert!(!song_card(&track).contains(r#"" onerror=""#));
    }

    #[test]
    fn bare_card_has_placeholder_and_no_optional_blocks() {
        let card = song_card(&hostile_track());

        assert!(card.contains("placeholder-image"));
        assert!(!card.contains("<img"));
        assert!(!card.contains("song-features"));
        assert!(!card.contains("<audio"));
    }

    #[test]
    fn full_card_has_image_chips_and_preview() {
        let track = Track {
            image: Some("https://img/1.jpg".to_string()),
            preview_url: Some("https://audio/1.mp3".to_string()),
            features: Some(AudioFeatures {
                tempo: 128.0,
                energy: 0.8,
                valence: 0.35,
                danceability: 0.7,
            }),
            ..hostile_track()
        };

        let card = song_card(&track);

        assert!(card.contains(r#"<img src="https://img/1.jpg" alt="&lt;script&gt;""#));
        assert!(!card.contains("placeholder-image"));
        assert!(card.contains("Tempo: 128 BPM"));
        assert!(card.contains("Energy: 0.8"));
        assert!(card.contains("Valence: 0.35"));
        assert!(card.contains("Dance: 0.7"));
        assert!(card.contains(r#"<source src="https://audio/1.mp3" type="audio/mpeg">"#));
    }

    #[test]
    fn empty_optional_urls_count_as_absent() {
        let track = Track {
            image: Some(String::new()),
            preview_url: Some(String::new()),
            ..hostile_track()
        };

        let card = song_card(&track);

        assert!(card.contains("placeholder-image"));
        assert!(!card.contains("<audio"));
    }

    #[test]
    fn empty_results_render_without_error_styling() {
        let markup = search_results(&[]);

        assert!(markup.contains(NO_RESULTS));
        assert!(markup.contains("empty-message"));
        assert!(!markup.contains("error-message"));
    }

    #[test]
    fn failure_row_uses_error_styling() {
        let markup = search_message(SEARCH_FAILED, true);

        assert_eq!(markup, r#"<div class="error-message">Search failed. Please try again.</div>"#);
    }

    #[test]
    fn renders_one_row_and_card_per_track() {
        let tracks = vec![hostile_track(), Track { id: "2".to_string(), ..hostile_track() }];

        assert_eq!(search_results(&tracks).matches("dropdown-item").count(), 2);
        assert_eq!(recommendation_cards(&tracks).matches("song-card").count(), 2);
        assert!(recommendation_cards(&[]).is_empty());
    }
}
