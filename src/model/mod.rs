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

//! Domain models and wire payloads.
//!
//! This module defines the track entity as the backend represents it, along
//! with the JSON envelopes returned by the search, recommendation and health
//! endpoints. Tracks are read-only from the client's point of view: they are
//! only ever deserialized and displayed.

use serde::{Deserialize, Deserializer};

/// A song as returned by the backend.
///
/// Text fields that the backend sends as `null` (or omits) are read as empty
/// strings, so rendering never has to special-case them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct Track {
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) artists: String,
    #[serde(default)]
    pub(crate) image: Option<String>,
    #[serde(default)]
    pub(crate) preview_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) external_url: String,
    #[serde(default)]
    pub(crate) features: Option<AudioFeatures>,
}

impl Track {
    /// Cover image URL, if the backend supplied a non-empty one.
    pub(crate) fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.is_empty())
    }

    /// Preview clip URL, if the backend supplied a non-empty one.
    pub(crate) fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Audio features attached to recommended tracks when the backend could
/// fetch them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub(crate) struct AudioFeatures {
    #[serde(default)]
    pub(crate) tempo: f64,
    #[serde(default)]
    pub(crate) energy: f64,
    #[serde(default)]
    pub(crate) valence: f64,
    #[serde(default)]
    pub(crate) danceability: f64,
}

/// Body of the search and recommendation endpoints.
///
/// The recommendation endpoint may answer a successful status with an
/// `error` field instead of items.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ItemsReply {
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) items: Vec<Track>,
    #[serde(default)]
    pub(crate) error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct HealthReply {
    #[serde(default)]
    pub(crate) ok: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_recommendation_track() -> anyhow::Result<()> {
        let json = r#"{
            "id": "track123",
            "name": "Test Song",
            "artists": "Artist One, Artist Two",
            "album": "Test Album",
            "image": "https://example.com/medium.jpg",
            "preview_url": "https://example.com/preview.mp3",
            "external_url": "https://open.spotify.com/track/track123",
            "features": {"tempo": 120, "energy": 0.81, "valence": 0.4, "danceability": 0.66}
        }"#;

        let track: Track = serde_json::from_str(json)?;

        assert_eq!(track.id, "track123");
        assert_eq!(track.artists, "Artist One, Artist Two");
        assert_eq!(track.image(), Some("https://example.com/medium.jpg"));
        assert_eq!(track.preview_url(), Some("https://example.com/preview.mp3"));

        let features = track.features.expect("features should be present");
        assert_eq!(features.tempo, 120.0);
        assert_eq!(features.danceability, 0.66);

        Ok(())
    }

    #[test]
    fn null_and_missing_fields_read_as_empty() -> anyhow::Result<()> {
        let json = r#"{"id": "track456", "name": null, "image": null, "preview_url": ""}"#;

        let track: Track = serde_json::from_str(json)?;

        assert_eq!(track.id, "track456");
        assert_eq!(track.name, "");
        assert_eq!(track.artists, "");
        assert_eq!(track.external_url, "");
        assert_eq!(track.image(), None);
        assert_eq!(track.preview_url(), None);
        assert!(track.features.is_none());

        Ok(())
    }

    #[test]
    fn items_reply_tolerates_missing_items_and_carries_error() -> anyhow::Result<()> {
        let reply: ItemsReply = serde_json::from_str(r#"{"error": "track_id required"}"#)?;
        assert!(reply.items.is_empty());
        assert_eq!(reply.error.as_deref(), Some("track_id required"));

        let reply: ItemsReply = serde_json::from_str(r#"{"items": null}"#)?;
        assert!(reply.items.is_empty());
        assert!(reply.error.is_none());

        Ok(())
    }
}
