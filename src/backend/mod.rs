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

//! Access to the search and recommendation service.
//!
//! The service is an external collaborator reached over HTTP. The controller
//! only depends on the [`Backend`] trait, so tests can substitute a scripted
//! implementation for [`HttpBackend`].

mod http;

pub(crate) use http::HttpBackend;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::model::Track;

/// Ways a backend call can fail. All of them are terminal for the request
/// that produced them; nothing is retried.
#[derive(Error, Debug)]
pub(crate) enum BackendError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend responded with status {0}")]
    Status(StatusCode),

    #[error("backend reported an error: {0}")]
    Rejected(String),
}

#[async_trait]
pub(crate) trait Backend: Send + Sync {
    /// Tracks matching free-text `query`.
    async fn search(&self, query: &str) -> Result<Vec<Track>, BackendError>;

    /// Tracks similar to the track identified by `track_id`.
    async fn recommendations(&self, track_id: &str) -> Result<Vec<Track>, BackendError>;

    /// Checks that the service is up.
    async fn health(&self) -> Result<(), BackendError>;
}
