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

//! HTTP implementation of [`Backend`] backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    backend::{Backend, BackendError},
    model::{HealthReply, ItemsReply, Track},
};

pub(crate) struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Creates a client for the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub(crate) fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, endpoint: &str, param: &str, value: &str) -> String {
        format!(
            "{}/api/{endpoint}?{param}={}",
            self.base_url,
            urlencoding::encode(value)
        )
    }

    async fn fetch_items(&self, url: &str) -> Result<ItemsReply, BackendError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        Ok(response.json::<ItemsReply>().await?)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn search(&self, query: &str) -> Result<Vec<Track>, BackendError> {
        let url = self.api_url("search", "q", query);
        log::debug!("GET {url}");

        Ok(self.fetch_items(&url).await?.items)
    }

    async fn recommendations(&self, track_id: &str) -> Result<Vec<Track>, BackendError> {
        let url = self.api_url("recommendations", "track_id", track_id);
        log::debug!("GET {url}");

        let reply = self.fetch_items(&url).await?;
        match reply.error.filter(|error| !error.is_empty()) {
            Some(error) => Err(BackendError::Rejected(error)),
            None => Ok(reply.items),
        }
    }

    async fn health(&self) -> Result<(), BackendError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        let reply = response.json::<HealthReply>().await?;
        if reply.ok {
            Ok(())
        } else {
            Err(BackendError::Rejected("health check reported not ok".to_string()))
        }
    }
}
