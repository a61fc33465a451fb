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

//! Application configuration.
//!
//! This module manages the application configuration file. Every field has a
//! default, so a partial (or missing) file still yields a usable
//! configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::controller::SEARCH_DEBOUNCE;

const CONFIG_NAME: &str = "songslike";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,

    /// Root of the recommendation service, without the `/api` prefix.
    pub backend_url: String,

    pub search_debounce_ms: u64,
    pub request_timeout_secs: u64,

    pub log_file: String,
    /// Default log filter, `RUST_LOG` takes precedence.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            backend_url: "http://127.0.0.1:5000".to_string(),
            search_debounce_ms: u64::try_from(SEARCH_DEBOUNCE.as_millis()).unwrap_or(300),
            request_timeout_secs: 10,
            log_file: "songslike.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Loads the configuration, falling back to defaults if the file cannot be
/// read or parsed.
pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_else(|err| {
        eprintln!("Ignoring unreadable configuration: {err}");
        AppConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_setup() {
        let config = AppConfig::default();

        assert_eq!(config.backend_url, "http://127.0.0.1:5000");
        assert_eq!(config.debounce(), SEARCH_DEBOUNCE);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{"backend_url": "http://music.local:8080", "search_debounce_ms": 150}"#,
        )
        .expect("partial config parses");

        assert_eq!(config.backend_url, "http://music.local:8080");
        assert_eq!(config.debounce(), Duration::from_millis(150));
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.log_file, "songslike.log");
    }
}
