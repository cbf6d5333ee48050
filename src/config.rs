//! Frontend Configuration
//!
//! Defaults suit local development. A JSON object stored in
//! `localStorage["item-board.config"]` overrides any subset of fields.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// `localStorage` key holding config overrides
pub const CONFIG_STORAGE_KEY: &str = "item-board.config";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Simulated latency of the item list request
    pub fetch_latency_ms: u64,
    /// Simulated latency of an id allocation request
    pub id_latency_ms: u64,
    /// Max log level: off, error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fetch_latency_ms: 800,
            id_latency_ms: 200,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn fetch_latency(&self) -> Duration {
        Duration::from_millis(self.fetch_latency_ms)
    }

    pub fn id_latency(&self) -> Duration {
        Duration::from_millis(self.id_latency_ms)
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Parse overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Load from browser storage, falling back to defaults.
    ///
    /// Runs before the logger exists, so problems are returned as
    /// a warning for the caller to log.
    pub fn load() -> (Self, Option<String>) {
        let stored = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

        match stored {
            None => (Self::default(), None),
            Some(json) => match Self::from_json(&json) {
                Ok(config) => (config, None),
                Err(e) => (
                    Self::default(),
                    Some(format!("ignoring invalid {}: {}", CONFIG_STORAGE_KEY, e)),
                ),
            },
        }
    }
}
