//! Client configuration.
//!
//! Stored as JSON. Every field is optional in the file; missing fields take
//! their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;

const DEFAULT_API_BASE_URL: &str = "https://api.steampowered.com";
const DEFAULT_STORE_BASE_URL: &str = "https://store.steampowered.com";
const DEFAULT_LANGUAGE: &str = "english";
const DEFAULT_CACHE_DIR: &str = "steamdata";

/// Endpoints, store language and cache location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the Steam Web API (`ISteamUser`, `IPlayerService`, `ISteamApps`).
    pub api_base_url: String,

    /// Base URL of the storefront API (`/api/appdetails`).
    pub store_base_url: String,

    /// Language requested for store text.
    pub language: String,

    /// Root directory of the on-disk cache.
    pub cache_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            store_base_url: DEFAULT_STORE_BASE_URL.into(),
            language: DEFAULT_LANGUAGE.into(),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file.
    ///
    /// A missing file yields the defaults. A file that exists but cannot be
    /// parsed is logged and replaced by the defaults.
    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str::<Self>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                Ok(Self::default())
            }
        }
    }

    /// Writes configuration as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
