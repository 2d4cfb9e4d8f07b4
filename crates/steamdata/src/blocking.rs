//! Blocking client.
//!
//! Wraps the async [`crate::Client`] with a single-threaded runtime; each
//! call runs its request and cache access to completion before returning.
//! Must not be called from within an async runtime.

use std::sync::Arc;

use steamdata_blob_cache::BlobStore;

use crate::app_data::AppDetails;
use crate::config::Config;
use crate::error::Error;
use crate::types::{AccountIdentity, AppCatalog, OwnedGame};

/// Blocking Steam Web API client.
pub struct Client {
    inner: crate::client::Client,
    runtime: tokio::runtime::Runtime,
}

impl Client {
    /// Creates a client that caches under `config.cache_dir`.
    pub fn new(config: &Config) -> Result<Self, Error> {
        Self::from_async(crate::client::Client::new(config)?)
    }

    /// Creates a client backed by the given blob store.
    pub fn with_store(config: &Config, cache: Arc<dyn BlobStore>) -> Result<Self, Error> {
        Self::from_async(crate::client::Client::with_store(config, cache)?)
    }

    fn from_async(inner: crate::client::Client) -> Result<Self, Error> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { inner, runtime })
    }

    /// Returns the blob store used for app details and the catalog.
    pub fn cache(&self) -> &Arc<dyn BlobStore> {
        self.inner.cache()
    }

    /// See [`crate::Client::resolve_vanity_name`].
    pub fn resolve_vanity_name(
        &self,
        api_key: &str,
        username: &str,
    ) -> Result<(AccountIdentity, u16), Error> {
        self.runtime
            .block_on(self.inner.resolve_vanity_name(api_key, username))
    }

    /// See [`crate::Client::owned_games`].
    pub fn owned_games(&self, api_key: &str, steam_id: &str) -> Result<Vec<OwnedGame>, Error> {
        self.runtime.block_on(self.inner.owned_games(api_key, steam_id))
    }

    /// See [`crate::Client::app_details`].
    pub fn app_details(&self, app_id: u32) -> Result<AppDetails, Error> {
        self.runtime.block_on(self.inner.app_details(app_id))
    }

    /// See [`crate::Client::fetch_catalog`].
    pub fn fetch_catalog(&self) -> Result<AppCatalog, Error> {
        self.runtime.block_on(self.inner.fetch_catalog())
    }

    /// See [`crate::Client::catalog`].
    pub fn catalog(&self) -> Result<AppCatalog, Error> {
        self.runtime.block_on(self.inner.catalog())
    }

    /// See [`crate::Client::resolve_game`].
    pub fn resolve_game(&self, query: &str) -> Result<String, Error> {
        self.runtime.block_on(self.inner.resolve_game(query))
    }
}
