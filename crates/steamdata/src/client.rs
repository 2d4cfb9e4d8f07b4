//! Steam Web API client.
//!
//! Async HTTP client using `reqwest`. Every operation issues at most one
//! request; app details and the app catalog are additionally kept in the
//! client's [`BlobStore`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use steamdata_blob_cache::{BlobStore, DiskStore};
use tracing::debug;

use crate::config::Config;
use crate::error::Error;

/// Recognized HTTP outcomes.
///
/// Only `200 OK` counts as success; everything else maps to an error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpOutcome {
    Ok,
    Forbidden,
    NotFound,
    Unexpected(u16),
}

impl HttpOutcome {
    /// Classifies a raw status code.
    pub fn classify(status: u16) -> Self {
        match status {
            200 => Self::Ok,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            other => Self::Unexpected(other),
        }
    }

    /// Converts the outcome into the status on success or the matching error.
    pub fn into_result(self) -> Result<u16, Error> {
        match self {
            Self::Ok => Ok(200),
            Self::Forbidden => Err(Error::AccessDenied { status: 403 }),
            Self::NotFound => Err(Error::EndpointNotFound { status: 404 }),
            Self::Unexpected(status) => Err(Error::UnexpectedStatus { status }),
        }
    }
}

/// A successful (HTTP 200) response body.
#[derive(Debug)]
pub(crate) struct Fetched {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Fetched {
    /// Decodes the body, tagging failures with the response status.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_slice(&self.body).map_err(|source| Error::Decode {
            status: self.status,
            source,
        })
    }
}

/// Steam Web API client.
pub struct Client {
    http: reqwest::Client,
    pub(crate) api_base_url: String,
    pub(crate) store_base_url: String,
    pub(crate) language: String,
    pub(crate) cache: Arc<dyn BlobStore>,
}

impl Client {
    /// Creates a client that caches under `config.cache_dir`.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let cache = Arc::new(DiskStore::new(config.cache_dir.clone()));
        Self::with_store(config, cache)
    }

    /// Creates a client backed by the given blob store.
    pub fn with_store(config: &Config, cache: Arc<dyn BlobStore>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("steamdata/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_base_url: trim_base(&config.api_base_url),
            store_base_url: trim_base(&config.store_base_url),
            language: config.language.clone(),
            cache,
        })
    }

    /// Returns the blob store used for app details and the catalog.
    pub fn cache(&self) -> &Arc<dyn BlobStore> {
        &self.cache
    }

    /// Performs a GET request and classifies the response status.
    ///
    /// Query parameters are not logged; some of them carry the API key.
    pub(crate) async fn get(&self, url: &str, params: &[(&str, &str)]) -> Result<Fetched, Error> {
        debug!(url, "GET");
        let resp = self.http.get(url).query(params).send().await?;
        let status = resp.status().as_u16();

        if let Err(e) = HttpOutcome::classify(status).into_result() {
            debug!(url, status, "request rejected");
            return Err(e);
        }

        let body = resp.bytes().await?.to_vec();
        debug!(url, status, bytes = body.len(), "response received");
        Ok(Fetched { status, body })
    }
}

fn trim_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
