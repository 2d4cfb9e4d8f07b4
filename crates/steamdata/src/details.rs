//! App details: per-app cache lookup, storefront fetch on miss.
//!
//! The raw response is persisted before it is decoded, so a cache entry
//! always holds exactly what the storefront returned. A failed cache write
//! fails the whole call.

use std::collections::HashMap;

use tracing::debug;

use crate::app_data::AppDetails;
use crate::client::Client;
use crate::error::Error;
use crate::types::AppDetailsResult;

const APP_DETAILS_PATH: &str = "/api/appdetails";

/// Cache key of the details entry for `app_id`.
pub fn cache_key(app_id: u32) -> String {
    format!("appdetails:{app_id}")
}

impl Client {
    /// Returns the store details of `app_id`.
    ///
    /// Served from the cache when present; otherwise fetched once and
    /// cached. Fails with [`Error::NotFound`] when the storefront has no
    /// successful record for the app.
    pub async fn app_details(&self, app_id: u32) -> Result<AppDetails, Error> {
        let key = cache_key(app_id);

        if self.cache.exists(&key) {
            debug!(app_id, "app details cache hit");
            return parse_app_details(app_id, &self.cache.read(&key)?);
        }

        debug!(app_id, "app details cache miss");
        let url = format!("{}{APP_DETAILS_PATH}", self.store_base_url);
        let app_id_str = app_id.to_string();
        let fetched = self
            .get(
                &url,
                &[("appids", app_id_str.as_str()), ("l", self.language.as_str())],
            )
            .await?;
        self.cache.write(&key, &fetched.body)?;

        parse_app_details(app_id, &fetched.body).map_err(|e| match e {
            Error::Json(source) => Error::Decode {
                status: fetched.status,
                source,
            },
            other => other,
        })
    }
}

/// Unwraps the `{"<appid>": {"success": .., "data": {..}}}` envelope.
///
/// A `null` body, a missing key, `success: false`, or a missing `data`
/// block all mean the app has no details.
pub fn parse_app_details(app_id: u32, raw: &[u8]) -> Result<AppDetails, Error> {
    let resp: Option<HashMap<String, AppDetailsResult>> = serde_json::from_slice(raw)?;

    let not_found = || Error::NotFound(format!("failed to retrieve game details for app ID {app_id}"));

    let result = resp
        .and_then(|mut by_id| by_id.remove(&app_id.to_string()))
        .ok_or_else(not_found)?;

    match result {
        AppDetailsResult {
            success: true,
            data: Some(data),
        } => Ok(data),
        _ => Err(not_found()),
    }
}
