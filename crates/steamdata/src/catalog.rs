//! App catalog: fetch, cache, and name/ID search.
//!
//! The catalog is cached once under [`CACHE_KEY`] and reused forever. The
//! cache write is best-effort: if it fails the fetched catalog is still
//! returned, unlike app details where a write failure is fatal.
//!
//! Search is a linear scan in upstream order; the first match wins, so
//! duplicate names resolve the same way every time.

use serde::Serialize;
use tracing::{debug, warn};
use unicode_general_category::{GeneralCategory, get_general_category};

use crate::client::Client;
use crate::error::Error;
use crate::types::{AppCatalog, AppListResponse};

const APP_LIST_PATH: &str = "/ISteamApps/GetAppList/v2";

/// Cache key of the serialized catalog.
pub const CACHE_KEY: &str = "catalog:all";

impl Client {
    /// Downloads the full app catalog. Never touches the cache.
    pub async fn fetch_catalog(&self) -> Result<AppCatalog, Error> {
        let url = format!("{}{APP_LIST_PATH}", self.api_base_url);
        let fetched = self.get(&url, &[]).await?;
        let resp: AppListResponse = fetched.decode()?;
        debug!(apps = resp.applist.apps.len(), "fetched app catalog");
        Ok(resp.applist)
    }

    /// Returns the catalog from the cache, fetching and caching it on a miss.
    pub async fn catalog(&self) -> Result<AppCatalog, Error> {
        if self.cache.exists(CACHE_KEY) {
            debug!("app catalog cache hit");
            let raw = self.cache.read(CACHE_KEY)?;
            return Ok(serde_json::from_slice(&raw)?);
        }

        let catalog = self.fetch_catalog().await?;
        let written = encode_catalog(&catalog)
            .map_err(Error::from)
            .and_then(|raw| self.cache.write(CACHE_KEY, &raw).map_err(Error::from));
        if let Err(e) = written {
            warn!(error = %e, "failed to cache app catalog");
        }
        Ok(catalog)
    }

    /// Resolves a game by app ID or by name.
    ///
    /// A query that parses as an integer is looked up as an app ID and the
    /// app's name is returned. Any other query is compared by normalized
    /// name and the app ID is returned as a string.
    pub async fn resolve_game(&self, query: &str) -> Result<String, Error> {
        self.catalog().await?.resolve(query)
    }
}

impl AppCatalog {
    /// See [`Client::resolve_game`].
    pub fn resolve(&self, query: &str) -> Result<String, Error> {
        if let Ok(app_id) = query.parse::<i64>() {
            return self
                .apps
                .iter()
                .find(|app| i64::from(app.app_id) == app_id)
                .map(|app| app.name.clone())
                .ok_or_else(|| Error::NotFound(format!("AppID {app_id} not found")));
        }

        let wanted = normalize(query);
        self.apps
            .iter()
            .find(|app| normalize(&app.name) == wanted)
            .map(|app| app.app_id.to_string())
            .ok_or_else(|| Error::NotFound(format!("Game {query} not found")))
    }
}

/// Keeps only letters and numbers (general categories `L*` and `N*`),
/// lower-cased one character at a time.
///
/// `"Half-Life 2"` and `"halflife2"` normalize identically. Combining marks
/// are dropped, and lower-casing never expands a character (`İ` becomes
/// `i`), so the result is stable under a second pass.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|&c| is_letter_or_number(c))
        .map(simple_lowercase)
        .collect()
}

fn is_letter_or_number(c: char) -> bool {
    use GeneralCategory::*;
    matches!(
        get_general_category(c),
        UppercaseLetter
            | LowercaseLetter
            | TitlecaseLetter
            | ModifierLetter
            | OtherLetter
            | DecimalNumber
            | LetterNumber
            | OtherNumber
    )
}

/// Single-character lower-case mapping.
fn simple_lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Serializes the catalog with one-space indentation.
fn encode_catalog(catalog: &AppCatalog) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    catalog.serialize(&mut ser)?;
    Ok(buf)
}
