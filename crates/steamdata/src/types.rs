//! Domain types and upstream response envelopes.

use serde::{Deserialize, Serialize};

use crate::app_data::{AppDetails, or_default};

/// One `(app ID, name)` pair of the Steam app catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppCatalogEntry {
    #[serde(rename = "appid")]
    pub app_id: u32,
    #[serde(default)]
    pub name: String,
}

/// The full Steam app catalog, in upstream order.
///
/// Neither IDs nor names are unique; lookups return the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppCatalog {
    #[serde(default)]
    pub apps: Vec<AppCatalogEntry>,
}

/// Result of resolving a vanity name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountIdentity {
    #[serde(rename = "steamid")]
    pub steam_id: String,
}

/// Compact view of one owned game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedGame {
    #[serde(rename = "appid")]
    pub app_id: u32,
    pub name: String,
    /// Total playtime across all platforms, in minutes.
    #[serde(rename = "playtime_forever")]
    pub total_playtime_minutes: u64,
    /// Unix timestamp of the last session, 0 if never played.
    #[serde(rename = "rtime_last_played")]
    pub last_played_timestamp: u64,
}

// ---------------------------------------------------------------------------
// Upstream envelopes (internal).
// ---------------------------------------------------------------------------

/// `ISteamUser/ResolveVanityURL` response.
#[derive(Debug, Deserialize)]
pub(crate) struct VanityResponse {
    pub response: VanityResult,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VanityResult {
    /// 1 on success, 42 when no match was found.
    pub success: i32,
    #[serde(default)]
    pub steamid: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// `IPlayerService/GetOwnedGames` response.
#[derive(Debug, Deserialize)]
pub(crate) struct OwnedGamesResponse {
    #[serde(default)]
    pub response: OwnedGamesResult,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OwnedGamesResult {
    #[serde(default)]
    pub game_count: u32,
    #[serde(default)]
    pub games: Vec<OwnedGameRecord>,
}

/// Per-game record as sent upstream. Icon URLs, per-platform playtime and
/// the achievement/leaderboard flags are not decoded.
#[derive(Debug, Deserialize)]
pub(crate) struct OwnedGameRecord {
    pub appid: u32,
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "or_default")]
    pub playtime_forever: u64,
    #[serde(default, deserialize_with = "or_default")]
    pub rtime_last_played: u64,
}

impl From<OwnedGameRecord> for OwnedGame {
    fn from(record: OwnedGameRecord) -> Self {
        Self {
            app_id: record.appid,
            name: record.name,
            total_playtime_minutes: record.playtime_forever,
            last_played_timestamp: record.rtime_last_played,
        }
    }
}

/// `ISteamApps/GetAppList/v2` response.
#[derive(Debug, Deserialize)]
pub(crate) struct AppListResponse {
    pub applist: AppCatalog,
}

/// Per-app entry of the `appdetails` response, keyed by the app ID string.
#[derive(Debug, Deserialize)]
pub(crate) struct AppDetailsResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<AppDetails>,
}
