//! Steam Web API client with local caching.
//!
//! Retrieves structured metadata from Steam's public web services and keeps
//! the two expensive, rarely-changing resources on disk through a
//! [`BlobStore`]:
//!
//! - **Identity**: resolve a vanity name to a 64-bit Steam ID
//! - **Owned games**: list an account's games with playtime
//! - **App details**: store-page record for one app (cached per app)
//! - **Catalog search**: resolve a name or app ID against the full app
//!   list (cached once)
//! - **Ranking**: order owned games by playtime or recency
//!
//! Cached entries never expire. Clear the store to force a refetch.
//!
//! [`Client`] is async; [`blocking::Client`] offers the same operations as
//! plain blocking calls.

pub mod app_data;
pub mod blocking;
pub mod catalog;
pub mod client;
pub mod config;
pub mod details;
pub mod error;
pub mod identity;
pub mod owned;
pub mod ranking;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use app_data::AppDetails;
pub use catalog::normalize;
pub use client::{Client, HttpOutcome};
pub use config::Config;
pub use error::Error;
pub use ranking::{RankBy, rank, rank_by_name};
pub use steamdata_blob_cache::{BlobStore, CacheError, DiskStore, MemoryStore};
pub use types::{AccountIdentity, AppCatalog, AppCatalogEntry, OwnedGame};
