//! Error types for Steam data operations.

use steamdata_blob_cache::CacheError;

/// Errors produced by the Steam client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport-level failure (connection, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("access forbidden (HTTP {status}): check your API key")]
    AccessDenied { status: u16 },

    #[error("API endpoint not found (HTTP {status})")]
    EndpointNotFound { status: u16 },

    #[error("unexpected HTTP status code: {status}")]
    UnexpectedStatus { status: u16 },

    /// A response body did not match the expected schema.
    #[error("failed to decode response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        source: serde_json::Error,
    },

    /// A persisted payload could not be decoded or encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to find Steam ID for username: {username}")]
    ResolutionFailed { username: String, status: u16 },

    #[error("{0}")]
    NotFound(String),
}

impl Error {
    /// Returns the HTTP status code carried by this error, if known.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::AccessDenied { status }
            | Self::EndpointNotFound { status }
            | Self::UnexpectedStatus { status }
            | Self::Decode { status, .. }
            | Self::ResolutionFailed { status, .. } => Some(*status),
            Self::Json(_) | Self::Cache(_) | Self::Io(_) | Self::NotFound(_) => None,
        }
    }

    /// Returns `true` for logical absence (unknown name, app or account).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::ResolutionFailed { .. })
    }
}
