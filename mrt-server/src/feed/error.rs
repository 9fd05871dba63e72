//! Feed error types.

use std::path::PathBuf;

/// Errors that can occur while fetching the upstream feed.
///
/// All variants mean the feed is unavailable for this request.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Static feed file could not be read
    #[error("failed to read feed file {path:?}: {message}")]
    Io { path: PathBuf, message: String },
}

/// The fetched payload is neither a station array nor a single station.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to parse JSON response: {message}")]
pub struct MalformedFeed {
    pub message: String,
}
