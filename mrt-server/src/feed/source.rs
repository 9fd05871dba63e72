//! Feed source abstraction and a static implementation.

use std::path::Path;
use std::sync::Arc;

use futures::future::{self, BoxFuture};

use super::error::FeedError;

/// Something that can produce the raw feed document.
///
/// Implemented by [`super::FeedClient`] for the live feed and by
/// [`StaticFeed`] for offline development and tests.
pub trait FeedSource: Send + Sync {
    /// Fetch the current feed bytes.
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<u8>, FeedError>>;
}

/// Feed source that serves a fixed payload.
///
/// Useful for development without network access to the upstream feed.
#[derive(Debug, Clone)]
pub struct StaticFeed {
    body: Arc<[u8]>,
}

impl StaticFeed {
    /// Serve the given bytes on every fetch.
    pub fn from_bytes(body: impl Into<Vec<u8>>) -> Self {
        let body: Vec<u8> = body.into();
        Self { body: body.into() }
    }

    /// Load the payload from a JSON file once, at construction.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let path = path.as_ref();
        let body = std::fs::read(path).map_err(|e| FeedError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self::from_bytes(body))
    }
}

impl FeedSource for StaticFeed {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<u8>, FeedError>> {
        Box::pin(future::ready(Ok(self.body.to_vec())))
    }
}

/// Feed source that always fails with an upstream status.
///
/// Stands in for an outage in tests.
#[derive(Debug, Clone, Copy)]
pub struct UnavailableFeed {
    pub status: u16,
}

impl FeedSource for UnavailableFeed {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<u8>, FeedError>> {
        Box::pin(future::ready(Err(FeedError::Api {
            status: self.status,
            message: "upstream unavailable".to_string(),
        })))
    }
}
