//! Upstream station feed.
//!
//! The Jakarta MRT website publishes every station together with its
//! weekday schedule as one JSON document. This module fetches that
//! document and decodes it into [`crate::domain::StationRecord`]s.
//!
//! Key characteristics of the feed:
//! - One request returns all stations; there is no per-station endpoint
//! - Schedules are comma-separated "HH:MM" strings, one per direction
//! - The display name appears as either `Title` or `title`

mod client;
mod decode;
mod error;
mod source;

pub use client::{DEFAULT_FEED_URL, FeedClient, FeedClientConfig};
pub(crate) use client::DEFAULT_TIMEOUT_SECS;
pub use decode::decode_stations;
pub use error::{FeedError, MalformedFeed};
pub use source::{FeedSource, StaticFeed, UnavailableFeed};
