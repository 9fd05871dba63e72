//! Domain types for the MRT schedule proxy.
//!
//! These types describe one feed snapshot after decoding. They are plain
//! values: nothing here performs I/O or holds state between requests.

mod departure;
mod station;
mod time;

pub use departure::{DepartureEntry, Direction};
pub use station::{StationRecord, StationSummary};
pub use time::{TimeError, TimeOfDay};
