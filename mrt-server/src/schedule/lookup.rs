//! Station lookup and listing.

use tracing::debug;

use crate::domain::{StationRecord, StationSummary};

/// Find the station whose identifier equals `id` after trimming.
///
/// The first match wins when the feed contains duplicates. `None` is an
/// ordinary outcome, not a fault.
pub fn find_station<'a>(records: &'a [StationRecord], id: &str) -> Option<&'a StationRecord> {
    let id = id.trim();
    let found = records.iter().find(|record| record.id == id);

    if found.is_none() {
        debug!(
            id,
            available = ?records.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            "station not found in feed"
        );
    }

    found
}

/// Project every record to its public summary, keeping feed order.
pub fn to_summaries(records: &[StationRecord]) -> Vec<StationSummary> {
    records.iter().map(StationSummary::from).collect()
}
