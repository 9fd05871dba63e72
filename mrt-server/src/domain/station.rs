//! Station records as published by the feed.

use serde::Serialize;

/// One station from a single feed snapshot.
///
/// The schedule fields hold the raw comma-separated "HH:MM" lists exactly
/// as the feed delivered them. They are decoded lazily by
/// [`crate::schedule::build_departures`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationRecord {
    /// Feed identifier, compared by exact string equality.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Raw schedule for trains towards Lebak Bulus.
    pub schedule_lebak_bulus: String,
    /// Raw schedule for trains towards Bundaran HI.
    pub schedule_bundaran_hi: String,
}

impl StationRecord {
    /// Create a record with empty schedules.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            schedule_lebak_bulus: String::new(),
            schedule_bundaran_hi: String::new(),
        }
    }

    /// Set the Lebak Bulus bound schedule.
    pub fn with_lebak_bulus(mut self, raw: impl Into<String>) -> Self {
        self.schedule_lebak_bulus = raw.into();
        self
    }

    /// Set the Bundaran HI bound schedule.
    pub fn with_bundaran_hi(mut self, raw: impl Into<String>) -> Self {
        self.schedule_bundaran_hi = raw.into();
        self
    }

    /// True when neither direction has any schedule text.
    pub fn has_no_schedule(&self) -> bool {
        self.schedule_lebak_bulus.is_empty() && self.schedule_bundaran_hi.is_empty()
    }
}

/// Public projection of a station used by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationSummary {
    pub id: String,
    pub name: String,
}

impl From<&StationRecord> for StationSummary {
    fn from(record: &StationRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
        }
    }
}
