//! Data transfer objects for web responses.

use serde::Serialize;

use crate::domain::{DepartureEntry, StationSummary};

/// Envelope wrapping every API response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,

    /// Human-readable summary
    pub message: String,

    /// Payload, `null` on failure
    pub data: Option<T>,

    /// Error detail, omitted on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// A successful response carrying `data`.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }

    /// A failed response with no payload.
    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error: Some(error.into()),
        }
    }
}

/// A station in the listing.
#[derive(Debug, Serialize)]
pub struct StationResponse {
    /// Feed identifier
    pub id: String,

    /// Display name
    pub name: String,
}

impl From<StationSummary> for StationResponse {
    fn from(summary: StationSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
        }
    }
}

/// One upcoming departure.
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    /// Destination terminus name
    pub station_name: String,

    /// Departure time, "HH:MM"
    pub time: String,
}

impl From<&DepartureEntry> for ScheduleResponse {
    fn from(entry: &DepartureEntry) -> Self {
        Self {
            station_name: entry.destination_name().to_string(),
            time: entry.time.to_string(),
        }
    }
}
