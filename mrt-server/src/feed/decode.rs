//! Tolerant decoding of the station feed.
//!
//! The feed has been observed with two spellings of the display name
//! (`Title` and `title`) and occasionally as a bare object rather than an
//! array. Both shapes collapse to [`StationRecord`] here.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::StationRecord;

use super::error::MalformedFeed;

/// Wire shape of one station in the feed.
///
/// Every field is optional: absent and `null` values become empty strings.
#[derive(Debug, Deserialize)]
struct StationDto {
    #[serde(default)]
    nid: Option<String>,

    #[serde(default, rename = "Title")]
    title_legacy: Option<String>,

    #[serde(default)]
    title: Option<String>,

    #[serde(default)]
    jadwal_lb_biasa: Option<String>,

    #[serde(default)]
    jadwal_hi_biasa: Option<String>,
}

impl From<StationDto> for StationRecord {
    fn from(dto: StationDto) -> Self {
        StationRecord::new(
            dto.nid.unwrap_or_default(),
            dto.title_legacy.or(dto.title).unwrap_or_default(),
        )
        .with_lebak_bulus(dto.jadwal_lb_biasa.unwrap_or_default())
        .with_bundaran_hi(dto.jadwal_hi_biasa.unwrap_or_default())
    }
}

/// Decode a feed payload into station records.
///
/// Tries an array of stations first, then a single station object. If
/// neither matches, the array error is reported. A `null` payload is an
/// empty snapshot.
pub fn decode_stations(bytes: &[u8]) -> Result<Vec<StationRecord>, MalformedFeed> {
    let dtos = match serde_json::from_slice::<Option<Vec<StationDto>>>(bytes) {
        Ok(dtos) => dtos.unwrap_or_default(),
        Err(array_err) => {
            debug!(error = %array_err, "feed is not a station array, trying single object");
            match serde_json::from_slice::<StationDto>(bytes) {
                Ok(dto) => vec![dto],
                Err(object_err) => {
                    warn!(
                        array_error = %array_err,
                        object_error = %object_err,
                        "feed matches neither station shape"
                    );
                    return Err(MalformedFeed {
                        message: array_err.to_string(),
                    });
                }
            }
        }
    };

    let records: Vec<StationRecord> = dtos.into_iter().map(StationRecord::from).collect();
    debug!(count = records.len(), "decoded station feed");
    Ok(records)
}
