//! Station service: fetch the feed and run the schedule pipeline.
//!
//! Each call fetches a fresh snapshot. Nothing is cached between calls,
//! so concurrent requests share only the immutable feed source and clock.

use std::sync::Arc;

use tracing::{debug, info};

use crate::clock::Clock;
use crate::domain::{DepartureEntry, StationRecord, StationSummary};
use crate::feed::{FeedError, FeedSource, MalformedFeed, decode_stations};
use crate::schedule::{build_departures, find_station, to_summaries};

/// Number of payload characters included in debug logs.
const PREVIEW_CHARS: usize = 500;

/// Errors surfaced by the station service.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// The feed could not be fetched
    #[error("upstream feed unavailable: {0}")]
    UpstreamUnavailable(#[from] FeedError),

    /// The feed was fetched but could not be decoded
    #[error(transparent)]
    MalformedFeed(#[from] MalformedFeed),

    /// No station carries the requested identifier
    #[error("station not found")]
    StationNotFound { id: String },
}

/// Lists stations and computes upcoming departures.
#[derive(Clone)]
pub struct StationService {
    feed: Arc<dyn FeedSource>,
    clock: Arc<dyn Clock>,
}

impl StationService {
    pub fn new(feed: Arc<dyn FeedSource>, clock: Arc<dyn Clock>) -> Self {
        Self { feed, clock }
    }

    /// All stations in feed order.
    pub async fn list_stations(&self) -> Result<Vec<StationSummary>, ScheduleError> {
        let records = self.snapshot().await?;
        info!(count = records.len(), "listing stations");
        Ok(to_summaries(&records))
    }

    /// Upcoming departures for the station with the given (untrimmed) id.
    pub async fn station_schedules(
        &self,
        raw_id: &str,
    ) -> Result<Vec<DepartureEntry>, ScheduleError> {
        let id = raw_id.trim();
        debug!(raw_id, id, "looking up station schedules");

        let records = self.snapshot().await?;
        let record = find_station(&records, id).ok_or_else(|| ScheduleError::StationNotFound {
            id: id.to_string(),
        })?;

        let now = self.clock.now();
        let departures = build_departures(record, now);
        info!(
            station = %record.name,
            %now,
            count = departures.len(),
            "computed upcoming departures"
        );
        Ok(departures)
    }

    /// Fetch and decode one feed snapshot.
    async fn snapshot(&self) -> Result<Vec<StationRecord>, ScheduleError> {
        let body = self.feed.fetch().await?;
        debug!(
            bytes = body.len(),
            preview = %String::from_utf8_lossy(&body).chars().take(PREVIEW_CHARS).collect::<String>(),
            "received feed payload"
        );
        Ok(decode_stations(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::domain::TimeOfDay;
    use crate::feed::{StaticFeed, UnavailableFeed};

    const FEED: &str = r#"[
        {"nid": "1", "Title": "Central", "jadwal_lb_biasa": "07:00,07:30", "jadwal_hi_biasa": "07:15"},
        {"nid": "2", "title": "Fatmawati", "jadwal_lb_biasa": "", "jadwal_hi_biasa": ""}
    ]"#;

    fn service(feed: impl FeedSource + 'static, now: &str) -> StationService {
        StationService::new(
            Arc::new(feed),
            Arc::new(FixedClock(TimeOfDay::parse_hhmm(now).unwrap())),
        )
    }

    #[tokio::test]
    async fn lists_all_stations() {
        let svc = service(StaticFeed::from_bytes(FEED), "07:10");
        let stations = svc.list_stations().await.unwrap();
        assert_eq!(
            stations,
            [
                StationSummary {
                    id: "1".into(),
                    name: "Central".into()
                },
                StationSummary {
                    id: "2".into(),
                    name: "Fatmawati".into()
                },
            ]
        );
    }

    #[tokio::test]
    async fn schedules_end_to_end() {
        let svc = service(StaticFeed::from_bytes(FEED), "07:10");
        let departures = svc.station_schedules("1").await.unwrap();
        let pairs: Vec<(&str, String)> = departures
            .iter()
            .map(|d| (d.destination_name(), d.time.to_string()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("Stasiun Lebak Bulus Grab", "07:30".to_string()),
                ("Stasiun Bundaran HI Bank DKI", "07:15".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn padded_id_is_trimmed() {
        let svc = service(StaticFeed::from_bytes(FEED), "07:10");
        assert_eq!(svc.station_schedules("  1 ").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn station_without_service_is_empty_not_error() {
        let svc = service(StaticFeed::from_bytes(FEED), "07:10");
        assert!(svc.station_schedules("2").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_station_is_not_found() {
        let svc = service(StaticFeed::from_bytes(FEED), "07:10");
        let err = svc.station_schedules(" 99 ").await.unwrap_err();
        match err {
            ScheduleError::StationNotFound { id } => assert_eq!(id, "99"),
            other => panic!("expected StationNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn upstream_failure_is_distinct() {
        let svc = service(UnavailableFeed { status: 503 }, "07:10");
        let err = svc.station_schedules("1").await.unwrap_err();
        assert!(matches!(err, ScheduleError::UpstreamUnavailable(_)));

        let err = svc.list_stations().await.unwrap_err();
        assert!(matches!(err, ScheduleError::UpstreamUnavailable(_)));
    }

    #[tokio::test]
    async fn malformed_feed_is_distinct() {
        let svc = service(StaticFeed::from_bytes("not json"), "07:10");
        let err = svc.station_schedules("1").await.unwrap_err();
        assert!(matches!(err, ScheduleError::MalformedFeed(_)));
        assert!(err.to_string().starts_with("failed to parse JSON response"));
    }

    #[tokio::test]
    async fn single_object_feed_is_accepted() {
        let feed = r#"{"nid": "7", "Title": "Blok M", "jadwal_hi_biasa": "23:00"}"#;
        let svc = service(StaticFeed::from_bytes(feed), "22:00");
        let stations = svc.list_stations().await.unwrap();
        assert_eq!(stations.len(), 1);
        assert_eq!(svc.station_schedules("7").await.unwrap().len(), 1);
    }
}
