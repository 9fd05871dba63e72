//! Building the upcoming departure list for one station.

use tracing::debug;

use crate::domain::{DepartureEntry, Direction, StationRecord, TimeOfDay};

use super::filter::filter_future;
use super::parse::parse_time_list;

/// Build the departures after `now` for a station.
///
/// Entries are grouped by direction: every Lebak Bulus departure (in feed
/// order) comes before every Bundaran HI departure. No cross-direction
/// sorting is done. A station with no remaining service yields an empty
/// list.
///
/// # Examples
///
/// ```
/// use mrt_server::domain::{StationRecord, TimeOfDay};
/// use mrt_server::schedule::build_departures;
///
/// let record = StationRecord::new("1", "Central")
///     .with_lebak_bulus("07:00,07:30")
///     .with_bundaran_hi("07:15");
/// let now = TimeOfDay::parse_hhmm("07:10").unwrap();
///
/// let departures = build_departures(&record, now);
/// assert_eq!(departures.len(), 2);
/// assert_eq!(departures[0].destination_name(), "Stasiun Lebak Bulus Grab");
/// assert_eq!(departures[0].time.to_string(), "07:30");
/// assert_eq!(departures[1].destination_name(), "Stasiun Bundaran HI Bank DKI");
/// assert_eq!(departures[1].time.to_string(), "07:15");
/// ```
pub fn build_departures(record: &StationRecord, now: TimeOfDay) -> Vec<DepartureEntry> {
    if record.has_no_schedule() {
        debug!(station = %record.name, "station has no schedule in either direction");
        return Vec::new();
    }

    let mut departures = Vec::new();
    for direction in Direction::ALL {
        let raw = raw_schedule(record, direction);
        let upcoming = filter_future(&parse_time_list(raw), now);
        debug!(
            station = %record.name,
            destination = direction.destination_name(),
            upcoming = upcoming.len(),
            %now,
            "collected upcoming departures"
        );
        departures.extend(
            upcoming
                .into_iter()
                .map(|time| DepartureEntry::new(direction, time)),
        );
    }

    departures
}

fn raw_schedule(record: &StationRecord, direction: Direction) -> &str {
    match direction {
        Direction::LebakBulus => &record.schedule_lebak_bulus,
        Direction::BundaranHi => &record.schedule_bundaran_hi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse_hhmm(s).unwrap()
    }

    fn pairs(entries: &[DepartureEntry]) -> Vec<(&'static str, String)> {
        entries
            .iter()
            .map(|e| (e.destination_name(), e.time.to_string()))
            .collect()
    }

    #[test]
    fn empty_schedules_yield_nothing() {
        let record = StationRecord::new("1", "Fatmawati");
        assert!(build_departures(&record, t("00:00")).is_empty());
    }

    #[test]
    fn lebak_bulus_first_then_bundaran_hi() {
        let record = StationRecord::new("1", "Central")
            .with_lebak_bulus("07:00,07:30")
            .with_bundaran_hi("07:15");

        let departures = build_departures(&record, t("07:10"));
        assert_eq!(
            pairs(&departures),
            [
                ("Stasiun Lebak Bulus Grab", "07:30".to_string()),
                ("Stasiun Bundaran HI Bank DKI", "07:15".to_string()),
            ]
        );
    }

    #[test]
    fn late_night_check_does_not_wrap_to_tomorrow() {
        let record = StationRecord::new("1", "Central").with_lebak_bulus("23:50,00:10");
        assert!(build_departures(&record, t("23:55")).is_empty());
    }

    #[test]
    fn feed_order_kept_within_direction() {
        let record = StationRecord::new("1", "Central").with_bundaran_hi("09:00,08:30,10:00");
        let departures = build_departures(&record, t("08:00"));
        let times: Vec<String> = departures.iter().map(|e| e.time.to_string()).collect();
        assert_eq!(times, ["09:00", "08:30", "10:00"]);
        assert!(
            departures
                .iter()
                .all(|e| e.direction == Direction::BundaranHi)
        );
    }

    #[test]
    fn malformed_direction_does_not_affect_the_other() {
        let record = StationRecord::new("1", "Central")
            .with_lebak_bulus("garbage,more garbage")
            .with_bundaran_hi("06:00,06:10");

        let departures = build_departures(&record, t("05:00"));
        assert_eq!(
            pairs(&departures),
            [
                ("Stasiun Bundaran HI Bank DKI", "06:00".to_string()),
                ("Stasiun Bundaran HI Bank DKI", "06:10".to_string()),
            ]
        );
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let record = StationRecord::new("1", "Central")
            .with_lebak_bulus("10:00,11:00")
            .with_bundaran_hi("10:30");
        let now = t("09:00");
        assert_eq!(build_departures(&record, now), build_departures(&record, now));
    }
}
