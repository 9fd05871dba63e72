//! Time-of-day handling for the schedule feed.
//!
//! The feed publishes departures as bare "HH:MM" strings with no date
//! attached. [`TimeOfDay`] models exactly that: a minute-resolution
//! wall-clock value between 00:00 and 23:59.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day with minute resolution and no date component.
///
/// Ordering is chronological within a single day. There is no notion of
/// "tomorrow": 00:10 is always earlier than 23:55.
///
/// # Examples
///
/// ```
/// use mrt_server::domain::TimeOfDay;
///
/// let t = TimeOfDay::parse_hhmm("07:30").unwrap();
/// assert_eq!(t.to_string(), "07:30");
/// assert!(TimeOfDay::parse_hhmm("7:30").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Build a time from hour and minute, returning `None` when out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Truncate a wall-clock time to the minute.
    pub fn from_time(time: NaiveTime) -> Self {
        // Seconds and sub-second parts are dropped, so this cannot fail.
        Self(time.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(time))
    }

    /// Parse a time from strict "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use mrt_server::domain::TimeOfDay;
    ///
    /// // Valid times
    /// assert!(TimeOfDay::parse_hhmm("00:00").is_ok());
    /// assert!(TimeOfDay::parse_hhmm("23:59").is_ok());
    ///
    /// // Invalid formats
    /// assert!(TimeOfDay::parse_hhmm("0730").is_err());
    /// assert!(TimeOfDay::parse_hhmm("07:3").is_err());
    /// assert!(TimeOfDay::parse_hhmm("24:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Self::from_hm(hour, minute).ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        let t = TimeOfDay::parse_hhmm("00:00").unwrap();
        assert_eq!(t.hour(), 0);
        assert_eq!(t.minute(), 0);

        let t = TimeOfDay::parse_hhmm("23:59").unwrap();
        assert_eq!(t.hour(), 23);
        assert_eq!(t.minute(), 59);

        let t = TimeOfDay::parse_hhmm("14:30").unwrap();
        assert_eq!(t.hour(), 14);
        assert_eq!(t.minute(), 30);
    }

    #[test]
    fn parse_invalid_format() {
        // Wrong length
        assert!(TimeOfDay::parse_hhmm("1430").is_err());
        assert!(TimeOfDay::parse_hhmm("7:30").is_err());
        assert!(TimeOfDay::parse_hhmm("14:300").is_err());
        assert!(TimeOfDay::parse_hhmm("14:30:00").is_err());

        // Missing colon
        assert!(TimeOfDay::parse_hhmm("14-30").is_err());
        assert!(TimeOfDay::parse_hhmm("14.30").is_err());

        // Non-digit characters
        assert!(TimeOfDay::parse_hhmm("ab:cd").is_err());
        assert!(TimeOfDay::parse_hhmm("1a:30").is_err());
        assert!(TimeOfDay::parse_hhmm("+1:30").is_err());
    }

    #[test]
    fn parse_invalid_values() {
        assert!(TimeOfDay::parse_hhmm("24:00").is_err());
        assert!(TimeOfDay::parse_hhmm("25:00").is_err());
        assert!(TimeOfDay::parse_hhmm("12:60").is_err());
        assert!(TimeOfDay::parse_hhmm("12:99").is_err());
    }

    #[test]
    fn multibyte_input_is_rejected_not_panicking() {
        // Five bytes but not five ASCII characters
        assert!(TimeOfDay::parse_hhmm("é:30").is_err());
        assert!(TimeOfDay::parse_hhmm("0é:3").is_err());
    }

    #[test]
    fn display_format() {
        assert_eq!(TimeOfDay::parse_hhmm("00:00").unwrap().to_string(), "00:00");
        assert_eq!(TimeOfDay::parse_hhmm("09:05").unwrap().to_string(), "09:05");
        assert_eq!(TimeOfDay::from_hm(7, 3).unwrap().to_string(), "07:03");
    }

    #[test]
    fn ordering_is_same_day() {
        let early = TimeOfDay::parse_hhmm("00:10").unwrap();
        let late = TimeOfDay::parse_hhmm("23:55").unwrap();
        assert!(early < late);
    }

    #[test]
    fn from_time_truncates_seconds() {
        let t = NaiveTime::from_hms_milli_opt(12, 0, 59, 999).unwrap();
        let tod = TimeOfDay::from_time(t);
        assert_eq!(tod, TimeOfDay::from_hm(12, 0).unwrap());
        assert_eq!(tod.to_string(), "12:00");
    }

    #[test]
    fn from_hm_rejects_out_of_range() {
        assert!(TimeOfDay::from_hm(24, 0).is_none());
        assert!(TimeOfDay::from_hm(0, 60).is_none());
    }
}
