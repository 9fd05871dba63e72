//! Source of the current time of day.

use chrono::Utc;
use chrono_tz::Tz;

use crate::domain::TimeOfDay;

/// Default zone for the Jakarta MRT timetable.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Jakarta;

/// Provides "now" to the schedule pipeline.
pub trait Clock: Send + Sync {
    fn now(&self) -> TimeOfDay;
}

/// Wall clock in a fixed time zone.
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock {
    tz: Tz,
}

impl ZonedClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }
}

impl Default for ZonedClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}

impl Clock for ZonedClock {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::from_time(Utc::now().with_timezone(&self.tz).time())
    }
}

/// Clock frozen at one time of day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub TimeOfDay);

impl Clock for FixedClock {
    fn now(&self) -> TimeOfDay {
        self.0
    }
}
