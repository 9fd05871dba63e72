//! Departure directions and entries.

use std::fmt;

use super::TimeOfDay;

/// The two service directions every station schedule covers.
///
/// Destination names are fixed for the line and never taken from feed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Southbound, terminating at Lebak Bulus.
    LebakBulus,
    /// Northbound, terminating at Bundaran HI.
    BundaranHi,
}

impl Direction {
    /// Directions in the order their departures are emitted.
    pub const ALL: [Direction; 2] = [Direction::LebakBulus, Direction::BundaranHi];

    /// Display name of the terminus.
    pub fn destination_name(self) -> &'static str {
        match self {
            Direction::LebakBulus => "Stasiun Lebak Bulus Grab",
            Direction::BundaranHi => "Stasiun Bundaran HI Bank DKI",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.destination_name())
    }
}

/// A single upcoming departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartureEntry {
    pub direction: Direction,
    pub time: TimeOfDay,
}

impl DepartureEntry {
    pub fn new(direction: Direction, time: TimeOfDay) -> Self {
        Self { direction, time }
    }

    /// Destination display name.
    pub fn destination_name(&self) -> &'static str {
        self.direction.destination_name()
    }
}
