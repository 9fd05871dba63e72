//! Schedule transformation pipeline.
//!
//! Pure functions over one decoded feed snapshot and an externally
//! supplied "now":
//!
//! - [`parse_time_list`] decodes a raw "HH:MM,HH:MM,..." field
//! - [`filter_future`] drops times at or before now
//! - [`build_departures`] combines both directions for a station
//! - [`find_station`] and [`to_summaries`] operate on the station list

mod departures;
mod filter;
mod lookup;
mod parse;

pub use departures::build_departures;
pub use filter::filter_future;
pub use lookup::{find_station, to_summaries};
pub use parse::parse_time_list;
