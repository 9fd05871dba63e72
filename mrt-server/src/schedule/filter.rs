//! Filtering of departures against the current time.

use crate::domain::TimeOfDay;

/// Keep only times strictly later than `now`, preserving order.
///
/// Comparison is within a single day. An early-morning time checked late
/// at night is in the past, not tomorrow.
// FIXME: post-midnight departures never show up as upcoming late at night.
// Kept for compatibility until the intended wraparound semantics are agreed.
pub fn filter_future(times: &[TimeOfDay], now: TimeOfDay) -> Vec<TimeOfDay> {
    times.iter().copied().filter(|t| *t > now).collect()
}
