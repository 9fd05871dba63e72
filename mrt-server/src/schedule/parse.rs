//! Decoding of raw comma-separated schedule strings.

use tracing::{debug, warn};

use crate::domain::TimeOfDay;

/// Parse a comma-separated list of "HH:MM" tokens.
///
/// Tokens are trimmed; empty tokens are skipped and malformed ones are
/// logged and dropped. The result keeps feed order and is never an error.
///
/// Tokens must be zero-padded. The MRT website itself accepts an unpadded
/// hour such as `7:30`; if the feed ever starts publishing that form,
/// those departures are dropped here and a station appears to have no
/// service.
///
/// # Examples
///
/// ```
/// use mrt_server::schedule::parse_time_list;
///
/// let times = parse_time_list("08:00, bad ,09:30,");
/// let formatted: Vec<String> = times.iter().map(|t| t.to_string()).collect();
/// assert_eq!(formatted, ["08:00", "09:30"]);
/// ```
pub fn parse_time_list(raw: &str) -> Vec<TimeOfDay> {
    if raw.is_empty() {
        return Vec::new();
    }

    let mut times = Vec::new();
    let mut token_count = 0;

    for (index, token) in raw.split(',').enumerate() {
        token_count += 1;
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        match TimeOfDay::parse_hhmm(token) {
            Ok(time) => times.push(time),
            Err(e) => warn!(token, index, error = %e, "skipping invalid schedule token"),
        }
    }

    debug!(
        valid = times.len(),
        tokens = token_count,
        "parsed schedule time list"
    );
    times
}
