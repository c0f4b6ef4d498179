//! Wall-clock time for live sessions.

use chrono::{DateTime, Utc};
use cue_core::{Clock, Timestamp};

/// [`Clock`] backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp(Utc::now().timestamp_millis())
    }
}

/// Renders an event timestamp as RFC 3339 (UTC).
///
/// Returns `None` for instants chrono cannot represent.
pub fn format_timestamp(at: Timestamp) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(at.0).map(|dt| dt.to_rfc3339())
}
