//! Test clock: a `Clock` pinned to one instant.

use chrono::{DateTime, TimeZone, Utc};
use mystic_core::clock::Clock;

/// A clock that always reports the same instant, so narrative timestamps in
/// snapshots can be asserted exactly.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A clock pinned to the given UTC wall time.
    ///
    /// # Panics
    ///
    /// Panics if the fields do not form a valid UTC date and time.
    #[must_use]
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        Self(
            Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
                .single()
                .expect("valid UTC timestamp"),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
