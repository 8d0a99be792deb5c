//! Time source for stamping when a narrative arrives.

use chrono::{DateTime, Utc};

/// Supplies the current instant. Injected so sessions can be replayed with a
/// fixed time.
pub trait Clock: Send + Sync {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
