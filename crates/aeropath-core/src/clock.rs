// crates/aeropath-core/src/clock.rs
use chrono::{DateTime, Utc};

/// Time source abstraction.
///
/// The "recent" filter and the export timestamp depend on the current
/// instant; swapping the clock makes both reproducible.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Default clock: the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
