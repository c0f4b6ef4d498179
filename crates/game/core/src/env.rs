//! Environment facts the rules read but never own.
//!
//! The only external fact a scoring transition needs is the wall-clock time
//! stamped onto new events. Reading it through [`Clock`] keeps every engine
//! deterministic under test.

use crate::state::Timestamp;

/// Source of timestamps for newly appended events.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Clock frozen at a single instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl FixedClock {
    pub const fn at_millis(millis: i64) -> Self {
        Self(Timestamp(millis))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
