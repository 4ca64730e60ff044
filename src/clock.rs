//! Time sources for the café.
//!
//! The café actor reads the clock exactly once per request, so every decision inside one
//! request (gate check, prediction, completion delay) sees the same instant.

use crate::model::Timestamp;
use chrono::{FixedOffset, TimeDelta, Utc};
use std::sync::{Arc, Mutex, PoisonError};

/// Anything that can tell the café what time it is.
pub trait Clock: Send + Sync + std::fmt::Debug {
    fn now(&self) -> Timestamp;
}

/// Clock handle shared between the actor and whoever else needs the time.
pub type SharedClock = Arc<dyn Clock>;

/// Wall clock converted once into the café's fixed offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now().with_timezone(&self.offset)
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Timestamp>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn set(&self, at: Timestamp) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = at;
    }

    /// Moves the clock forward (or back, for a negative delta). Saturates at the edge of
    /// chrono's range.
    pub fn advance(&self, by: TimeDelta) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(next) = now.checked_add_signed(by) {
            *now = next;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn system_clock_uses_configured_offset() {
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        let clock = SystemClock::new(offset);
        assert_eq!(clock.now().offset(), &offset);
    }

    #[test]
    fn manual_clock_advances_and_sets() {
        let offset = FixedOffset::east_opt(0).unwrap();
        let start = offset.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let clock = ManualClock::new(start);

        clock.advance(TimeDelta::seconds(90));
        assert_eq!(clock.now(), start + TimeDelta::seconds(90));

        clock.set(start);
        assert_eq!(clock.now(), start);
    }
}
