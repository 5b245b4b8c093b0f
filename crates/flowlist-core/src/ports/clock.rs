//! Clock port: the store never calls `Utc::now()` directly.
//!
//! Time enters the system in exactly one place so tests can pin it.
//! `created_at`, `completed_at`, overdue/upcoming classification and the
//! 7-day trend all observe the same instant.

use chrono::{DateTime, Utc};
use std::cell::Cell;
use std::rc::Rc;

/// Provides the current instant.
pub trait Clock {
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

/// A clock pinned to a settable instant.
///
/// Clones share the same cell, so a test can hold one handle, hand a clone
/// to the store, and advance time between operations.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    /// Move the clock to a new instant. Every clone observes the change.
    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    /// Advance the clock by a duration.
    pub fn advance(&self, by: chrono::Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}
