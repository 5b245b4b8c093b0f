//! IdGenerator port: ID assignment is injected, like the clock.
//!
//! The production generator builds ULIDs from the clock's timestamp plus
//! random bits, so IDs sort by creation time and tests with a pinned clock
//! get a deterministic timestamp prefix.

use ulid::Ulid;

use crate::domain::TaskId;
use crate::ports::Clock;

/// Produces fresh task identifiers.
pub trait IdGenerator {
    fn generate_task_id(&self) -> TaskId;
}

/// ULID-based generator, seeded from a `Clock`.
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_task_id(&self) -> TaskId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        TaskId::from(ulid)
    }
}
