use crate::domain::ports::IdGenerator;
use rand::Rng;
use std::sync::atomic::{AtomicU32, Ordering};

/// Upper bound (exclusive) of the reference identifier range.
pub const ID_RANGE: u32 = 100_000;

/// Draws bidding and account numbers uniformly from `0..100000`, the
/// reference scheme. Collisions within an application are unlikely but
/// not impossible; use `SequentialIdGenerator` where determinism or
/// uniqueness matters.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> u32 {
        rand::thread_rng().gen_range(0..ID_RANGE)
    }
}

/// Hands out monotonically increasing identifiers from a starting
/// value. Deterministic and collision-free.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU32,
}

impl SequentialIdGenerator {
    pub fn new(start: u32) -> Self {
        Self {
            next: AtomicU32::new(start),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> u32 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
