#[cfg(test)]
use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of fresh item ids for an editing session.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs. The default for live sessions.
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic `<prefix>-<n>` ids, for deterministic tests.
#[cfg(test)]
pub struct SequentialIdGenerator {
    prefix: &'static str,
    next: AtomicU64,
}

#[cfg(test)]
impl SequentialIdGenerator {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next: AtomicU64::new(1),
        }
    }
}

#[cfg(test)]
impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{n}", self.prefix)
    }
}
