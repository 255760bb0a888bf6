//! Product id generation.
//!
//! Ids are K-sortable: comparing two ids as strings orders them by creation
//! time. The generator is injected into the service so tests can use a
//! deterministic sequence.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// UUIDv7 rendered as lowercase hyphenated hex.
///
/// The millisecond timestamp is the most significant field and the `uuid`
/// crate keeps a counter for ids created within the same millisecond, so
/// string order matches generation order within a process.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn next_id(&self) -> String {
        Uuid::now_v7().to_string()
    }
}

/// Deterministic generator: `prefix` followed by a zero-padded counter.
#[derive(Debug)]
pub struct SequenceGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequenceGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequenceGenerator {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{:020}", self.prefix, n)
    }
}
