//! Identifier allocation

use std::sync::atomic::{AtomicI64, Ordering};

/// Issues unique, strictly increasing identifiers under concurrent use.
///
/// The first id is 1. Allocation is a single atomic `fetch_add` — it cannot
/// fail, so no value is ever skipped, and two concurrent callers never see
/// the same value. Callers need no external locking.
#[derive(Debug, Default)]
pub struct IdAllocator {
    counter: AtomicI64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            counter: AtomicI64::new(0),
        }
    }

    /// Allocate the next identifier
    pub fn next_id(&self) -> i64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Highest identifier allocated so far (0 when none)
    pub fn current(&self) -> i64 {
        self.counter.load(Ordering::SeqCst)
    }
}
