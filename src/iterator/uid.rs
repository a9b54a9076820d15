//! Process-wide iterator identity.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ITERATOR_ID: AtomicU64 = AtomicU64::new(0);

/// Hand out the next iterator uid. Never repeats within a process.
pub fn next_uid() -> u64 {
    NEXT_ITERATOR_ID.fetch_add(1, Ordering::Relaxed)
}
