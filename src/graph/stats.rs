//! Cost estimates reported by iterators.

use serde::Serialize;

/// The cost triple an iterator reports to the optimizer.
///
/// Purely advisory: no field may change what an iterator matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IteratorStats {
    /// Estimated number of values produced by sequential traversal.
    pub size: u64,
    /// Estimated cost of one `next` step.
    pub next_cost: u64,
    /// Estimated cost of one `check` probe.
    pub check_cost: u64,
}

impl IteratorStats {
    /// Cost of an iterator that matches nothing: free to include.
    pub const ZERO: IteratorStats = IteratorStats {
        size: 0,
        next_cost: 0,
        check_cost: 0,
    };

    /// Sentinel for unknown cost, large enough that no optimizer picks it
    /// as the driver of a join.
    pub const UNFAVORABLE: IteratorStats = IteratorStats {
        size: 100_000,
        next_cost: 100_000,
        check_cost: 100_000,
    };

    /// Create a new cost triple.
    pub fn new(size: u64, next_cost: u64, check_cost: u64) -> Self {
        Self {
            size,
            next_cost,
            check_cost,
        }
    }

    /// True when every field is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Estimated cost of enumerating the full result set.
    pub fn scan_cost(&self) -> u64 {
        self.size.saturating_mul(self.next_cost)
    }
}
