//! Per-thread field operation counters
//!
//! Compiled for tests and behind the `op-trace` feature. Counting never
//! looks at operand values, so two ladder runs with the same parameters
//! must leave identical totals.

use std::cell::Cell;

/// Number of field operations performed on the current thread
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpCounts {
    /// Field additions
    pub additions: u64,
    /// Field subtractions
    pub subtractions: u64,
    /// Field multiplications (squarings excluded)
    pub multiplications: u64,
    /// Field squarings
    pub squarings: u64,
    /// Masked selects
    pub selections: u64,
    /// Masked swaps
    pub swaps: u64,
}

thread_local! {
    static COUNTS: Cell<OpCounts> = Cell::new(OpCounts::default());
}

/// Reset the counters of the current thread
pub fn reset() {
    COUNTS.with(|c| c.set(OpCounts::default()));
}

/// Read the counters of the current thread
pub fn snapshot() -> OpCounts {
    COUNTS.with(|c| c.get())
}

pub(crate) fn record(update: impl FnOnce(&mut OpCounts)) {
    COUNTS.with(|c| {
        let mut counts = c.get();
        update(&mut counts);
        c.set(counts);
    });
}
