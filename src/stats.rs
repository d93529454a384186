//! Instrumentation gathered by every sort in [`crate::sort`].

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::sort::Algorithm;

/// What a single sort call cost. Every call starts from zeroed counters, so stats from different
/// calls never share state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingStats {
    /// Number of element comparisons performed.
    pub comparisons: u64,
    /// Number of element exchanges performed. Insertion sort counts each shift as one swap and
    /// merge sort, which copies instead of swapping, counts none.
    pub swaps: u64,
    /// Wall-clock duration of the call.
    pub elapsed: Duration,
}

impl SortingStats {
    /// Runs `sort` over `xs` with fresh counters, timing the whole call.
    pub(crate) fn record<T>(
        algorithm: Algorithm,
        xs: &mut [T],
        sort: impl FnOnce(&mut [T], &mut Self),
    ) -> Self {
        let mut stats = Self::default();
        let start = Instant::now();
        sort(xs, &mut stats);
        stats.elapsed = start.elapsed();

        tracing::debug!(
            %algorithm,
            len = xs.len(),
            comparisons = stats.comparisons,
            swaps = stats.swaps,
            elapsed = ?stats.elapsed,
            "sorted"
        );
        stats
    }

    /// Counts one comparison.
    pub(crate) fn compare<T: Ord>(&mut self, a: &T, b: &T) -> Ordering {
        self.comparisons += 1;
        a.cmp(b)
    }

    /// Counts one swap.
    pub(crate) fn swap<T>(&mut self, xs: &mut [T], i: usize, j: usize) {
        self.swaps += 1;
        xs.swap(i, j);
    }
}
