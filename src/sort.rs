//! Six classic comparison sorts. Each one sorts a slice in place into ascending order and returns
//! the [`SortingStats`] it gathered along the way.
//!
//! Merge and insertion sort are stable. Bubble, selection, quick and heap sort make no promise
//! about the relative order of equal elements.
//!
//! # Examples
//!
//! ```
//! use bst_sort::sort::{self, Algorithm};
//!
//! let mut xs = [64, 34, 25, 12, 22, 11, 90, 5, 77, 30];
//! let stats = sort::quick_sort(&mut xs);
//!
//! assert_eq!(xs, [5, 11, 12, 22, 25, 30, 34, 64, 77, 90]);
//! assert!(sort::is_sorted(&xs));
//! assert!(stats.comparisons > 0);
//!
//! // Or pick the algorithm at runtime.
//! let algorithm: Algorithm = "heap".parse().unwrap();
//! let mut ys = [3, 1, 2];
//! algorithm.sort(&mut ys);
//! assert_eq!(ys, [1, 2, 3]);
//! ```

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::stats::SortingStats;

/// The sorting algorithms in this module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// [`bubble_sort`]
    Bubble,
    /// [`selection_sort`]
    Selection,
    /// [`insertion_sort`]
    Insertion,
    /// [`merge_sort`]
    Merge,
    /// [`quick_sort`]
    Quick,
    /// [`heap_sort`]
    Heap,
}

impl Algorithm {
    /// Every algorithm, in the order [`compare_algorithms`] reports them.
    pub const ALL: [Algorithm; 6] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
        Self::Heap,
    ];

    /// Human readable name, e.g. `"Quick Sort"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
            Self::Heap => "Heap Sort",
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
        }
    }

    /// Sorts `xs` in place with this algorithm.
    pub fn sort<T>(self, xs: &mut [T]) -> SortingStats
    where
        T: Ord + Clone,
    {
        match self {
            Self::Bubble => bubble_sort(xs),
            Self::Selection => selection_sort(xs),
            Self::Insertion => insertion_sort(xs),
            Self::Merge => merge_sort(xs),
            Self::Quick => quick_sort(xs),
            Self::Heap => heap_sort(xs),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either the display name (`"Merge Sort"`) or the short name (`"merge"`), ignoring case.
impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s) || a.short_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_owned()))
    }
}

/// Repeatedly swaps out-of-order neighbours. Stops early after a pass that swaps nothing.
pub fn bubble_sort<T: Ord>(xs: &mut [T]) -> SortingStats {
    SortingStats::record(Algorithm::Bubble, xs, |xs, stats| {
        let n = xs.len();
        for pass in 0..n.saturating_sub(1) {
            let mut swapped = false;
            for j in 0..n - pass - 1 {
                if stats.compare(&xs[j], &xs[j + 1]) == Ordering::Greater {
                    stats.swap(xs, j, j + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
    })
}

/// Moves the minimum of the unsorted remainder into each position in turn, swapping at most
/// once per position.
pub fn selection_sort<T: Ord>(xs: &mut [T]) -> SortingStats {
    SortingStats::record(Algorithm::Selection, xs, |xs, stats| {
        let n = xs.len();
        for i in 0..n.saturating_sub(1) {
            let mut min = i;
            for j in i + 1..n {
                if stats.compare(&xs[j], &xs[min]) == Ordering::Less {
                    min = j;
                }
            }
            if min != i {
                stats.swap(xs, i, min);
            }
        }
    })
}

/// Grows a sorted prefix, shifting each new element left past every larger one.
pub fn insertion_sort<T: Ord>(xs: &mut [T]) -> SortingStats {
    SortingStats::record(Algorithm::Insertion, xs, |xs, stats| {
        for i in 1..xs.len() {
            let mut j = i;
            while j > 0 && stats.compare(&xs[j - 1], &xs[j]) == Ordering::Greater {
                stats.swap(xs, j - 1, j);
                j -= 1;
            }
        }
    })
}

/// Top-down merge sort. Splits at the midpoint (the left half takes the extra element), sorts
/// both halves and merges them, taking from the left run on ties.
pub fn merge_sort<T: Ord + Clone>(xs: &mut [T]) -> SortingStats {
    SortingStats::record(Algorithm::Merge, xs, merge_sort_halves)
}

fn merge_sort_halves<T: Ord + Clone>(xs: &mut [T], stats: &mut SortingStats) {
    if xs.len() < 2 {
        return;
    }
    let mid = (xs.len() + 1) / 2;
    merge_sort_halves(&mut xs[..mid], stats);
    merge_sort_halves(&mut xs[mid..], stats);
    merge(xs, mid, stats);
}

/// Merges the sorted runs `xs[..mid]` and `xs[mid..]`.
fn merge<T: Ord + Clone>(xs: &mut [T], mid: usize, stats: &mut SortingStats) {
    let mut left = xs[..mid].to_vec().into_iter().peekable();
    let mut right = xs[mid..].to_vec().into_iter().peekable();

    let merged = std::iter::from_fn(|| {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => stats.compare(l, r) == Ordering::Greater,
            (Some(_), None) => false,
            (None, _) => true,
        };
        if take_right {
            right.next()
        } else {
            left.next()
        }
    });
    // Together the runs hold exactly `xs.len()` values, so `merged` fills every slot.
    for (slot, value) in xs.iter_mut().zip(merged) {
        *slot = value;
    }
}

/// Quick sort with Lomuto partitioning around the last element.
pub fn quick_sort<T: Ord>(xs: &mut [T]) -> SortingStats {
    SortingStats::record(Algorithm::Quick, xs, quick_sort_range)
}

fn quick_sort_range<T: Ord>(mut xs: &mut [T], stats: &mut SortingStats) {
    // Recurse into the smaller side and loop on the larger one so the stack stays logarithmic.
    while xs.len() > 1 {
        let pivot = partition(xs, stats);
        let (lower, upper) = std::mem::take(&mut xs).split_at_mut(pivot);
        let upper = &mut upper[1..];
        if lower.len() < upper.len() {
            quick_sort_range(lower, stats);
            xs = upper;
        } else {
            quick_sort_range(upper, stats);
            xs = lower;
        }
    }
}

/// Moves everything less than the last element to the front, then places that element right
/// after them. Returns its final index.
fn partition<T: Ord>(xs: &mut [T], stats: &mut SortingStats) -> usize {
    let last = xs.len() - 1;
    let mut store = 0;
    for j in 0..last {
        if stats.compare(&xs[j], &xs[last]) == Ordering::Less {
            stats.swap(xs, store, j);
            store += 1;
        }
    }
    stats.swap(xs, store, last);
    store
}

/// Builds a max-heap in place, then repeatedly swaps the root behind the shrinking heap.
pub fn heap_sort<T: Ord>(xs: &mut [T]) -> SortingStats {
    SortingStats::record(Algorithm::Heap, xs, |xs, stats| {
        let n = xs.len();
        for root in (0..n / 2).rev() {
            sift_down(xs, root, stats);
        }
        for end in (1..n).rev() {
            stats.swap(xs, 0, end);
            sift_down(&mut xs[..end], 0, stats);
        }
    })
}

/// Restores the max-heap property of `heap` below `root`.
fn sift_down<T: Ord>(heap: &mut [T], mut root: usize, stats: &mut SortingStats) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < heap.len() && stats.compare(&heap[left], &heap[largest]) == Ordering::Greater {
            largest = left;
        }
        if right < heap.len() && stats.compare(&heap[right], &heap[largest]) == Ordering::Greater
        {
            largest = right;
        }
        if largest == root {
            return;
        }
        stats.swap(heap, root, largest);
        root = largest;
    }
}

/// Returns whether `xs` is in non-decreasing order. Empty and single-element slices are sorted.
pub fn is_sorted<T: Ord>(xs: &[T]) -> bool {
    xs.windows(2).all(|w| w[0] <= w[1])
}

/// Runs every algorithm on its own copy of `xs`, leaving `xs` untouched.
///
/// ```
/// use bst_sort::sort::{self, Algorithm};
///
/// let results = sort::compare_algorithms(&[64, 34, 25, 12, 22, 11, 90]);
///
/// assert_eq!(results.len(), 6);
/// assert!(results[&Algorithm::Bubble].comparisons > 0);
/// ```
pub fn compare_algorithms<T>(xs: &[T]) -> BTreeMap<Algorithm, SortingStats>
where
    T: Ord + Clone,
{
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| (algorithm, algorithm.sort(&mut xs.to_vec())))
        .collect()
}
