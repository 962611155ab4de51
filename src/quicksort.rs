//! Hand-written quicksort used by the "native" solutions of Problem 1 and 2.
//!
//! Lomuto partition around the last element of the range: everything that
//! compares `<=` the pivot moves to the low side, so equal keys end up left of
//! the pivot's final slot. Ranges are inclusive `[lo, hi]`, as in the classic
//! textbook formulation.
//!
//! Recursion is replaced by an explicit work-stack. After each partition the
//! sorter keeps going on the smaller side and parks the larger one, so at most
//! `log2(n)` ranges are ever pending, even on sorted input where the last
//! element is the worst possible pivot.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::AlgoError;

// =============================================================================
// Configuration and counters
// =============================================================================

/// How the pivot of each range is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PivotStrategy {
    /// Always the element at `hi`.
    #[default]
    Last,
    /// Median of `lo`, `mid` and `hi`, moved to `hi` before the scan.
    MedianOfThree,
}

/// Work done by one sort run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortReport {
    pub partitions: usize,
    pub comparisons: usize,
    /// Exchanges of two distinct positions.
    pub swaps: usize,
    /// Largest number of ranges parked on the work-stack at once.
    pub max_pending: usize,
}

impl SortReport {
    fn swap<T>(&mut self, seq: &mut [T], a: usize, b: usize) {
        if a != b {
            seq.swap(a, b);
            self.swaps += 1;
        }
    }

    fn compare<T, F>(&mut self, compare: &mut F, a: &T, b: &T) -> Ordering
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.comparisons += 1;
        compare(a, b)
    }
}

/// `PartialOrd` as a comparator. Incomparable pairs (NaN) count as
/// "greater", so they never satisfy the `<=` test of the scan.
fn partial_order<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Greater)
}

// =============================================================================
// Partition
// =============================================================================

/// Lomuto scan of `seq[lo..=hi]` around `seq[hi]`. Returns the pivot's final
/// index.
///
/// `store` is the first slot not yet known to hold a value `<=` pivot. It
/// starts at `lo` (one past the conceptual `lo - 1` boundary), so the index
/// never has to go below zero.
fn lomuto<T, F>(seq: &mut [T], lo: usize, hi: usize, compare: &mut F, report: &mut SortReport) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut store = lo;
    for j in lo..hi {
        if report.compare(compare, &seq[j], &seq[hi]) != Ordering::Greater {
            report.swap(seq, store, j);
            store += 1;
        }
    }
    report.swap(seq, store, hi);
    report.partitions += 1;
    store
}

/// Orders `lo`, `mid`, `hi` and parks the median at `hi`.
fn median_of_three<T, F>(seq: &mut [T], lo: usize, hi: usize, compare: &mut F, report: &mut SortReport)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if hi - lo < 2 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    if report.compare(compare, &seq[mid], &seq[lo]) == Ordering::Less {
        report.swap(seq, lo, mid);
    }
    if report.compare(compare, &seq[hi], &seq[lo]) == Ordering::Less {
        report.swap(seq, lo, hi);
    }
    if report.compare(compare, &seq[hi], &seq[mid]) == Ordering::Less {
        report.swap(seq, mid, hi);
    }
    report.swap(seq, mid, hi);
}

fn check_partition_bounds(len: usize, lo: usize, hi: usize) -> Result<(), AlgoError> {
    if hi >= len {
        return Err(AlgoError::out_of_range(hi, len));
    }
    if lo > hi {
        return Err(AlgoError::InvalidRange { lo, hi });
    }
    Ok(())
}

/// Partitions `seq[lo..=hi]` around `seq[hi]` and returns the pivot's final
/// index `p`: `seq[lo..p]` are all `<=` the pivot, `seq[p + 1..=hi]` are all
/// greater.
pub fn partition<T: PartialOrd>(seq: &mut [T], lo: usize, hi: usize) -> Result<usize, AlgoError> {
    partition_by(seq, lo, hi, partial_order)
}

/// [`partition`] with a custom comparator. "At most the pivot" means
/// `compare(x, pivot) != Ordering::Greater`.
pub fn partition_by<T, F>(seq: &mut [T], lo: usize, hi: usize, mut compare: F) -> Result<usize, AlgoError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    check_partition_bounds(seq.len(), lo, hi)?;
    Ok(lomuto(seq, lo, hi, &mut compare, &mut SortReport::default()))
}

// =============================================================================
// Sort
// =============================================================================

/// Configurable quicksort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quicksort {
    pivot: PivotStrategy,
}

impl Quicksort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pivot(mut self, strategy: PivotStrategy) -> Self {
        self.pivot = strategy;
        self
    }

    pub fn strategy(&self) -> PivotStrategy {
        self.pivot
    }

    /// Sorts the whole slice.
    pub fn sort_slice<T, F>(&self, seq: &mut [T], mut compare: F) -> SortReport
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if seq.len() < 2 {
            return SortReport::default();
        }
        let hi = seq.len() - 1;
        self.run(seq, 0, hi, &mut compare)
    }

    /// Sorts `seq[lo..=hi]` in non-decreasing order and leaves everything
    /// outside the range untouched.
    ///
    /// A negative `lo` or an `hi` past the end is [`AlgoError::OutOfRange`].
    /// `lo >= hi` is an empty or single-element range and does nothing, which
    /// makes `sort_range(&mut [], 0, -1, ..)` a valid no-op.
    pub fn sort_range<T, F>(&self, seq: &mut [T], lo: isize, hi: isize, mut compare: F) -> Result<SortReport, AlgoError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = seq.len();
        if lo < 0 {
            return Err(AlgoError::OutOfRange { index: lo, len });
        }
        if hi >= 0 && hi as usize >= len {
            return Err(AlgoError::OutOfRange { index: hi, len });
        }
        if lo >= hi {
            debug!(lo, hi, "empty or single-element range, nothing to sort");
            return Ok(SortReport::default());
        }
        Ok(self.run(seq, lo as usize, hi as usize, &mut compare))
    }

    fn run<T, F>(&self, seq: &mut [T], lo: usize, hi: usize, compare: &mut F) -> SortReport
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        debug!(lo, hi, pivot = ?self.pivot, "quicksort");

        let mut report = SortReport::default();
        let mut pending: Vec<(usize, usize)> = Vec::new();
        let mut next = Some((lo, hi));

        while let Some((lo, hi)) = next.take().or_else(|| pending.pop()) {
            if self.pivot == PivotStrategy::MedianOfThree {
                median_of_three(seq, lo, hi, compare, &mut report);
            }
            let mid = lomuto(seq, lo, hi, compare, &mut report);
            trace!(lo, hi, mid, "partitioned");

            // Only ranges of two or more elements need more work.
            let left = (mid > lo + 1).then(|| (lo, mid - 1));
            let right = (mid + 1 < hi).then(|| (mid + 1, hi));

            next = match (left, right) {
                (Some(l), Some(r)) => {
                    let (smaller, larger) = if l.1 - l.0 <= r.1 - r.0 { (l, r) } else { (r, l) };
                    pending.push(larger);
                    Some(smaller)
                }
                (l, r) => l.or(r),
            };
            report.max_pending = report.max_pending.max(pending.len());
        }

        debug!(
            partitions = report.partitions,
            comparisons = report.comparisons,
            swaps = report.swaps,
            "quicksort finished"
        );
        report
    }
}

/// Sorts `seq[lo..=hi]` with the last-element pivot. See
/// [`Quicksort::sort_range`] for the bounds rules.
pub fn sort<T: PartialOrd>(seq: &mut [T], lo: isize, hi: isize) -> Result<(), AlgoError> {
    sort_by(seq, lo, hi, partial_order)
}

/// [`sort`] with a custom comparator, e.g. `|a, b| b.cmp(a)` for decreasing
/// order.
pub fn sort_by<T, F>(seq: &mut [T], lo: isize, hi: isize, compare: F) -> Result<(), AlgoError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    Quicksort::new().sort_range(seq, lo, hi, compare).map(|_| ())
}

/// Sorts the whole slice.
pub fn quicksort<T: PartialOrd>(seq: &mut [T]) {
    Quicksort::new().sort_slice(seq, partial_order);
}

/// Sorts the whole slice with the given pivot strategy.
pub fn quicksort_with<T: PartialOrd>(seq: &mut [T], pivot: PivotStrategy) -> SortReport {
    Quicksort::new().pivot(pivot).sort_slice(seq, partial_order)
}

// =============================================================================
// Tests
// =============================================================================
