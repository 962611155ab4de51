//! Common mistakes with iterators and containers, and the checked forms that
//! replace them.
//!
//! 1. Out-of-range ranges: slicing with bounds past the end, or with `start`
//!    after `end`, panics. [`checked_range`] reports it as an error instead.
//! 2. Writing through an invalid destination: copying into a buffer that has
//!    no room. [`crate::elementary::negatives`] grows its destination,
//!    [`copy_if_into`] stops at the buffer's capacity.
//! 3. Poor container choices: a `BTreeSet` keeps its own order and cannot be
//!    reversed in place, a `HashMap` has no order at all. Copy out first.
//! 4. Ignoring the return value: only the prefix reported by
//!    [`copy_if_into`] holds copied values.

use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;
use std::iter::Sum;

use tracing::debug;

use crate::error::AlgoError;

// =============================================================================
// Out-of-range ranges
// =============================================================================

/// Borrows `seq[start..end]`, or reports why the range is invalid.
pub fn checked_range<T>(seq: &[T], start: usize, end: usize) -> Result<&[T], AlgoError> {
    if start > end || end > seq.len() {
        debug!(start, end, len = seq.len(), "rejected range");
        return Err(AlgoError::SliceOutOfBounds {
            start,
            end,
            len: seq.len(),
        });
    }
    Ok(&seq[start..end])
}

/// Sums `seq[start..end]` after checking the range.
pub fn sum_range<'a, T>(seq: &'a [T], start: usize, end: usize) -> Result<T, AlgoError>
where
    T: Sum<&'a T>,
{
    Ok(checked_range(seq, start, end)?.iter().sum())
}

/// `end - offset`, where going below zero is an error rather than a wrap.
pub fn end_minus(seq_len: usize, offset: usize) -> Result<usize, AlgoError> {
    seq_len.checked_sub(offset).ok_or(AlgoError::SliceOutOfBounds {
        start: 0,
        end: seq_len,
        len: seq_len,
    })
}

// =============================================================================
// Destinations
// =============================================================================

/// Copies the elements matching `pred` into `dst` until it is full and
/// returns how many were written. Anything in `dst` past that count is
/// whatever was there before.
pub fn copy_if_into<T, P>(src: &[T], dst: &mut [T], mut pred: P) -> usize
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut written = 0;
    for (slot, value) in dst.iter_mut().zip(src.iter().filter(|&value| pred(value))) {
        *slot = value.clone();
        written += 1;
    }
    written
}

/// The element right after the written prefix, if the buffer has one.
pub fn first_copied_past_end<T>(buf: &[T], written: usize) -> Option<&T> {
    buf.get(written)
}

// =============================================================================
// Container choices
// =============================================================================

/// A set's elements in descending order.
pub fn reversed_set<T: Clone>(set: &BTreeSet<T>) -> Vec<T> {
    set.iter().rev().cloned().collect()
}

/// A hash map's entries sorted by key.
pub fn sorted_entries<K, V>(map: &HashMap<K, V>) -> Vec<(K, V)>
where
    K: Ord + Hash + Clone,
    V: Clone,
{
    let mut entries: Vec<(K, V)> = map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_range_valid() {
        let v = vec![1, 2, 3, 4, 5];
        assert_eq!(checked_range(&v, 1, 3).unwrap(), &[2, 3]);
        assert_eq!(checked_range(&v, 5, 5).unwrap(), &[] as &[i32]);
    }

    #[test]
    fn test_checked_range_past_end() {
        let v = vec![1, 2, 3, 4, 5];
        assert_eq!(
            checked_range(&v, 0, 7),
            Err(AlgoError::SliceOutOfBounds { start: 0, end: 7, len: 5 })
        );
    }

    #[test]
    fn test_checked_range_reversed() {
        let v = vec![1, 2, 3, 4, 5];
        assert!(checked_range(&v, 5, 0).is_err());
    }

    #[test]
    fn test_sum_range() {
        let v = vec![1, 2, 3, 4, 5];
        assert_eq!(sum_range(&v, 0, 5), Ok(15));
        assert_eq!(sum_range(&v, 2, 4), Ok(7));
        assert!(sum_range(&v, 3, 9).is_err());
    }

    #[test]
    fn test_end_minus() {
        assert_eq!(end_minus(5, 2), Ok(3));
        assert!(end_minus(5, 7).is_err());
    }

    #[test]
    fn test_copy_if_into_fills_buffer() {
        let src: Vec<i32> = (1..=10).collect();
        let mut odd = [0; 5];
        let written = copy_if_into(&src, &mut odd, |n| n % 2 != 0);
        assert_eq!(written, 5);
        assert_eq!(odd, [1, 3, 5, 7, 9]);
        assert_eq!(first_copied_past_end(&odd, written), None);
    }

    #[test]
    fn test_copy_if_into_stops_at_capacity() {
        let src: Vec<i32> = (1..=10).collect();
        let mut buf = [0; 3];
        assert_eq!(copy_if_into(&src, &mut buf, |n| n % 2 != 0), 3);
        assert_eq!(buf, [1, 3, 5]);
    }

    #[test]
    fn test_copy_if_into_partial_prefix() {
        let src = vec![2, 4, 5, 6];
        let mut buf = [-1; 4];
        let written = copy_if_into(&src, &mut buf, |n| n % 2 != 0);
        assert_eq!(written, 1);
        assert_eq!(first_copied_past_end(&buf, written), Some(&-1));
    }

    #[test]
    fn test_reversed_set() {
        let set: BTreeSet<i32> = [2, 3, 5, 7, 9].into_iter().collect();
        assert_eq!(reversed_set(&set), vec![9, 7, 5, 3, 2]);
    }

    #[test]
    fn test_sorted_entries() {
        let map: HashMap<i32, i32> = [(3, 3), (1, 1), (2, 2)].into_iter().collect();
        assert_eq!(sorted_entries(&map), vec![(1, 1), (2, 2), (3, 3)]);
    }
}
