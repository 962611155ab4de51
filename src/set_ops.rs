//! Set operations over sorted slices.
//!
//! Same contract as `std::set_intersection` and friends: inputs are sorted,
//! outputs are sorted, and repeated values are matched one-for-one, so a value
//! present `m` times in `a` and `n` times in `b` appears `min(m, n)` times in
//! the intersection, `max(m, n)` in the union and `m - n` (if positive) in the
//! difference. `BTreeSet` offers the same operations for unique values.

use itertools::{EitherOrBoth, Itertools};

/// Sorted copy, ready for the operations below.
pub fn sorted_copy<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    let mut sorted = seq.to_vec();
    sorted.sort();
    sorted
}

pub fn intersection<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter()
        .merge_join_by(b.iter(), |x, y| x.cmp(y))
        .filter_map(|pair| match pair {
            EitherOrBoth::Both(x, _) => Some(x.clone()),
            _ => None,
        })
        .collect()
}

pub fn union<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter()
        .merge_join_by(b.iter(), |x, y| x.cmp(y))
        .map(|pair| match pair {
            EitherOrBoth::Both(x, _) | EitherOrBoth::Left(x) | EitherOrBoth::Right(x) => x.clone(),
        })
        .collect()
}

/// Values of `a` not matched in `b`.
pub fn difference<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter()
        .merge_join_by(b.iter(), |x, y| x.cmp(y))
        .filter_map(|pair| match pair {
            EitherOrBoth::Left(x) => Some(x.clone()),
            _ => None,
        })
        .collect()
}
