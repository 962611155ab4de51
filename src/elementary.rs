//! Elementary algorithms: for_each, transform, find_if, copy_if, accumulate.
//!
//! Policies are plain functions or closures; the algorithms are iterator
//! adaptors.

use std::collections::LinkedList;

// =============================================================================
// Policies
// =============================================================================

pub fn is_even(number: &i32) -> bool {
    number % 2 == 0
}

pub fn is_negative(value: &f64) -> bool {
    *value < 0.0
}

/// Predicate: strictly greater than `target`.
pub fn is_greater<T: PartialOrd>(target: T) -> impl Fn(&T) -> bool {
    move |value| *value > target
}

// =============================================================================
// for_each
// =============================================================================

/// Even values in order.
pub fn evens(seq: &[i32]) -> Vec<i32> {
    let mut found = Vec::new();
    seq.iter().filter(|&n| is_even(n)).for_each(|&n| found.push(n));
    found
}

/// Even values of the second half, starting at `len / 2`.
pub fn evens_from_middle(seq: &[i32]) -> Vec<i32> {
    evens(&seq[seq.len() / 2..])
}

// =============================================================================
// find_if
// =============================================================================

/// First element strictly greater than `target`.
pub fn first_greater<'a, T, I>(values: I, target: T) -> Option<T>
where
    T: PartialOrd + Copy + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let greater = is_greater(target);
    values.into_iter().find(|value| greater(*value)).copied()
}

// =============================================================================
// transform
// =============================================================================

/// Replaces every value with `e^value`.
pub fn exponentiate(values: &mut [f64]) {
    values.iter_mut().for_each(|value| *value = value.exp());
}

// =============================================================================
// copy_if
// =============================================================================

/// Copies negative values into a growing vector.
pub fn negatives(list: &LinkedList<f64>) -> Vec<f64> {
    list.iter().copied().filter(is_negative).collect()
}

// =============================================================================
// accumulate
// =============================================================================

pub fn accumulate(initial: f64, deltas: &[f64]) -> f64 {
    deltas.iter().fold(initial, |total, delta| total + delta)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EarningsOutcome {
    Profit(f64),
    /// Includes breaking even.
    Loss(f64),
}

/// Applies a week of deltas and reports whether the balance grew.
pub fn assess_earnings(initial: f64, deltas: &[f64]) -> EarningsOutcome {
    let updated = accumulate(initial, deltas);
    if updated > initial {
        EarningsOutcome::Profit(updated)
    } else {
        EarningsOutcome::Loss(updated)
    }
}
