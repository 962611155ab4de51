//! Problem 1: order a vector of random capital letters increasingly and
//! decreasingly.
//!
//! Solved twice. [`native`] sorts with the hand-written quicksort and reverses
//! with a two-pointer swap loop; [`std_algos`] uses `sort_unstable` and
//! `reverse`. Both produce the same [`LetterOrders`] for the same input.

use rand::Rng;
use tracing::debug;

/// Letters in both orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterOrders {
    pub increasing: Vec<char>,
    pub decreasing: Vec<char>,
}

/// `count` letters drawn uniformly from 'A'..='Z'.
pub fn random_letters<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<char> {
    debug!(count, "drawing random letters");
    (0..count).map(|_| rng.gen_range('A'..='Z')).collect()
}

/// Swaps from both ends towards the middle.
pub fn reverse_in_place<T>(seq: &mut [T]) {
    let len = seq.len();
    for front in 0..len / 2 {
        seq.swap(front, len - 1 - front);
    }
}

pub mod native {
    use super::{reverse_in_place, LetterOrders};
    use crate::quicksort::{PivotStrategy, Quicksort, SortReport};

    pub fn order_letters(letters: &[char], pivot: PivotStrategy) -> LetterOrders {
        order_letters_with(letters, &Quicksort::new().pivot(pivot)).0
    }

    /// [`order_letters`] with the sorter's work counters.
    pub fn order_letters_with(letters: &[char], sorter: &Quicksort) -> (LetterOrders, SortReport) {
        let mut working = letters.to_vec();
        let report = sorter.sort_slice(&mut working, char::cmp);

        let mut increasing = Vec::with_capacity(working.len());
        for &letter in &working {
            increasing.push(letter);
        }

        reverse_in_place(&mut working);

        let mut decreasing = Vec::with_capacity(working.len());
        for &letter in &working {
            decreasing.push(letter);
        }

        let orders = LetterOrders {
            increasing,
            decreasing,
        };
        (orders, report)
    }
}

pub mod std_algos {
    use super::LetterOrders;

    pub fn order_letters(letters: &[char]) -> LetterOrders {
        let mut working = letters.to_vec();
        working.sort_unstable();
        let increasing = working.clone();
        working.reverse();
        LetterOrders {
            increasing,
            decreasing: working,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quicksort::{PivotStrategy, Quicksort, SortReport};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_letters_are_capitals() {
        let mut rng = StdRng::seed_from_u64(42);
        let letters = random_letters(200, &mut rng);
        assert_eq!(letters.len(), 200);
        assert!(letters.iter().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_random_letters_reproducible() {
        let a = random_letters(20, &mut StdRng::seed_from_u64(1));
        let b = random_letters(20, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_reverse_in_place() {
        let mut odd = [1, 2, 3, 4, 5];
        reverse_in_place(&mut odd);
        assert_eq!(odd, [5, 4, 3, 2, 1]);

        let mut even = ['a', 'b', 'c', 'd'];
        reverse_in_place(&mut even);
        assert_eq!(even, ['d', 'c', 'b', 'a']);

        let mut empty: [i32; 0] = [];
        reverse_in_place(&mut empty);
    }

    #[test]
    fn test_native_orders() {
        let orders = native::order_letters(&['D', 'A', 'C', 'B', 'A'], PivotStrategy::Last);
        assert_eq!(orders.increasing, vec!['A', 'A', 'B', 'C', 'D']);
        assert_eq!(orders.decreasing, vec!['D', 'C', 'B', 'A', 'A']);
    }

    #[test]
    fn test_native_report() {
        let sorter = Quicksort::new().pivot(PivotStrategy::MedianOfThree);
        let (orders, report) = native::order_letters_with(&['C', 'A', 'B', 'D'], &sorter);
        assert_eq!(orders.increasing, vec!['A', 'B', 'C', 'D']);
        assert!(report.partitions >= 1);
        assert!(report.comparisons >= 3);

        let (_, report) = native::order_letters_with(&['Z'], &sorter);
        assert_eq!(report, SortReport::default());
    }

    #[test]
    fn test_std_orders() {
        let orders = std_algos::order_letters(&['Q', 'E', 'Z']);
        assert_eq!(orders.increasing, vec!['E', 'Q', 'Z']);
        assert_eq!(orders.decreasing, vec!['Z', 'Q', 'E']);
    }

    proptest! {
        #[test]
        fn prop_native_matches_std(seed: u64, count in 0usize..64) {
            let letters = random_letters(count, &mut StdRng::seed_from_u64(seed));
            let expected = std_algos::order_letters(&letters);
            prop_assert_eq!(native::order_letters(&letters, PivotStrategy::Last), expected.clone());
            prop_assert_eq!(native::order_letters(&letters, PivotStrategy::MedianOfThree), expected);
        }
    }
}
