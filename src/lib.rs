// Standard Library Algorithms Tour
// Library half of the teaching programs in src/bin. Every algorithm the
// programs print lives here so it can be tested on its own.
//
// Programs:
// - p1_pitfalls: iterator and container mistakes, and their safe forms
// - p2_elementary: for_each, transform, find_if, copy_if, accumulate
// - p3_more_algorithms: set operations, heaps, string permutations
// - p4_letters_*: Problem 1, ordering random letters (native vs std)
// - p5_prices_*: Problem 2, statistics over a price series (native vs std)

pub mod config;
pub mod display;
pub mod elementary;
pub mod error;
pub mod heap;
pub mod letters;
pub mod logger;
pub mod pitfalls;
pub mod prices;
pub mod quicksort;
pub mod set_ops;
pub mod strings;

pub use config::TourConfig;
pub use error::{AlgoError, LoadError};
pub use quicksort::{partition, quicksort, sort, PivotStrategy, Quicksort, SortReport};
