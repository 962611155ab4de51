//! Pattern 3: More Algorithms
//! Example: Set operations, numeric ranges and heaps, string operations
//!
//! Run with: cargo run --bin p3_more_algorithms

use std::error::Error;

use rand::rngs::StdRng;
use rand::SeedableRng;

use algorithms_tour::display::{banner, key_points, show};
use algorithms_tour::heap::{iota, is_heap, make_heap, push_heap, shuffle};
use algorithms_tour::logger;
use algorithms_tour::set_ops::{difference, intersection, sorted_copy, union};
use algorithms_tour::strings::{distinct_permutations, remove_whitespace};
use algorithms_tour::TourConfig;

fn main() -> Result<(), Box<dyn Error>> {
    let config = TourConfig::discover(std::env::args().skip(1))?;
    logger::init_with_level(config.log_level);

    // 1. Set operations
    banner("Set Operations");

    let set1 = sorted_copy(&[1, 2, 3, 4, 5]);
    let set2 = sorted_copy(&[4, 5, 6]);
    show("Set1", &set1);
    show("Set2", &set2);
    show("Set intersection", intersection(&set1, &set2));
    show("Set union", union(&set1, &set2));
    show("Set difference (set1 - set2)", difference(&set1, &set2));

    // 2. Numeric ranges
    banner("Numeric Ranges");

    let mut values = iota(10, 1);
    show("Initial range", &values);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    shuffle(&mut values, &mut rng);
    show("After shuffling", &values);

    if !is_heap(&values) {
        make_heap(&mut values);
    }
    if is_heap(&values) {
        show("It's a heap", &values);
    }

    println!("\nPushing 0 in the heap...");
    values.push(0);
    push_heap(&mut values);
    if is_heap(&values) {
        show("It's a heap", &values);
    }

    // 3. String operations
    banner("String Operations");

    let text = "Hello darkness my old friend...";
    println!("My string: '{}'", text);
    println!("Without spaces: '{}'", remove_whitespace(text));

    for word in ["abc", "aba"] {
        println!("\nPermutations of '{}':", word);
        for permutation in distinct_permutations(word) {
            println!("{}", permutation);
        }
    }

    key_points(&[
        "Set operations need sorted input and produce sorted output",
        "A max-heap is just a slice whose parents are no smaller than their children",
        "push_heap only restores order after the value is appended",
        "next_permutation walks distinct arrangements; repeated letters collapse",
    ]);

    Ok(())
}
