//! Pattern 1: Iterator and Container Pitfalls
//! Example: Out-of-range ranges, invalid destinations, poor container choices,
//! ignored return values
//!
//! Run with: cargo run --bin p1_pitfalls

use std::collections::{BTreeSet, HashMap, LinkedList};
use std::error::Error;

use algorithms_tour::display::{banner, key_points, show};
use algorithms_tour::elementary::negatives;
use algorithms_tour::logger;
use algorithms_tour::pitfalls::{
    checked_range, copy_if_into, end_minus, first_copied_past_end, reversed_set, sorted_entries,
    sum_range,
};
use algorithms_tour::TourConfig;

fn main() -> Result<(), Box<dyn Error>> {
    let config = TourConfig::discover(std::env::args().skip(1))?;
    logger::init_with_level(config.log_level);

    banner("Out-of-Range Ranges");

    let values = vec![1, 2, 3, 4, 5];
    let k = 2;
    let m = values.len() + k;

    // `values[..values.len() - m]` would underflow, `values[m..]` would panic.
    match end_minus(values.len(), m) {
        Ok(end) => show("Head", &values[..end]),
        Err(err) => println!("end - {}: {}", m, err),
    }
    match sum_range(&values, m, values.len()) {
        Ok(sum) => println!("Sum: {}", sum),
        Err(err) => println!("sum from {}: {}", m, err),
    }
    match checked_range(&values, values.len(), 0) {
        Ok(slice) => show("Reversed bounds", slice),
        Err(err) => println!("end..begin: {}", err),
    }
    println!("Whole range sum: {}", sum_range(&values, 0, values.len())?);

    banner("Writing Through an Invalid Destination");

    let list: LinkedList<f64> = [-1.1, 2.231, -3.23, 4.01, -9.1, -89.1, 12.0, 8.28]
        .into_iter()
        .collect();
    // An empty Vec has no slots to write into; collect grows it instead.
    show("Negatives", negatives(&list));

    banner("Poor Container Choices");

    let set: BTreeSet<i32> = [2, 3, 5, 7, 9].into_iter().collect();
    // A BTreeSet owns its order, so there is no in-place reverse. Iterate backwards.
    show("Set reversed", reversed_set(&set));

    let map: HashMap<i32, i32> = [(1, 1), (2, 2), (3, 3)].into_iter().collect();
    // A HashMap has no order to sort. Copy the entries out first.
    let entries = sorted_entries(&map);
    show(
        "Map entries sorted",
        entries.iter().map(|(k, v)| format!("({}, {})", k, v)),
    );

    banner("Ignoring the Return Value");

    let numbers: Vec<i32> = (1..=10).collect();
    let mut odd = [0; 5];
    let written = copy_if_into(&numbers, &mut odd, |n| n % 2 != 0);
    show("Copied odds", &odd[..written]);
    match first_copied_past_end(&odd, written) {
        Some(value) => println!("Past the copied prefix: {}", value),
        None => println!("Nothing past the copied prefix (written = {})", written),
    }

    key_points(&[
        "Slicing out of bounds panics; use get() or check the range first",
        "Destinations must grow (collect, extend) or have room for every write",
        "Sets and maps control their own layout; copy out to reorder",
        "The count returned by a copy tells you which part of the buffer is valid",
    ]);

    Ok(())
}
