//! Pattern 2: Elementary Algorithms
//! Example: for_each, find_if, transform, copy_if, accumulate
//!
//! Run with: cargo run --bin p2_elementary

use std::collections::LinkedList;
use std::error::Error;

use algorithms_tour::display::{banner, key_points, show};
use algorithms_tour::elementary::{
    assess_earnings, evens, evens_from_middle, exponentiate, first_greater, negatives,
    EarningsOutcome,
};
use algorithms_tour::logger;
use algorithms_tour::TourConfig;

fn main() -> Result<(), Box<dyn Error>> {
    let config = TourConfig::discover(std::env::args().skip(1))?;
    logger::init_with_level(config.log_level);

    banner("for_each");

    let numbers = vec![1, 2, 3, 4, 6, 7, 8, 9, 10];
    show("All evens", evens(&numbers));
    show("Half evens", evens_from_middle(&numbers));

    banner("find_if");

    let list: LinkedList<f64> = [-0.01, 2.91, 5.9, 8.71, 8.91, 8.99, 10.45]
        .into_iter()
        .collect();
    let target = 8.9;
    match first_greater(&list, target) {
        Some(found) => println!("First element greater than {}: {}", target, found),
        None => println!("Element not found!"),
    }

    banner("transform");

    let mut values = [3.4, 2.5, 9.0, 8.0, 12.01];
    exponentiate(&mut values);
    show("Exponentiated values", values);

    banner("copy_if");

    let list: LinkedList<f64> = [-1.1, 2.231, -3.23, 4.01, -9.1, -89.1, 12.0, 8.28]
        .into_iter()
        .collect();
    show("List", &list);
    show("Negatives", negatives(&list));

    banner("accumulate");

    let initial_earnings = 5123.98;
    let week = [10.3, -12.01, -8.9, 5.1, -7.8, 12.0, 1.1];
    match assess_earnings(initial_earnings, &week) {
        EarningsOutcome::Profit(total) => println!("Good job! Earnings now {:.2}", total),
        EarningsOutcome::Loss(total) => println!("We had losses! Earnings now {:.2}", total),
    }

    key_points(&[
        "Closures replace function objects as algorithm policies",
        "for_each and filter compose; prefer collecting over printing inside",
        "find returns Option, so a missing element is explicit",
        "iter_mut().for_each transforms in place",
        "fold carries an initial value like accumulate",
    ]);

    Ok(())
}
