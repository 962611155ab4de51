//! Problem 2: Basic and Order Statistics over a Price Series
//! Solution with iterator adaptors and selection algorithms
//!
//! Run with: cargo run --bin p5_prices_std [config.toml]

use std::error::Error;

use algorithms_tour::display::{banner, key_points};
use algorithms_tour::logger;
use algorithms_tour::prices::{std_algos, PriceSeries};
use algorithms_tour::TourConfig;

fn main() -> Result<(), Box<dyn Error>> {
    let config = TourConfig::discover(std::env::args().skip(1))?;
    logger::init_with_level(config.log_level);

    let series = PriceSeries::load(config.prices.source.as_deref())?;
    let stats = std_algos::compute(&series, config.prices.top_peaks)?;

    banner("Price Statistics: Iterator Adaptors");
    print!("{}", stats.render(&series));

    key_points(&[
        "sum() and fold() replace accumulate and the hand-written loops",
        "select_nth_unstable_by finds the median in O(n) without a full sort",
        "max_by/min_by need a total order for f64; total_cmp provides one",
        "Selecting the top k first means only k values get sorted",
    ]);

    Ok(())
}
