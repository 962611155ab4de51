//! Problem 2: descriptive statistics over a day of stock prices.
//!
//! Computed twice over the same [`PriceSeries`]. [`native`] walks the prices
//! with explicit loops and sorts them with the hand-written quicksort;
//! [`std_algos`] leans on iterator adaptors and `select_nth_unstable_by`.
//!
//! Definitions shared by both:
//! - average: arithmetic mean
//! - variance: unbiased, divided by `n - 1`
//! - median: lower median, `sorted[(n - 1) / 2]`
//! - range: `|max - min|`
//! - peaks: the `k` highest prices, highest first (all of them when `n < k`)

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AlgoError, LoadError};

// =============================================================================
// Price series
// =============================================================================

/// One quote of the trading day.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PricePoint {
    pub time: String,
    pub price: f64,
}

impl PricePoint {
    pub fn new(time: impl Into<String>, price: f64) -> Self {
        Self {
            time: time.into(),
            price,
        }
    }
}

/// Non-empty, time-ordered quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Rejects an empty series and NaN or infinite prices, which have no
    /// place in an ordering of the day.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, AlgoError> {
        if points.is_empty() {
            return Err(AlgoError::EmptyInput("price series"));
        }
        let bad = points.iter().position(|point| !point.price.is_finite());
        if let Some(index) = bad {
            return Err(AlgoError::NotFinite {
                index,
                value: points[index].price,
            });
        }
        Ok(Self { points })
    }

    /// Half-hourly quotes of one session, 09:30AM to 04:00PM.
    pub fn session() -> Self {
        let quotes = [
            ("09:30AM", 23.29),
            ("10:00AM", 22.11),
            ("10:30AM", 23.42),
            ("11:00AM", 23.64),
            ("11:30AM", 22.95),
            ("12:00PM", 22.81),
            ("12:30PM", 22.98),
            ("01:00PM", 24.65),
            ("01:30PM", 25.10),
            ("02:00PM", 25.12),
            ("02:30PM", 25.96),
            ("03:00PM", 24.98),
            ("03:30PM", 24.65),
            ("04:00PM", 23.45),
        ];
        Self {
            points: quotes
                .iter()
                .map(|&(time, price)| PricePoint::new(time, price))
                .collect(),
        }
    }

    /// Reads `time,price` rows after a header line. A non-finite price is
    /// reported with the file line it sits on.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let headers = reader.headers()?.clone();
        let mut points = Vec::new();
        let mut lines = Vec::new();

        for result in reader.records() {
            let record = result?;
            let point: PricePoint = record.deserialize(Some(&headers))?;
            lines.push(record.position().map_or(0, |pos| pos.line()));
            points.push(point);
        }

        debug!(points = points.len(), "loaded price series");
        Self::new(points).map_err(|err| match err {
            AlgoError::NotFinite { index, value } => LoadError::InvalidPrice {
                line: lines.get(index).copied().unwrap_or_default(),
                value: value.to_string(),
            },
            other => LoadError::Algo(other),
        })
    }

    pub fn from_csv_path(path: &Path) -> Result<Self, LoadError> {
        Self::from_csv_reader(File::open(path)?)
    }

    /// The CSV at `source`, or the built-in session.
    pub fn load(source: Option<&Path>) -> Result<Self, LoadError> {
        match source {
            Some(path) => Self::from_csv_path(path),
            None => Ok(Self::session()),
        }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn open(&self) -> f64 {
        self.points[0].price
    }

    pub fn close(&self) -> f64 {
        self.points[self.points.len() - 1].price
    }
}

// =============================================================================
// Statistics
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PriceStats {
    pub open: f64,
    pub close: f64,
    pub average: f64,
    pub variance: f64,
    pub median: f64,
    pub max: f64,
    pub min: f64,
    pub range: f64,
    pub peaks: Vec<f64>,
}

impl PriceStats {
    /// Console report: the quotes, then the statistics.
    pub fn render(&self, series: &PriceSeries) -> String {
        let mut out = String::from("Daily prices: [$]\n\n");
        for point in series.points() {
            out.push_str(&format!("{}\t{}\n", point.time, point.price));
        }
        out.push_str(&format!(
            "\nOpen: {} [$]\nClose: {} [$]\n\n",
            self.open, self.close
        ));
        out.push_str(&format!(
            "Average price: {:.4} [$]\nVariance: {:.4}\nMedian price: {} [$]\n\n",
            self.average, self.variance, self.median
        ));
        out.push_str(&format!(
            "Max price: {} [$]\nMin price: {} [$]\nPrice range: {:.2} [$]\n\n",
            self.max, self.min, self.range
        ));
        out.push_str(&format!(
            "Top {} price peaks: [$]\t{}\n",
            self.peaks.len(),
            crate::display::joined(&self.peaks, "\t")
        ));
        out
    }
}

fn require_two(series: &PriceSeries) -> Result<usize, AlgoError> {
    match series.len() {
        n if n >= 2 => Ok(n),
        got => Err(AlgoError::TooFewValues { needed: 2, got }),
    }
}

/// Explicit loops and the hand-written quicksort.
pub mod native {
    use super::{require_two, PriceSeries, PriceStats};
    use crate::error::AlgoError;
    use crate::quicksort::{quicksort_with, PivotStrategy};

    pub fn compute(series: &PriceSeries, top_peaks: usize, pivot: PivotStrategy) -> Result<PriceStats, AlgoError> {
        let n = require_two(series)?;

        let mut prices = Vec::with_capacity(n);
        for point in series.points() {
            prices.push(point.price);
        }

        let mut total = 0.0;
        for &price in &prices {
            total += price;
        }
        let average = total / n as f64;

        // Sorted in place; everything below reads the sorted order.
        quicksort_with(&mut prices, pivot);
        let median = prices[(n - 1) / 2];

        let mut max = prices[0];
        for &price in &prices[1..] {
            if price > max {
                max = price;
            }
        }

        let mut min = prices[0];
        for &price in &prices[1..] {
            if price < min {
                min = price;
            }
        }

        let mut peaks = Vec::with_capacity(top_peaks.min(n));
        for i in 0..top_peaks.min(n) {
            peaks.push(prices[n - 1 - i]);
        }

        let mut squares = 0.0;
        for &price in &prices {
            squares += (price - average).powi(2);
        }
        let variance = squares / (n - 1) as f64;

        Ok(PriceStats {
            open: series.open(),
            close: series.close(),
            average,
            variance,
            median,
            max,
            min,
            range: (max - min).abs(),
            peaks,
        })
    }
}

/// Iterator adaptors and selection algorithms.
pub mod std_algos {
    use super::{require_two, PriceSeries, PriceStats};
    use crate::error::AlgoError;

    pub fn compute(series: &PriceSeries, top_peaks: usize) -> Result<PriceStats, AlgoError> {
        let n = require_two(series)?;
        let mut prices: Vec<f64> = series.points().iter().map(|point| point.price).collect();

        let average = prices.iter().sum::<f64>() / n as f64;

        let (_, median, _) = prices.select_nth_unstable_by((n - 1) / 2, f64::total_cmp);
        let median = *median;

        let max = prices
            .iter()
            .copied()
            .max_by(f64::total_cmp)
            .ok_or(AlgoError::EmptyInput("prices"))?;
        let min = prices
            .iter()
            .copied()
            .min_by(f64::total_cmp)
            .ok_or(AlgoError::EmptyInput("prices"))?;

        // Highest `k` to the front in any order, then order just those.
        let k = top_peaks.min(n);
        if k > 0 && k < n {
            prices.select_nth_unstable_by(k - 1, |a, b| b.total_cmp(a));
        }
        let mut peaks = prices[..k].to_vec();
        peaks.sort_unstable_by(|a, b| b.total_cmp(a));

        let variance = prices
            .iter()
            .fold(0.0, |acc, price| acc + (price - average).powi(2))
            / (n - 1) as f64;

        Ok(PriceStats {
            open: series.open(),
            close: series.close(),
            average,
            variance,
            median,
            max,
            min,
            range: (max - min).abs(),
            peaks,
        })
    }
}
