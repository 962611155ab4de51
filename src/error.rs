use thiserror::Error;

// =============================================================================
// Algorithm errors
// =============================================================================

/// Failures of the in-memory algorithms. Index values keep the caller's
/// signed form so a negative `lo` is reported as given.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgoError {
    #[error("index {index} is out of range for a sequence of length {len}")]
    OutOfRange { index: isize, len: usize },

    #[error("invalid range: lo ({lo}) is greater than hi ({hi})")]
    InvalidRange { lo: usize, hi: usize },

    #[error("range {start}..{end} is out of bounds for a sequence of length {len}")]
    SliceOutOfBounds { start: usize, end: usize, len: usize },

    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    #[error("need at least {needed} values, got {got}")]
    TooFewValues { needed: usize, got: usize },

    #[error("value {value} at position {index} is not a finite number")]
    NotFinite { index: usize, value: f64 },
}

impl AlgoError {
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange {
            index: isize::try_from(index).unwrap_or(isize::MAX),
            len,
        }
    }
}

// =============================================================================
// Loading errors
// =============================================================================

/// Failures while reading configuration or price data.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid value for config field '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Invalid price on line {line}: {value}")]
    InvalidPrice { line: u64, value: String },

    #[error(transparent)]
    Algo(#[from] AlgoError),
}

impl LoadError {
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
