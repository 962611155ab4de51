use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::logger::LogLevel;
use crate::quicksort::PivotStrategy;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "ALGORITHMS_TOUR_CONFIG";

/// Config file picked up from the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "algorithms-tour.toml";

// =============================================================================
// Config sections
// =============================================================================

/// Settings shared by every tour program.
///
/// ```toml
/// log_level = "debug"
/// seed = 42
///
/// [letters]
/// count = 20
///
/// [prices]
/// source = "prices.csv"
/// top_peaks = 5
///
/// [sort]
/// pivot = "median-of-three"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourConfig {
    pub log_level: LogLevel,
    /// Seed for the random generators; fresh entropy when absent.
    pub seed: Option<u64>,
    pub letters: LettersConfig,
    pub prices: PricesConfig,
    pub sort: SortConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LettersConfig {
    pub count: usize,
}

impl Default for LettersConfig {
    fn default() -> Self {
        Self { count: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricesConfig {
    /// CSV file with a `time,price` header. The built-in session is used when
    /// absent.
    pub source: Option<PathBuf>,
    pub top_peaks: usize,
}

impl Default for PricesConfig {
    fn default() -> Self {
        Self {
            source: None,
            top_peaks: 5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortConfig {
    pub pivot: PivotStrategy,
}

// =============================================================================
// Loading
// =============================================================================

impl TourConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        let config: TourConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Picks the config file from the first program argument, then
    /// `ALGORITHMS_TOUR_CONFIG`, then `algorithms-tour.toml` in the working
    /// directory. Falls back to defaults when none of them exist.
    pub fn discover<I>(mut args: I) -> Result<Self, LoadError>
    where
        I: Iterator<Item = String>,
    {
        let explicit = args
            .next()
            .or_else(|| std::env::var(CONFIG_ENV).ok())
            .map(PathBuf::from);

        match explicit {
            Some(path) => Self::from_path(&path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_path(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), LoadError> {
        if self.letters.count == 0 {
            return Err(LoadError::invalid_config(
                "letters.count",
                "must be greater than zero",
            ));
        }
        if self.prices.top_peaks == 0 {
            return Err(LoadError::invalid_config(
                "prices.top_peaks",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = TourConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.seed, None);
        assert_eq!(config.letters.count, 10);
        assert_eq!(config.prices.top_peaks, 5);
        assert_eq!(config.sort.pivot, PivotStrategy::Last);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(TourConfig::from_toml_str("").unwrap(), TourConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let content = r#"
            log_level = "debug"
            seed = 42

            [letters]
            count = 20

            [prices]
            source = "prices.csv"
            top_peaks = 3

            [sort]
            pivot = "median-of-three"
        "#;
        let config = TourConfig::from_toml_str(content).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.letters.count, 20);
        assert_eq!(config.prices.source, Some(PathBuf::from("prices.csv")));
        assert_eq!(config.prices.top_peaks, 3);
        assert_eq!(config.sort.pivot, PivotStrategy::MedianOfThree);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = TourConfig::from_toml_str("[prices]\ntop_peaks = 2\n").unwrap();
        assert_eq!(config.prices.top_peaks, 2);
        assert_eq!(config.prices.source, None);
        assert_eq!(config.letters.count, 10);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = TourConfig::from_toml_str("colour = true\n");
        assert!(matches!(result, Err(LoadError::Toml(_))));
    }

    #[test]
    fn test_zero_count_rejected() {
        let result = TourConfig::from_toml_str("[letters]\ncount = 0\n");
        assert!(matches!(
            result,
            Err(LoadError::InvalidConfig { field: "letters.count", .. })
        ));
    }

    #[test]
    fn test_zero_peaks_rejected() {
        let result = TourConfig::from_toml_str("[prices]\ntop_peaks = 0\n");
        assert!(matches!(
            result,
            Err(LoadError::InvalidConfig { field: "prices.top_peaks", .. })
        ));
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "seed = 7").unwrap();
        let config = TourConfig::from_path(file.path()).unwrap();
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_discover_uses_first_argument() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[letters]\ncount = 3").unwrap();
        let args = vec![file.path().display().to_string()];
        let config = TourConfig::discover(args.into_iter()).unwrap();
        assert_eq!(config.letters.count, 3);
    }

    #[test]
    fn test_discover_missing_file_is_io_error() {
        let args = vec!["/definitely/not/here.toml".to_string()];
        let result = TourConfig::discover(args.into_iter());
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
