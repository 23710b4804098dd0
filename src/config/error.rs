//! Configuration error types.

use thiserror::Error;

use crate::constants::ThresholdError;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Threshold string could not be parsed as a number.
    #[error("failed to parse {name} '{value}': {source}")]
    ThresholdParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Threshold parsed but lies outside `[0, 1]` (or is NaN).
    #[error("invalid {name}: {source}")]
    InvalidThreshold {
        name: &'static str,
        #[source]
        source: ThresholdError,
    },

    /// Pair count string could not be parsed as a number.
    #[error("failed to parse min block pairs '{value}': {source}")]
    MinPairsParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// The block pass needs at least one pair to be trusted.
    #[error("min block pairs must be at least 1")]
    ZeroMinBlockPairs,
}
