//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `RECITE_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;

use crate::align::WordAligner;
use crate::constants::{
    MIN_BLOCK_PAIRS, SIMILARITY_THRESHOLD, WORD_MATCH_THRESHOLD, validate_threshold,
};
use crate::extract::QaExtractor;
use crate::similarity::SimilarityGate;

/// Matching configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `RECITE_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum normalized edit distance for a word to count as matched. Default: `0.34`.
    pub word_match_threshold: f64,

    /// Jaccard score above which a regenerated text is rejected. Default: `0.45`.
    pub similarity_threshold: f64,

    /// Pairs the block extraction pass must find to be trusted. Default: `2`.
    pub min_block_pairs: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_match_threshold: WORD_MATCH_THRESHOLD,
            similarity_threshold: SIMILARITY_THRESHOLD,
            min_block_pairs: MIN_BLOCK_PAIRS,
        }
    }
}

impl Config {
    const ENV_WORD_MATCH_THRESHOLD: &'static str = "RECITE_WORD_MATCH_THRESHOLD";
    const ENV_SIMILARITY_THRESHOLD: &'static str = "RECITE_SIMILARITY_THRESHOLD";
    const ENV_MIN_BLOCK_PAIRS: &'static str = "RECITE_MIN_BLOCK_PAIRS";

    /// Loads configuration from environment variables (falling back to defaults).
    ///
    /// The result is validated before it is returned.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let word_match_threshold = Self::parse_threshold_from_env(
            Self::ENV_WORD_MATCH_THRESHOLD,
            "word match threshold",
            defaults.word_match_threshold,
        )?;
        let similarity_threshold = Self::parse_threshold_from_env(
            Self::ENV_SIMILARITY_THRESHOLD,
            "similarity threshold",
            defaults.similarity_threshold,
        )?;
        let min_block_pairs = Self::parse_min_pairs_from_env(defaults.min_block_pairs)?;

        let config = Self {
            word_match_threshold,
            similarity_threshold,
            min_block_pairs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks threshold ranges and the block pair minimum.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_threshold(self.word_match_threshold).map_err(|source| {
            ConfigError::InvalidThreshold {
                name: "word match threshold",
                source,
            }
        })?;

        validate_threshold(self.similarity_threshold).map_err(|source| {
            ConfigError::InvalidThreshold {
                name: "similarity threshold",
                source,
            }
        })?;

        if self.min_block_pairs == 0 {
            return Err(ConfigError::ZeroMinBlockPairs);
        }

        Ok(())
    }

    /// Aligner using the configured word threshold.
    ///
    /// # Panics
    ///
    /// If the threshold is out of range; call [`Config::validate`] first.
    pub fn word_aligner(&self) -> WordAligner {
        WordAligner::new(self.word_match_threshold)
    }

    /// Gate using the configured similarity threshold.
    ///
    /// # Panics
    ///
    /// If the threshold is out of range; call [`Config::validate`] first.
    pub fn similarity_gate(&self) -> SimilarityGate {
        SimilarityGate::new(self.similarity_threshold)
    }

    /// Default extraction cascade with the configured block minimum.
    pub fn qa_extractor(&self) -> QaExtractor {
        QaExtractor::with_min_block_pairs(self.min_block_pairs)
    }

    fn parse_threshold_from_env(
        var_name: &str,
        name: &'static str,
        default: f64,
    ) -> Result<f64, ConfigError> {
        match env::var(var_name) {
            Ok(value) => {
                value
                    .trim()
                    .parse()
                    .map_err(|e| ConfigError::ThresholdParseError {
                        name,
                        value: value.clone(),
                        source: e,
                    })
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_min_pairs_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_MIN_BLOCK_PAIRS) {
            Ok(value) => {
                let pairs: usize =
                    value
                        .trim()
                        .parse()
                        .map_err(|e| ConfigError::MinPairsParseError {
                            value: value.clone(),
                            source: e,
                        })?;

                if pairs == 0 {
                    return Err(ConfigError::ZeroMinBlockPairs);
                }

                Ok(pairs)
            }
            Err(_) => Ok(default),
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "word match threshold {}, similarity threshold {}, min block pairs {}",
            self.word_match_threshold, self.similarity_threshold, self.min_block_pairs
        )
    }
}
