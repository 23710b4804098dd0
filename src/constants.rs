//! Cross-cutting, shared constants.
//!
//! Thresholds and weights here are part of the output contract: callers and tests
//! reference the same values, so change them only together with every consumer.
//!
//! # Score Invariants
//!
//! Sub-metrics are rounded and clamped to [`SCORE_MIN`]..=[`SCORE_MAX`] before they are
//! combined with the `*_WEIGHT` constants. The four weights sum to `1.0`.

/// Maximum normalized edit distance at which an expected word counts as matched.
pub const WORD_MATCH_THRESHOLD: f64 = 0.34;

/// Jaccard score above which generated text is "too similar" and should be regenerated.
pub const SIMILARITY_THRESHOLD: f64 = 0.45;

pub const SCORE_MIN: i64 = 0;
pub const SCORE_MAX: i64 = 100;

pub const WORD_MATCH_WEIGHT: f64 = 0.55;
pub const PRONUNCIATION_WEIGHT: f64 = 0.20;
pub const FLUENCY_WEIGHT: f64 = 0.15;
pub const RELEVANCE_WEIGHT: f64 = 0.10;

/// `pronunciation = word_match * PRONUNCIATION_SLOPE + PRONUNCIATION_OFFSET`.
pub const PRONUNCIATION_SLOPE: f64 = 0.90;
pub const PRONUNCIATION_OFFSET: f64 = 10.0;

/// `fluency = word_match * FLUENCY_SLOPE + FLUENCY_OFFSET`.
pub const FLUENCY_SLOPE: f64 = 0.85;
pub const FLUENCY_OFFSET: f64 = 12.0;

/// The block pass is trusted only when it finds at least this many pairs.
pub const MIN_BLOCK_PAIRS: usize = 2;

/// The line-by-line pass is accepted with this many pairs or more.
pub const MIN_LINE_PAIRS: usize = 1;

/// Emergency pairing runs when the cascade produced at most this many pairs.
pub const MAX_RESCUE_PAIRS: usize = 1;

/// Emergency pairing is accepted with this many pairs or more.
pub const MIN_RESCUE_PAIRS: usize = 1;

pub const BLOCK_CONFIDENCE: f32 = 0.9;
pub const LINE_CONFIDENCE: f32 = 0.6;
pub const RESCUE_CONFIDENCE: f32 = 0.3;

/// Sentence-based pairs generated when extraction finds nothing.
pub const DEFAULT_MAX_GENERATED_PAIRS: usize = 6;

/// Sentences shorter than this (in chars) become `Explain:` prompts, longer ones `Summarize:`.
pub const EXPLAIN_MAX_CHARS: usize = 60;

pub const SUMMARY_PREVIEW_CHARS: usize = 80;

/// Answer length of the whole-passage pair used when no sentence survives.
pub const PASSAGE_ANSWER_CHARS: usize = 400;

/// Validates that a ratio-style threshold lies in `[0, 1]`.
///
/// Use this at configuration boundaries; the pure matching functions assume a valid value.
///
/// # Example
///
/// ```
/// use recite::constants::{validate_threshold, WORD_MATCH_THRESHOLD};
///
/// validate_threshold(WORD_MATCH_THRESHOLD).unwrap();
/// assert!(validate_threshold(1.5).is_err());
/// ```
pub fn validate_threshold(value: f64) -> Result<(), ThresholdError> {
    if value.is_nan() {
        return Err(ThresholdError::NotANumber);
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(ThresholdError::OutOfRange { value });
    }
    Ok(())
}

/// Error returned when threshold validation fails.
#[derive(Debug, Clone, PartialEq)]
pub enum ThresholdError {
    /// Threshold was NaN.
    NotANumber,
    /// Threshold lies outside `[0, 1]`.
    OutOfRange { value: f64 },
}

impl std::fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber => write!(f, "threshold must be a number"),
            Self::OutOfRange { value } => {
                write!(f, "threshold {} is outside [0, 1]", value)
            }
        }
    }
}

impl std::error::Error for ThresholdError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let total = WORD_MATCH_WEIGHT + PRONUNCIATION_WEIGHT + FLUENCY_WEIGHT + RELEVANCE_WEIGHT;
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_values() {
        assert_eq!(WORD_MATCH_THRESHOLD, 0.34);
        assert_eq!(SIMILARITY_THRESHOLD, 0.45);
    }

    #[test]
    fn test_cascade_minimums() {
        assert_eq!(MIN_BLOCK_PAIRS, 2);
        assert_eq!(MIN_LINE_PAIRS, 1);
        assert_eq!(MAX_RESCUE_PAIRS, 1);
        assert_eq!(MIN_RESCUE_PAIRS, 1);
    }

    #[test]
    fn test_validate_threshold_accepts_bounds() {
        assert!(validate_threshold(0.0).is_ok());
        assert!(validate_threshold(1.0).is_ok());
        assert!(validate_threshold(SIMILARITY_THRESHOLD).is_ok());
    }

    #[test]
    fn test_validate_threshold_rejects_out_of_range() {
        assert_eq!(
            validate_threshold(-0.1),
            Err(ThresholdError::OutOfRange { value: -0.1 })
        );
        assert_eq!(
            validate_threshold(1.01),
            Err(ThresholdError::OutOfRange { value: 1.01 })
        );
    }

    #[test]
    fn test_validate_threshold_rejects_nan() {
        assert_eq!(validate_threshold(f64::NAN), Err(ThresholdError::NotANumber));
    }
}
