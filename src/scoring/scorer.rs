use tracing::debug;

use crate::align::AlignmentResult;
use crate::constants::{
    FLUENCY_OFFSET, FLUENCY_SLOPE, FLUENCY_WEIGHT, PRONUNCIATION_OFFSET, PRONUNCIATION_SLOPE,
    PRONUNCIATION_WEIGHT, RELEVANCE_WEIGHT, SCORE_MAX, SCORE_MIN, WORD_MATCH_WEIGHT,
};

use super::types::ScoreBreakdown;

fn clamp_score(value: i64) -> i64 {
    value.clamp(SCORE_MIN, SCORE_MAX)
}

fn round_clamped(value: f64) -> i64 {
    clamp_score(value.round() as i64)
}

/// Combines a word-match percent with an externally judged relevance score.
///
/// Inputs outside `[0, 100]` are clamped first.
///
/// ```
/// use recite::scoring::compute_score;
///
/// let score = compute_score(80, 0);
/// assert_eq!(score.pronunciation, 82);
/// assert_eq!(score.fluency, 80);
/// assert_eq!(score.final_score, 72);
/// ```
pub fn compute_score(word_match_percent: i64, relevance_score: i64) -> ScoreBreakdown {
    let word_match = clamp_score(word_match_percent);
    let relevance = clamp_score(relevance_score);
    let wm = word_match as f64;

    let pronunciation = round_clamped(wm * PRONUNCIATION_SLOPE + PRONUNCIATION_OFFSET);
    let fluency = round_clamped(wm * FLUENCY_SLOPE + FLUENCY_OFFSET);

    let final_score = round_clamped(
        WORD_MATCH_WEIGHT * wm
            + PRONUNCIATION_WEIGHT * pronunciation as f64
            + FLUENCY_WEIGHT * fluency as f64
            + RELEVANCE_WEIGHT * relevance as f64,
    );

    debug!(
        word_match,
        pronunciation, fluency, relevance, final_score, "Computed score breakdown"
    );

    ScoreBreakdown {
        word_match: word_match as u8,
        pronunciation: pronunciation as u8,
        fluency: fluency as u8,
        relevance: relevance as u8,
        final_score: final_score as u8,
    }
}

/// [`compute_score`] fed from an alignment result.
pub fn score_alignment(alignment: &AlignmentResult, relevance_score: i64) -> ScoreBreakdown {
    compute_score(i64::from(alignment.word_match_percent), relevance_score)
}
