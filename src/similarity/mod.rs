//! Near-duplicate detection via Jaccard similarity over word sets.
//!
//! The gate decides whether freshly generated text is too close to a reference (for
//! example an instructor's worked solution). Scores at or below the threshold pass; scores
//! above it mean the caller should regenerate. The regeneration itself happens outside
//! this crate.

pub mod types;


pub use types::SimilarityVerdict;

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::constants::SIMILARITY_THRESHOLD;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("non-word pattern"));

/// Lowercases, turns punctuation into spaces, and collects the distinct words.
pub fn word_set(s: &str) -> HashSet<String> {
    let lowered = s.to_lowercase();
    NON_WORD
        .replace_all(&lowered, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Jaccard similarity of the word sets of `a` and `b`, in `[0, 1]`.
///
/// Two empty inputs are identical (`1.0`); exactly one empty input scores `0.0`.
///
/// ```
/// use recite::similarity::jaccard_similarity;
///
/// assert_eq!(jaccard_similarity("a b c", "a b d"), 0.5);
/// assert_eq!(jaccard_similarity("", ""), 1.0);
/// ```
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let left = word_set(a);
    let right = word_set(b);

    match (left.is_empty(), right.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let intersection = left.intersection(&right).count();
    let union = left.len() + right.len() - intersection;
    intersection as f64 / union as f64
}

/// Threshold-carrying wrapper around [`jaccard_similarity`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityGate {
    threshold: f64,
}

impl Default for SimilarityGate {
    fn default() -> Self {
        Self {
            threshold: SIMILARITY_THRESHOLD,
        }
    }
}

impl SimilarityGate {
    pub fn new(threshold: f64) -> Self {
        Self::default().with_threshold(threshold)
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&threshold),
            "threshold must be between 0.0 and 1.0"
        );
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn evaluate(&self, reference: &str, candidate: &str) -> SimilarityVerdict {
        let score = jaccard_similarity(reference, candidate);
        let verdict = SimilarityVerdict::new(score, self.threshold);

        if verdict.regenerate {
            info!(
                score = score,
                threshold = self.threshold,
                "Candidate too similar to reference - regenerate"
            );
        } else {
            debug!(
                score = score,
                threshold = self.threshold,
                "Candidate sufficiently different"
            );
        }

        verdict
    }

    /// `true` when the score is strictly above the threshold.
    pub fn is_too_similar(&self, reference: &str, candidate: &str) -> bool {
        jaccard_similarity(reference, candidate) > self.threshold
    }
}
