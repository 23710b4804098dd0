use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Outcome of a similarity-gate check.
pub struct SimilarityVerdict {
    /// Jaccard score in `[0, 1]`.
    pub score: f64,
    /// Threshold the score was compared against.
    pub threshold: f64,
    /// `score > threshold`: the candidate should be regenerated.
    pub regenerate: bool,
}

impl SimilarityVerdict {
    pub fn new(score: f64, threshold: f64) -> Self {
        Self {
            score,
            threshold,
            regenerate: score > threshold,
        }
    }

    /// Returns `true` if the candidate passed the gate.
    pub fn is_distinct(&self) -> bool {
        !self.regenerate
    }

    /// Returns a short debug string.
    pub fn debug_status(&self) -> &'static str {
        if self.regenerate {
            "TOO_SIMILAR"
        } else {
            "DISTINCT"
        }
    }
}

impl std::fmt::Display for SimilarityVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (score: {:.4}, threshold: {:.2})",
            self.debug_status(),
            self.score,
            self.threshold
        )
    }
}
