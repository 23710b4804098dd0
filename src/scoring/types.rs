use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Per-metric scores, each in `[0, 100]`.
pub struct ScoreBreakdown {
    /// Word-match percent the other metrics derive from.
    pub word_match: u8,
    /// Derived pronunciation estimate.
    pub pronunciation: u8,
    /// Derived fluency estimate.
    pub fluency: u8,
    /// Externally judged relevance.
    pub relevance: u8,
    /// Weighted combination.
    #[serde(rename = "final")]
    pub final_score: u8,
}

impl ScoreBreakdown {
    /// Returns `true` when the final score reaches `pass_mark`.
    pub fn passes(&self, pass_mark: u8) -> bool {
        self.final_score >= pass_mark
    }
}

impl std::fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "final {} (word match {}, pronunciation {}, fluency {}, relevance {})",
            self.final_score, self.word_match, self.pronunciation, self.fluency, self.relevance
        )
    }
}
