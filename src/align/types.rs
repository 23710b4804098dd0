use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One expected word and the spoken word (if any) it was paired with.
pub struct AlignedWord {
    /// 0-based position in the expected sequence.
    pub index: usize,
    /// Expected token.
    pub expected: String,
    /// Spoken token; empty when nothing was consumed for this word.
    pub spoken: String,
    /// Whether the normalized distance was within the match threshold.
    pub matched: bool,
    /// Edit distance over expected length, capped at `1.0`.
    pub normalized_distance: f64,
    /// `round((1 - distance) * 100)`, floored at `0`. Positional matches report `100`.
    pub confidence: u8,
    /// Practice hint for unmatched words.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl AlignedWord {
    pub fn matched(index: usize, expected: &str, spoken: &str, distance: f64) -> Self {
        Self {
            index,
            expected: expected.to_string(),
            spoken: spoken.to_string(),
            matched: true,
            normalized_distance: distance.min(1.0),
            confidence: confidence_for(distance),
            suggestion: None,
        }
    }

    /// Unmatched word. `best_distance` is the closest rejected candidate, if any.
    pub fn unmatched(index: usize, expected: &str, spoken: &str, best_distance: Option<f64>) -> Self {
        let distance = best_distance.unwrap_or(1.0);
        Self {
            index,
            expected: expected.to_string(),
            spoken: spoken.to_string(),
            matched: false,
            normalized_distance: distance.min(1.0),
            confidence: confidence_for(distance),
            suggestion: Some(format!("Try saying: {}", expected)),
        }
    }
}

fn confidence_for(distance: f64) -> u8 {
    ((1.0 - distance) * 100.0).round().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Word-level comparison of a spoken (or written) answer against a reference.
pub struct AlignmentResult {
    /// `round(matched / max(1, expected) * 100)`.
    pub word_match_percent: u8,
    /// One entry per expected token, in order.
    pub words: Vec<AlignedWord>,
}

impl AlignmentResult {
    pub fn from_words(words: Vec<AlignedWord>) -> Self {
        let matched = words.iter().filter(|w| w.matched).count();
        let percent = (matched as f64 / words.len().max(1) as f64 * 100.0).round();
        Self {
            word_match_percent: percent as u8,
            words,
        }
    }

    pub fn matched_count(&self) -> usize {
        self.words.iter().filter(|w| w.matched).count()
    }

    pub fn expected_count(&self) -> usize {
        self.words.len()
    }

    /// Expected words that were not matched, in order.
    pub fn missed_words(&self) -> impl Iterator<Item = &AlignedWord> {
        self.words.iter().filter(|w| !w.matched)
    }

    /// Short human-readable summary, e.g. `"3 of 4 words OK"`.
    pub fn summary(&self) -> String {
        format!(
            "{} of {} words OK",
            self.matched_count(),
            self.expected_count()
        )
    }
}
