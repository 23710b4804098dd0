use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A question/answer pair recovered from unstructured text.
pub struct QaPair {
    /// 1-based position among the pairs returned by one extraction call.
    pub id: usize,
    /// Cleaned single-line question.
    pub question: String,
    /// Cleaned answer; may span several lines.
    pub answer: String,
}

impl QaPair {
    pub fn new(id: usize, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Sanitized `(question, answer)` pairs from one strategy, with its confidence.
pub struct StrategyOutcome {
    pub pairs: Vec<(String, String)>,
    pub confidence: f32,
}

impl StrategyOutcome {
    pub fn new(pairs: Vec<(String, String)>, confidence: f32) -> Self {
        Self { pairs, confidence }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Numbers the pairs `1..=N` in order.
    pub fn into_qa_pairs(self) -> Vec<QaPair> {
        self.pairs
            .into_iter()
            .enumerate()
            .map(|(i, (question, answer))| QaPair::new(i + 1, question, answer))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Which strategy produced an extraction result.
pub struct ExtractionReport {
    /// Strategy name (`"block"`, `"line"`, `"rescue"`, or `"none"`).
    pub strategy: String,
    /// Confidence of that strategy; `0.0` when nothing was found.
    pub confidence: f32,
    /// Number of pairs returned.
    pub pair_count: usize,
}
