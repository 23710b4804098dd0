//! Individual extraction strategies.
//!
//! Each strategy is pure and returns already-sanitized pairs. The cascade in
//! [`QaExtractor`](super::QaExtractor) decides which result to keep.

use crate::constants::{
    BLOCK_CONFIDENCE, LINE_CONFIDENCE, MIN_BLOCK_PAIRS, MIN_LINE_PAIRS, MIN_RESCUE_PAIRS,
    RESCUE_CONFIDENCE,
};
use crate::normalize::{clean_block, clean_line};

use super::patterns::{
    ANSWER_LINE, BLOCK_QUESTION, BLOCK_TERMINATOR, QUESTION_HEADER, RESCUE_ANSWER, SAME_LINE,
    ends_like_question, is_line_boundary,
};
use super::types::StrategyOutcome;

/// One way of reading question/answer pairs out of text.
pub trait ExtractionStrategy: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &'static str;

    /// Minimum pair count for the cascade to accept this strategy's result.
    fn min_pairs(&self) -> usize;

    fn extract(&self, text: &str) -> StrategyOutcome;
}

/// `clean_line` the question, `clean_block` the answer; `None` if either ends up empty.
pub fn sanitize_pair(question: &str, answer: &str) -> Option<(String, String)> {
    let question = clean_line(question);
    let answer = clean_block(answer);
    if question.is_empty() || answer.is_empty() {
        return None;
    }
    Some((question, answer))
}

/// Scans the whole block for `question? <marker> answer...` spans.
///
/// The answer runs until the next line that opens with an ordinal, `Q:`, `Ans:`, or `A:`,
/// or that starts another question followed by a marker, or to the end of the text.
#[derive(Debug, Clone)]
pub struct BlockStrategy {
    min_pairs: usize,
}

impl Default for BlockStrategy {
    fn default() -> Self {
        Self {
            min_pairs: MIN_BLOCK_PAIRS,
        }
    }
}

impl BlockStrategy {
    pub fn with_min_pairs(min_pairs: usize) -> Self {
        Self { min_pairs }
    }
}

impl ExtractionStrategy for BlockStrategy {
    fn name(&self) -> &'static str {
        "block"
    }

    fn min_pairs(&self) -> usize {
        self.min_pairs
    }

    fn extract(&self, text: &str) -> StrategyOutcome {
        let mut pairs = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            let Some(caps) = BLOCK_QUESTION.captures_at(text, pos) else {
                break;
            };
            let (Some(whole), Some(question)) = (caps.get(0), caps.name("question")) else {
                break;
            };

            let answer_start = whole.end();
            let answer_end = BLOCK_TERMINATOR
                .find_at(text, answer_start)
                .map_or(text.len(), |m| m.start());

            if let Some(pair) = sanitize_pair(question.as_str(), &text[answer_start..answer_end]) {
                pairs.push(pair);
            }

            pos = answer_end.max(answer_start);
        }

        StrategyOutcome::new(pairs, BLOCK_CONFIDENCE)
    }
}

/// Walks trimmed lines: same-line pairs first, then a question header followed by an
/// answer-marker line and its continuation lines.
#[derive(Debug, Clone, Default)]
pub struct LineStrategy;

impl ExtractionStrategy for LineStrategy {
    fn name(&self) -> &'static str {
        "line"
    }

    fn min_pairs(&self) -> usize {
        MIN_LINE_PAIRS
    }

    fn extract(&self, text: &str) -> StrategyOutcome {
        let lines: Vec<&str> = text
            .split('\n')
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let mut pairs = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];

            if let Some(caps) = SAME_LINE.captures(line) {
                if let Some(pair) = sanitize_pair(&caps["question"], &caps["answer"]) {
                    pairs.push(pair);
                }
                i += 1;
                continue;
            }

            if let Some(header) = QUESTION_HEADER.captures(line)
                && let Some((answer, next)) = collect_answer(&lines, i + 1)
            {
                if let Some(pair) = sanitize_pair(&header["question"], &answer) {
                    pairs.push(pair);
                }
                i = next;
                continue;
            }

            i += 1;
        }

        StrategyOutcome::new(pairs, LINE_CONFIDENCE)
    }
}

/// Reads an answer-marker line at `start` plus its continuation lines.
///
/// Returns the joined answer and the index of the first line after it.
fn collect_answer(lines: &[&str], start: usize) -> Option<(String, usize)> {
    let first = ANSWER_LINE.captures(lines.get(start)?)?;
    let mut parts = vec![first["answer"].trim().to_string()];
    let mut j = start + 1;

    while let Some(line) = lines.get(j)
        && !is_line_boundary(line)
    {
        parts.push(line.to_string());
        j += 1;
    }

    Some((parts.join("\n"), j))
}

/// Last-resort pairing over the raw text: every `Ans...` line is paired with the most
/// recent line ending in `?` or `:`.
#[derive(Debug, Clone, Default)]
pub struct RescueStrategy;

impl ExtractionStrategy for RescueStrategy {
    fn name(&self) -> &'static str {
        "rescue"
    }

    fn min_pairs(&self) -> usize {
        MIN_RESCUE_PAIRS
    }

    fn extract(&self, text: &str) -> StrategyOutcome {
        let mut pairs = Vec::new();
        let mut pending: Option<&str> = None;

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if ends_like_question(line) {
                pending = Some(line);
                continue;
            }
            if let Some(caps) = RESCUE_ANSWER.captures(line)
                && let Some(question) = pending.take()
                && let Some(pair) = sanitize_pair(question, &caps["answer"])
            {
                pairs.push(pair);
            }
        }

        StrategyOutcome::new(pairs, RESCUE_CONFIDENCE)
    }
}

/// The emergency pass applies only when the raw text mentions "ans" somewhere.
pub fn has_answer_hint(raw: &str) -> bool {
    raw.to_lowercase().contains("ans")
}
