//! Offline pair generation for text that has no question/answer markers.
//!
//! Every sentence becomes its own prompt: short sentences are asked back as
//! `Explain: <sentence>`, longer ones as `Summarize: <preview>...`. The sentence itself
//! is the answer.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::constants::{EXPLAIN_MAX_CHARS, PASSAGE_ANSWER_CHARS, SUMMARY_PREVIEW_CHARS};

use super::types::QaPair;

static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("newline pattern"));

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.?!]\s+").expect("sentence break pattern"));

const PASSAGE_QUESTION: &str = "Summarize the given passage.";

/// Splits after `.`, `?`, or `!` followed by whitespace; newlines count as spaces.
fn sentences(text: &str) -> Vec<String> {
    let flat = NEWLINE_RUN.replace_all(text, " ");
    let mut out = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(&flat) {
        // keep the punctuation with its sentence
        out.push(flat[start..m.start() + 1].to_string());
        start = m.end();
    }
    out.push(flat[start..].to_string());

    out.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn prompt_for(sentence: &str) -> String {
    if sentence.chars().count() < EXPLAIN_MAX_CHARS {
        format!("Explain: {}", sentence)
    } else {
        let preview: String = sentence.chars().take(SUMMARY_PREVIEW_CHARS).collect();
        format!("Summarize: {}...", preview)
    }
}

/// Builds up to `max_pairs` sentence prompts from `text`, numbered `1..=N`.
///
/// When no sentence is produced (whitespace-only text, or `max_pairs == 0`) a single
/// whole-passage pair is returned with the first 400 chars of `text` as its answer.
/// Empty `text` yields nothing.
///
/// ```
/// use recite::extract::generate_pairs_from_text;
///
/// let pairs = generate_pairs_from_text("Water boils at 100 degrees. Ice melts at zero.", 6);
/// assert_eq!(pairs[0].question, "Explain: Water boils at 100 degrees.");
/// assert_eq!(pairs[1].answer, "Ice melts at zero.");
/// ```
pub fn generate_pairs_from_text(text: &str, max_pairs: usize) -> Vec<QaPair> {
    if text.is_empty() {
        return Vec::new();
    }

    let found = sentences(text);
    let mut pairs: Vec<QaPair> = found
        .iter()
        .take(max_pairs)
        .enumerate()
        .map(|(i, sentence)| QaPair::new(i + 1, prompt_for(sentence), sentence.as_str()))
        .collect();

    if pairs.is_empty() {
        let passage: String = text.chars().take(PASSAGE_ANSWER_CHARS).collect();
        pairs.push(QaPair::new(1, PASSAGE_QUESTION, passage));
    }

    debug!(
        sentences = found.len(),
        pairs = pairs.len(),
        max_pairs,
        "Generated sentence prompts"
    );

    pairs
}
