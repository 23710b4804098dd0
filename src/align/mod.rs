//! Word-level alignment of a spoken answer against a reference text.
//!
//! # Greedy, Not Optimal
//!
//! [`align_words`] walks expected tokens in order and, for each, takes the closest
//! spoken token that is still unused. Ties go to the earliest spoken position. A spoken
//! token consumed by an earlier expected word is never handed back, even when a later
//! expected word would have matched it better:
//!
//! ```
//! use recite::align::align_words;
//!
//! // The first "cat" takes "cot"; the second "cat" has nothing left.
//! let result = align_words("cat cat", "cot");
//! assert_eq!(result.word_match_percent, 50);
//! assert!(result.words[0].matched);
//! assert!(!result.words[1].matched);
//! ```
//!
//! The tie-break and starvation behavior are part of the scoring contract; keep the
//! nested scan and the `used` table rather than swapping in an assignment solver.

pub mod types;


pub use types::{AlignedWord, AlignmentResult};

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::constants::WORD_MATCH_THRESHOLD;
use crate::distance::normalized_distance;

static NON_WORD_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}'\s]").expect("word char pattern"));

/// Lowercases and splits into words, keeping letters, digits, and apostrophes.
///
/// Order and duplicates are preserved.
pub fn normalize_words(s: &str) -> Vec<String> {
    let lowered = s.to_lowercase();
    NON_WORD_CHAR
        .replace_all(&lowered, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Like [`normalize_words`], but other characters are deleted rather than turned into
/// spaces, so `e-mail` stays one token (`email`).
pub fn compact_words(s: &str) -> Vec<String> {
    let lowered = s.to_lowercase();
    NON_WORD_CHAR
        .replace_all(&lowered, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Greedy alignment with the default [`WORD_MATCH_THRESHOLD`].
pub fn align_words(expected: &str, spoken: &str) -> AlignmentResult {
    WordAligner::default().align(expected, spoken)
}

/// Index-by-index comparison with the default [`WORD_MATCH_THRESHOLD`].
pub fn align_words_positional(expected: &str, spoken: &str) -> AlignmentResult {
    WordAligner::default().align_positional(expected, spoken)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordAligner {
    threshold: f64,
}

impl Default for WordAligner {
    fn default() -> Self {
        Self {
            threshold: WORD_MATCH_THRESHOLD,
        }
    }
}

impl WordAligner {
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

    pub fn align(&self, expected: &str, spoken: &str) -> AlignmentResult {
        let expected_tokens = normalize_words(expected);
        let spoken_tokens = normalize_words(spoken);
        let mut used = vec![false; spoken_tokens.len()];

        let words = expected_tokens
            .iter()
            .enumerate()
            .map(|(index, word)| {
                let mut best: Option<(usize, f64)> = None;
                for (j, candidate) in spoken_tokens.iter().enumerate() {
                    if used[j] {
                        continue;
                    }
                    let distance = normalized_distance(word, candidate);
                    // strict `<` keeps the earliest candidate on ties
                    if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                        best = Some((j, distance));
                    }
                }

                match best {
                    Some((j, distance)) if distance <= self.threshold => {
                        used[j] = true;
                        AlignedWord::matched(index, word, &spoken_tokens[j], distance)
                    }
                    Some((_, distance)) => AlignedWord::unmatched(index, word, "", Some(distance)),
                    None => AlignedWord::unmatched(index, word, "", None),
                }
            })
            .collect();

        let result = AlignmentResult::from_words(words);

        debug!(
            expected_tokens = expected_tokens.len(),
            spoken_tokens = spoken_tokens.len(),
            matched = result.matched_count(),
            word_match_percent = result.word_match_percent,
            "Greedy word alignment complete"
        );

        result
    }

    /// Compares expected token `i` with spoken token `i` only. Missing spoken tokens
    /// count as empty strings. The spoken token is recorded even when unmatched.
    ///
    /// Tokens come from [`compact_words`]. A matched word reports confidence 100; an
    /// unmatched one is scored from its distance.
    pub fn align_positional(&self, expected: &str, spoken: &str) -> AlignmentResult {
        let expected_tokens = compact_words(expected);
        let spoken_tokens = compact_words(spoken);

        let words = expected_tokens
            .iter()
            .enumerate()
            .map(|(index, word)| {
                let candidate = spoken_tokens.get(index).map(String::as_str).unwrap_or("");
                let distance = normalized_distance(word, candidate);
                if distance <= self.threshold {
                    AlignedWord {
                        confidence: 100,
                        ..AlignedWord::matched(index, word, candidate, distance)
                    }
                } else {
                    AlignedWord::unmatched(index, word, candidate, Some(distance))
                }
            })
            .collect();

        let result = AlignmentResult::from_words(words);

        debug!(
            expected_tokens = expected_tokens.len(),
            spoken_tokens = spoken_tokens.len(),
            word_match_percent = result.word_match_percent,
            "Positional word alignment complete"
        );

        result
    }
}
