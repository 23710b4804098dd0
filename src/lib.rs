//! Recite library crate (used by the CLI and integration tests).
//!
//! Text structuring and fuzzy matching for a recitation workflow: pull question/answer
//! pairs out of messy notes, compare what a learner said against the expected answer,
//! and turn that comparison into a bounded score.
//!
//! # Public API Surface
//!
//! ## Text
//! - [`clean_line`], [`clean_block`], [`decode_entities`], [`strip_html`] - Normalization
//! - [`clean_math_output`], [`sanitize_similar_text`], [`slug`] - Output helpers
//!
//! ## Matching
//! - [`levenshtein`], [`normalized_distance`] - Edit distance
//! - [`WordAligner`], [`AlignmentResult`], [`AlignedWord`] - Word alignment
//! - [`SimilarityGate`], [`SimilarityVerdict`], [`jaccard_similarity`] - Regeneration gate
//!
//! ## Extraction
//! - [`parse_qa_pairs`], [`QaExtractor`], [`QaPair`] - Question/answer extraction
//! - [`sanitize_generated_pairs`] - Cleaning a model's JSON reply
//! - [`generate_pairs_from_text`] - Offline sentence prompts when no markers are found
//!
//! ## Scoring
//! - [`compute_score`], [`score_alignment`], [`ScoreBreakdown`]
//!
//! Everything except [`Config::from_env`] is pure and synchronous.

pub mod align;
pub mod config;
pub mod constants;
pub mod distance;
pub mod extract;
pub mod normalize;
pub mod scoring;
pub mod similarity;

pub use align::{AlignedWord, AlignmentResult, WordAligner, align_words, align_words_positional};
pub use config::{Config, ConfigError};
pub use constants::{
    DEFAULT_MAX_GENERATED_PAIRS, SIMILARITY_THRESHOLD, ThresholdError, WORD_MATCH_THRESHOLD,
    validate_threshold,
};
pub use distance::{levenshtein, normalized_distance};
pub use extract::{
    ExtractionReport, GeneratedPairsError, QaExtractor, QaPair, generate_pairs_from_text,
    parse_qa_pairs, sanitize_generated_pairs,
};
pub use normalize::{
    clean_block, clean_line, clean_math_output, decode_entities, sanitize_similar_text, slug,
    strip_html,
};
pub use scoring::{ScoreBreakdown, compute_score, score_alignment};
pub use similarity::{SimilarityGate, SimilarityVerdict, jaccard_similarity};
