//! Question/answer extraction from unstructured text, without any model call.
//!
//! # Cascade
//!
//! Input is first run through [`clean_block`]. Strategies are then tried in order and
//! the first whose pair count reaches its minimum wins:
//!
//! 1. [`BlockStrategy`] (needs at least 2 pairs): regex scan over the whole block.
//! 2. [`LineStrategy`] (needs at least 1 pair): line-by-line walk.
//!
//! If that leaves at most one pair and the *raw* text mentions "ans" anywhere,
//! [`RescueStrategy`] re-pairs `Ans...` lines with the nearest preceding question line.
//! A non-empty rescue result replaces the cascade's result.
//!
//! Ids are assigned `1..=N` after the final choice. Nothing here fails: unparseable
//! input yields an empty `Vec`, and the caller decides whether to fall back to
//! generation, either offline with [`generate_pairs_from_text`] or through a model whose
//! reply [`sanitize_generated_pairs`] cleans.
//!
//! When the block and line passes disagree (for example on text with many colons such
//! as timestamps), a block result with enough pairs always wins.

mod error;
pub mod fallback;
pub mod generated;
pub(crate) mod patterns;
pub mod strategy;
pub mod types;


pub use error::GeneratedPairsError;
pub use fallback::generate_pairs_from_text;
pub use generated::sanitize_generated_pairs;
pub use strategy::{
    BlockStrategy, ExtractionStrategy, LineStrategy, RescueStrategy, has_answer_hint,
    sanitize_pair,
};
pub use types::{ExtractionReport, QaPair, StrategyOutcome};

use tracing::debug;

use crate::constants::{MAX_RESCUE_PAIRS, MIN_BLOCK_PAIRS};
use crate::normalize::clean_block;

/// Extracts pairs with the default cascade.
///
/// ```
/// use recite::extract::parse_qa_pairs;
///
/// let pairs = parse_qa_pairs("What is 2+2?\nAns: 4\nWhat is the capital of France?\nAnswer: Paris");
/// assert_eq!(pairs.len(), 2);
/// assert_eq!(pairs[1].question, "What is the capital of France?");
/// assert_eq!(pairs[1].answer, "Paris");
/// ```
pub fn parse_qa_pairs(raw: &str) -> Vec<QaPair> {
    QaExtractor::default().extract(raw)
}

/// Ordered strategy cascade plus the emergency rescue pass.
#[derive(Debug)]
pub struct QaExtractor {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
    rescue: RescueStrategy,
}

impl Default for QaExtractor {
    fn default() -> Self {
        Self::with_min_block_pairs(MIN_BLOCK_PAIRS)
    }
}

impl QaExtractor {
    /// Default cascade, but the block pass is trusted from `min_block_pairs` pairs.
    pub fn with_min_block_pairs(min_block_pairs: usize) -> Self {
        Self::with_strategies(vec![
            Box::new(BlockStrategy::with_min_pairs(min_block_pairs)),
            Box::new(LineStrategy),
        ])
    }

    pub fn with_strategies(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        Self {
            strategies,
            rescue: RescueStrategy,
        }
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn extract(&self, raw: &str) -> Vec<QaPair> {
        self.extract_with_report(raw).0
    }

    pub fn extract_with_report(&self, raw: &str) -> (Vec<QaPair>, ExtractionReport) {
        let (mut strategy, mut outcome) = self.run_cascade(&clean_block(raw));

        if outcome.len() <= MAX_RESCUE_PAIRS && has_answer_hint(raw) {
            let rescued = self.rescue.extract(raw);
            debug!(
                strategy = self.rescue.name(),
                pairs = rescued.len(),
                "Emergency pairing attempted"
            );
            if !rescued.is_empty() {
                strategy = self.rescue.name();
                outcome = rescued;
            }
        }

        let report = ExtractionReport {
            strategy: strategy.to_string(),
            confidence: if outcome.is_empty() {
                0.0
            } else {
                outcome.confidence
            },
            pair_count: outcome.len(),
        };

        debug!(
            strategy = %report.strategy,
            pairs = report.pair_count,
            confidence = report.confidence,
            "Q&A extraction complete"
        );

        (outcome.into_qa_pairs(), report)
    }

    fn run_cascade(&self, cleaned: &str) -> (&'static str, StrategyOutcome) {
        if cleaned.is_empty() {
            return ("none", StrategyOutcome::empty());
        }

        for strategy in &self.strategies {
            let outcome = strategy.extract(cleaned);
            debug!(
                strategy = strategy.name(),
                pairs = outcome.len(),
                min_pairs = strategy.min_pairs(),
                "Extraction strategy finished"
            );
            if outcome.len() >= strategy.min_pairs() && !outcome.is_empty() {
                return (strategy.name(), outcome);
            }
        }

        ("none", StrategyOutcome::empty())
    }
}
