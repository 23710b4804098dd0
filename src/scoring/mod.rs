//! Fixed-weight combination of word-match output into a final practice score.
//!
//! ```text
//! pronunciation = min(100, round(word_match * 0.90 + 10))
//! fluency       = min(100, round(word_match * 0.85 + 12))
//! final         = round(0.55*word_match + 0.20*pronunciation + 0.15*fluency + 0.10*relevance)
//! ```
//!
//! Each sub-metric is rounded and clamped to `[0, 100]` *before* it feeds `final`. The
//! relevance input comes from an external judge; this crate only combines it.

pub mod scorer;
pub mod types;


pub use scorer::{compute_score, score_alignment};
pub use types::ScoreBreakdown;
