//! Cleanup of question/answer lists produced by an external generator.
//!
//! Expected reply shape: `{"questions": [{"id": .., "question": "..", "answer": ".."}]}`.
//! Items are sanitized exactly like extracted pairs and renumbered `1..=N`.

use serde_json::Value;
use tracing::debug;

use super::error::GeneratedPairsError;
use super::strategy::sanitize_pair;
use super::types::QaPair;

fn coerce_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Parses and sanitizes a generator reply.
///
/// Non-object items and items whose question or answer cleans to nothing are dropped.
pub fn sanitize_generated_pairs(reply: &str) -> Result<Vec<QaPair>, GeneratedPairsError> {
    let parsed: Value = serde_json::from_str(reply)?;
    let items = parsed
        .get("questions")
        .and_then(Value::as_array)
        .ok_or(GeneratedPairsError::MissingQuestions)?;

    let pairs: Vec<QaPair> = items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|item| {
            sanitize_pair(
                &coerce_text(item.get("question")),
                &coerce_text(item.get("answer")),
            )
        })
        .enumerate()
        .map(|(i, (question, answer))| QaPair::new(i + 1, question, answer))
        .collect();

    debug!(
        items = items.len(),
        kept = pairs.len(),
        "Sanitized generated Q&A reply"
    );

    Ok(pairs)
}
