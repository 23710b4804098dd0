use thiserror::Error;

/// Errors from reading a generator's question/answer reply.
#[derive(Debug, Error)]
pub enum GeneratedPairsError {
    /// Reply was not valid JSON.
    #[error("generator reply is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Reply parsed, but had no `questions` array.
    #[error("generator reply has no \"questions\" array")]
    MissingQuestions,
}
