use thiserror::Error;

use crate::model::QuestionError;

/// Failure to produce a valid question.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerateError {
    #[error("could not find {needed} distinct distractors around {answer}")]
    InsufficientCandidates { answer: i64, needed: usize },

    #[error("invalid question: {0}")]
    Invalid(#[from] QuestionError),
}

/// Errors surfaced by the round controller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("question generation failed after {attempts} attempts")]
    Generation {
        attempts: u32,
        #[source]
        source: GenerateError,
    },
}
