use rand::Rng;

use crate::distractor::{OffsetWindow, candidate_set};
use crate::error::GenerateError;
use crate::model::{Difficulty, SequenceQuestion};

/// Start range and step choices for one difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceParams {
    pub start: i64,
    pub span: i64,
    pub steps: &'static [i64],
}

impl SequenceParams {
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                start: 1,
                span: 10,
                steps: &[2, 3, 5],
            },
            Difficulty::Medium => Self {
                start: 5,
                span: 20,
                steps: &[3, 4, 5, 7],
            },
            Difficulty::Hard => Self {
                start: 10,
                span: 30,
                steps: &[5, 7, 9, 11],
            },
        }
    }
}

/// # Errors
///
/// Returns `GenerateError` if the candidate set cannot be completed.
pub fn generate<R: Rng>(
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<SequenceQuestion, GenerateError> {
    let params = SequenceParams::for_difficulty(difficulty);
    let start = rng.random_range(params.start..params.start + params.span);
    let step = params.steps[rng.random_range(0..params.steps.len())];
    let answer = start + 5 * step;
    let candidates = candidate_set(rng, answer, OffsetWindow::around(step), |v| v > 0)?;
    Ok(SequenceQuestion::new(start, step, candidates)?)
}
