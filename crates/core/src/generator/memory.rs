use rand::Rng;
use rand::seq::SliceRandom;

use super::NumberRange;
use crate::distractor::{OffsetWindow, distractors};
use crate::error::GenerateError;
use crate::model::{Difficulty, Expression, MemoryQuestion, Operator, QuestionError};

const OFFSET_RADIUS: i64 = 10;

/// # Errors
///
/// Returns `GenerateError` if the candidate set cannot be completed.
pub fn generate<R: Rng>(
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<MemoryQuestion, GenerateError> {
    let range = NumberRange::operands(difficulty);
    let op = if rng.random_bool(0.5) {
        Operator::Add
    } else {
        Operator::Subtract
    };
    let primary = Expression::new(range.sample(rng), op, rng.random_range(1..=range.half()));
    let result = primary
        .evaluate()
        .ok_or_else(|| QuestionError::NotInteger(primary.to_string()))?;

    // A non-negative result never gets negative lookalikes.
    let mut results = distractors(rng, result, OffsetWindow::around(OFFSET_RADIUS), |v| {
        result < 0 || v >= 0
    })?;
    results.push(result);

    let mut candidates: Vec<Expression> = results
        .into_iter()
        .map(|target| express(target, range, rng))
        .collect();
    candidates.shuffle(rng);
    Ok(MemoryQuestion::new(primary, candidates)?)
}

/// Renders `target` as an expression whose operands are both non-negative.
fn express<R: Rng>(target: i64, range: NumberRange, rng: &mut R) -> Expression {
    if target > 0 && rng.random_bool(0.5) {
        let a = rng.random_range(0..target);
        return Expression::new(a, Operator::Add, target - a);
    }
    let low = (-target).max(0);
    let b = rng.random_range(low..low + range.half());
    Expression::new(target + b, Operator::Subtract, b)
}
