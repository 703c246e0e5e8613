use rand::Rng;

use super::NumberRange;
use crate::error::GenerateError;
use crate::model::{ComparisonQuestion, Difficulty, Expression, Operator};

/// # Errors
///
/// Returns `GenerateError::Invalid` if a side fails to evaluate.
pub fn generate<R: Rng>(
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<ComparisonQuestion, GenerateError> {
    let range = NumberRange::operands(difficulty);
    let left = side(range, rng);
    let right = side(range, rng);
    Ok(ComparisonQuestion::new(left, right)?)
}

/// `a op b` with `a` in the operand range, `b` in `[1, max / 2]`, `op` in `{+, -}`.
fn side<R: Rng>(range: NumberRange, rng: &mut R) -> Expression {
    let a = range.sample(rng);
    let b = rng.random_range(1..=range.half());
    let op = if rng.random_bool(0.5) {
        Operator::Add
    } else {
        Operator::Subtract
    };
    Expression::new(a, op, b)
}
