use rand::Rng;

use super::NumberRange;
use crate::distractor::{OffsetWindow, candidate_set};
use crate::error::GenerateError;
use crate::model::{ArithmeticQuestion, Difficulty, Expression, Operator, QuestionError};

/// Distractors land within `[-10, 10)` of the result.
const OFFSET_RADIUS: i64 = 10;

/// Largest quotient a division question asks for.
const MAX_QUOTIENT: i64 = 20;

/// # Errors
///
/// Returns `GenerateError` if the candidate set cannot be completed.
pub fn generate<R: Rng>(
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<ArithmeticQuestion, GenerateError> {
    let range = NumberRange::operands(difficulty);
    let op = Operator::ALL[rng.random_range(0..Operator::ALL.len())];
    let expression = match op {
        // Quotient first so the division is always exact.
        Operator::Divide => {
            let divisor = rng.random_range(2..range.half());
            let quotient = rng.random_range(1..=MAX_QUOTIENT);
            Expression::new(divisor * quotient, op, divisor)
        }
        _ => Expression::new(range.sample(rng), op, range.sample(rng)),
    };
    let answer = expression
        .evaluate()
        .ok_or_else(|| QuestionError::NotInteger(expression.to_string()))?;
    let candidates = candidate_set(rng, answer, OffsetWindow::around(OFFSET_RADIUS), |_| true)?;
    Ok(ArithmeticQuestion::new(expression, candidates)?)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn division_is_exact_and_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut divisions = 0;
        for difficulty in Difficulty::ALL {
            let range = NumberRange::operands(difficulty);
            for _ in 0..500 {
                let q = generate(difficulty, &mut rng).unwrap();
                let expr = q.expression();
                if expr.op != Operator::Divide {
                    assert!((range.min..range.max).contains(&expr.lhs));
                    assert!((range.min..range.max).contains(&expr.rhs));
                    continue;
                }
                divisions += 1;
                assert_eq!(expr.lhs % expr.rhs, 0);
                assert_eq!(expr.lhs / expr.rhs, q.answer());
                assert!((2..range.max / 2).contains(&expr.rhs));
                assert!((1..=MAX_QUOTIENT).contains(&q.answer()));
            }
        }
        assert!(divisions > 0);
    }

    #[test]
    fn candidates_stay_near_the_answer() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..200 {
            let q = generate(Difficulty::Easy, &mut rng).unwrap();
            let answer = q.answer();
            assert!(q.candidates().iter().all(|c| (c - answer).abs() <= OFFSET_RADIUS));
        }
    }
}
