use rand::Rng;

use super::NumberRange;
use crate::distractor::{OffsetWindow, candidate_set};
use crate::error::GenerateError;
use crate::model::{Difficulty, GRID_SIZE, PatternQuestion};

const OFFSET_RADIUS: i64 = 5;

/// # Errors
///
/// Returns `GenerateError` if the candidate set cannot be completed.
pub fn generate<R: Rng>(
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<PatternQuestion, GenerateError> {
    let base = NumberRange::pattern_base(difficulty).sample(rng);
    let increment = rng.random_range(2..=6);
    let hidden = (rng.random_range(0..GRID_SIZE), rng.random_range(0..GRID_SIZE));
    let cell = i64::try_from(hidden.0 * GRID_SIZE + hidden.1).unwrap_or(0);
    let answer = base + cell * increment;
    let candidates = candidate_set(rng, answer, OffsetWindow::around(OFFSET_RADIUS), |v| v > 0)?;
    Ok(PatternQuestion::new(base, increment, hidden, candidates)?)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn grid_follows_progression_around_hidden_cell() {
        let mut rng = StdRng::seed_from_u64(23);
        for difficulty in Difficulty::ALL {
            for _ in 0..300 {
                let q = generate(difficulty, &mut rng).unwrap();
                let (hr, hc) = q.hidden();
                let base = match (hr, hc) {
                    (0, 0) => q.answer(),
                    _ => q.cell(0, 0).unwrap(),
                };
                let inc = q.increment();
                assert!((2..=6).contains(&inc));
                for row in 0..GRID_SIZE {
                    for col in 0..GRID_SIZE {
                        let expected = base + i64::try_from(row * 3 + col).unwrap() * inc;
                        match q.cell(row, col) {
                            Some(value) => assert_eq!(value, expected),
                            None => assert_eq!(q.answer(), expected),
                        }
                    }
                }
                assert!(q.candidates().iter().all(|c| *c > 0));
            }
        }
    }
}
