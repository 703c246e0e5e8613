//! Question generators, one per game mode.
//!
//! Each generator is a pure function of the difficulty and the random source.
//! Successful results always satisfy the candidate-set invariant because the
//! payloads are built through their validating constructors.

pub mod arithmetic;
pub mod comparison;
pub mod memory;
pub mod pattern;
pub mod sequence;

use rand::Rng;

use crate::error::GenerateError;
use crate::model::{Difficulty, GameMode, Question};

/// Half-open integer range `[min, max)` drawn from by a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRange {
    pub min: i64,
    pub max: i64,
}

impl NumberRange {
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Operand range shared by the arithmetic, comparison and memory modes.
    #[must_use]
    pub fn operands(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self::new(1, 20),
            Difficulty::Medium => Self::new(10, 50),
            Difficulty::Hard => Self::new(20, 100),
        }
    }

    /// Base-value range for the pattern grid.
    #[must_use]
    pub fn pattern_base(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self::new(1, 10),
            Difficulty::Medium => Self::new(5, 20),
            Difficulty::Hard => Self::new(10, 30),
        }
    }

    pub(crate) fn sample<R: Rng>(self, rng: &mut R) -> i64 {
        rng.random_range(self.min..self.max)
    }

    /// Upper bound for second operands, `max / 2`.
    pub(crate) fn half(self) -> i64 {
        self.max / 2
    }
}

/// Generates a question for `mode` at `difficulty`.
///
/// # Errors
///
/// Returns `GenerateError` if no valid candidate set could be assembled.
pub fn generate<R: Rng>(
    mode: GameMode,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Question, GenerateError> {
    match mode {
        GameMode::Arithmetic => arithmetic::generate(difficulty, rng).map(Question::Arithmetic),
        GameMode::Comparison => comparison::generate(difficulty, rng).map(Question::Comparison),
        GameMode::Pattern => pattern::generate(difficulty, rng).map(Question::Pattern),
        GameMode::Sequence => sequence::generate(difficulty, rng).map(Question::Sequence),
        GameMode::Memory => memory::generate(difficulty, rng).map(Question::Memory),
    }
}
