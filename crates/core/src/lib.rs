//! Timed quiz round engine: question generation, countdown, evaluation and
//! feedback mapping for the math trainer's game modes.
//!
//! Everything here is synchronous and free of I/O. Timers and sound output
//! live in the `services` crate.

pub mod distractor;
pub mod error;
pub mod evaluator;
pub mod feedback;
pub mod generator;
pub mod model;
pub mod round;
pub mod timer;

pub use error::{GenerateError, RoundError};
pub use feedback::{Highlight, SoundCue};
pub use model::{Difficulty, DifficultyError, GameMode, Question, RoundSnapshot};
pub use round::{QuestionSource, RandomQuestions, Resolution, RoundController};
