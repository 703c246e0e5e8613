pub mod difficulty;
pub mod mode;
pub mod question;
pub mod round;

pub use difficulty::{Difficulty, DifficultyError};
pub use mode::{GameMode, GameModeError};
pub use question::{
    ArithmeticQuestion, CANDIDATE_COUNT, Candidate, ComparisonQuestion, Expression, GRID_SIZE,
    MemoryQuestion, Operator, PatternQuestion, Question, QuestionError, Relation, SEQUENCE_LEN,
    SequenceQuestion,
};
pub use round::{IncorrectReason, Outcome, RoundPhase, RoundSnapshot, RoundState};
