use crate::model::difficulty::Difficulty;
use crate::model::mode::GameMode;
use crate::model::question::{Candidate, Question};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncorrectReason {
    Wrong,
    Timeout,
}

/// Resolution state of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    Pending,
    Correct,
    Incorrect(IncorrectReason),
}

impl Outcome {
    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self, Outcome::Pending)
    }

    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Outcome::Correct)
    }
}

/// Lifecycle phase of a round controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    /// No question is on screen yet, or generation failed and is retried.
    Loading,
    AwaitingAnswer,
    /// Outcome is decided; the next question follows after the advance delay.
    Resolved,
}

/// Mutable per-round state. Score survives across rounds of one visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundState {
    pub score: u32,
    pub time_left: u32,
    pub outcome: Outcome,
    pub selected: Option<Candidate>,
}

/// Immutable copy of everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub phase: RoundPhase,
    /// Increments with every loaded question; 0 before the first one.
    pub round: u64,
    pub question: Option<Question>,
    pub state: RoundState,
}

impl RoundSnapshot {
    #[must_use]
    pub fn candidates(&self) -> Vec<Candidate> {
        self.question
            .as_ref()
            .map(Question::candidates)
            .unwrap_or_default()
    }
}
