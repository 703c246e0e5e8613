//! The per-mode round state machine.
//!
//! `Loading -> AwaitingAnswer -> Resolved -> Loading -> ...`
//!
//! The controller is synchronous and owns no timers: whoever drives it calls
//! [`RoundController::tick`] once per second and [`RoundController::advance`]
//! when the feedback delay is over.

use rand::Rng;

use crate::error::{GenerateError, RoundError};
use crate::evaluator::{self, Evaluation};
use crate::feedback::SoundCue;
use crate::generator;
use crate::model::{
    Candidate, Difficulty, GameMode, Outcome, Question, RoundPhase, RoundSnapshot, RoundState,
};
use crate::timer::RoundTimer;

/// Generation attempts per load before the controller gives up and stays in
/// `Loading`.
pub const MAX_LOAD_ATTEMPTS: u32 = 3;

/// Where the controller gets its questions from.
pub trait QuestionSource {
    /// # Errors
    ///
    /// Returns `GenerateError` if no valid question could be produced.
    fn next_question(
        &mut self,
        mode: GameMode,
        difficulty: Difficulty,
    ) -> Result<Question, GenerateError>;
}

/// Questions from the per-mode generators.
#[derive(Debug, Clone)]
pub struct RandomQuestions<R> {
    rng: R,
}

impl<R: Rng> RandomQuestions<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> QuestionSource for RandomQuestions<R> {
    fn next_question(
        &mut self,
        mode: GameMode,
        difficulty: Difficulty,
    ) -> Result<Question, GenerateError> {
        generator::generate(mode, difficulty, &mut self.rng)
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: Outcome,
    pub score_delta: u32,
    pub cue: SoundCue,
}

pub struct RoundController<S> {
    mode: GameMode,
    difficulty: Difficulty,
    source: S,
    phase: RoundPhase,
    round: u64,
    question: Option<Question>,
    timer: RoundTimer,
    state: RoundState,
}

impl<S: QuestionSource> RoundController<S> {
    /// A controller in `Loading`; call [`start`](Self::start) to show the
    /// first question.
    #[must_use]
    pub fn new(mode: GameMode, difficulty: Difficulty, source: S) -> Self {
        let timer = RoundTimer::new(mode.time_limit_secs());
        Self {
            mode,
            difficulty,
            source,
            phase: RoundPhase::Loading,
            round: 0,
            question: None,
            state: RoundState {
                time_left: timer.remaining(),
                ..RoundState::default()
            },
            timer,
        }
    }

    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn start(&mut self) -> Result<(), RoundError> {
        self.load()
    }

    /// Generates the next question and starts its countdown.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::Generation` when every attempt failed; the
    /// controller then stays in `Loading` with no question.
    pub fn load(&mut self) -> Result<(), RoundError> {
        self.phase = RoundPhase::Loading;
        self.question = None;
        self.state.outcome = Outcome::Pending;
        self.state.selected = None;

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.source.next_question(self.mode, self.difficulty) {
                Ok(question) => {
                    self.question = Some(question);
                    self.round += 1;
                    self.timer.reset();
                    self.state.time_left = self.timer.remaining();
                    self.phase = RoundPhase::AwaitingAnswer;
                    return Ok(());
                }
                Err(err) => {
                    tracing::warn!(
                        mode = %self.mode,
                        difficulty = %self.difficulty,
                        attempt,
                        error = %err,
                        "question generation failed"
                    );
                    if attempt >= MAX_LOAD_ATTEMPTS {
                        return Err(RoundError::Generation {
                            attempts: attempt,
                            source: err,
                        });
                    }
                }
            }
        }
    }

    /// Evaluates a submission. Ignored unless a question is awaiting an answer.
    pub fn submit(&mut self, candidate: Candidate) -> Option<Resolution> {
        if self.phase != RoundPhase::AwaitingAnswer {
            return None;
        }
        let evaluation = evaluator::evaluate(self.question.as_ref()?, &candidate);
        Some(self.resolve(evaluation, Some(candidate)))
    }

    /// One second of countdown. Resolves the round as a timeout on expiry.
    pub fn tick(&mut self) -> Option<Resolution> {
        if self.phase != RoundPhase::AwaitingAnswer {
            return None;
        }
        let expired = self.timer.tick_if_running(true);
        self.state.time_left = self.timer.remaining();
        expired.then(|| self.resolve(Evaluation::timeout(), None))
    }

    /// Ends the feedback delay and loads the next question.
    ///
    /// Also retries a load that previously failed. Returns whether a new
    /// question was loaded.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn advance(&mut self) -> Result<bool, RoundError> {
        match self.phase {
            RoundPhase::AwaitingAnswer => Ok(false),
            RoundPhase::Resolved | RoundPhase::Loading => self.load().map(|()| true),
        }
    }

    /// Switches difficulty, abandoning the current round unscored.
    ///
    /// Returns `Ok(false)` without touching the round if nothing changed.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<bool, RoundError> {
        if difficulty == self.difficulty {
            return Ok(false);
        }
        self.difficulty = difficulty;
        self.load().map(|()| true)
    }

    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            mode: self.mode,
            difficulty: self.difficulty,
            phase: self.phase,
            round: self.round,
            question: self.question.clone(),
            state: self.state,
        }
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Number of the current question; 0 before the first load.
    #[must_use]
    pub fn round(&self) -> u64 {
        self.round
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    fn resolve(&mut self, evaluation: Evaluation, selected: Option<Candidate>) -> Resolution {
        self.state.outcome = evaluation.outcome;
        self.state.selected = selected;
        self.state.score = self.state.score.saturating_add(evaluation.score_delta);
        self.phase = RoundPhase::Resolved;
        Resolution {
            outcome: evaluation.outcome,
            score_delta: evaluation.score_delta,
            cue: evaluation.outcome.cue().unwrap_or(SoundCue::Wrong),
        }
    }
}
