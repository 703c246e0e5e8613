//! Mapping from round state to what the player sees and hears.

use crate::model::{Candidate, IncorrectReason, Outcome, RoundSnapshot};

/// Visual state of one candidate button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    Neutral,
    Correct,
    Incorrect,
}

impl Highlight {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Highlight::Neutral => "neutral",
            Highlight::Correct => "correct",
            Highlight::Incorrect => "incorrect",
        }
    }
}

/// The four synthesized sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Correct,
    Wrong,
    Timeout,
    Click,
}

impl SoundCue {
    pub const ALL: [SoundCue; 4] = [
        SoundCue::Correct,
        SoundCue::Wrong,
        SoundCue::Timeout,
        SoundCue::Click,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SoundCue::Correct => "correct",
            SoundCue::Wrong => "wrong",
            SoundCue::Timeout => "timeout",
            SoundCue::Click => "click",
        }
    }
}

impl Outcome {
    /// Cue announcing this outcome; `None` while pending.
    #[must_use]
    pub fn cue(self) -> Option<SoundCue> {
        match self {
            Outcome::Pending => None,
            Outcome::Correct => Some(SoundCue::Correct),
            Outcome::Incorrect(IncorrectReason::Wrong) => Some(SoundCue::Wrong),
            Outcome::Incorrect(IncorrectReason::Timeout) => Some(SoundCue::Timeout),
        }
    }
}

/// Highlight for `candidate` in the given snapshot.
///
/// Everything is neutral while the round is pending. Once resolved, the
/// selected candidate shows whether it was right, and after a wrong answer or
/// a timeout the correct candidate is revealed as well.
#[must_use]
pub fn highlight(snapshot: &RoundSnapshot, candidate: &Candidate) -> Highlight {
    let Some(question) = snapshot.question.as_ref() else {
        return Highlight::Neutral;
    };
    let state = &snapshot.state;
    match state.outcome {
        Outcome::Pending => Highlight::Neutral,
        Outcome::Correct | Outcome::Incorrect(_) => {
            let is_correct = question.is_correct(candidate);
            if state.selected.as_ref() == Some(candidate) {
                if is_correct {
                    Highlight::Correct
                } else {
                    Highlight::Incorrect
                }
            } else if is_correct {
                Highlight::Correct
            } else {
                Highlight::Neutral
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ArithmeticQuestion, Difficulty, Expression, GameMode, Operator, Question, RoundPhase,
        RoundState,
    };

    fn snapshot(outcome: Outcome, selected: Option<i64>) -> RoundSnapshot {
        let question =
            ArithmeticQuestion::new(Expression::new(7, Operator::Add, 5), vec![9, 12, 15, 10])
                .unwrap();
        RoundSnapshot {
            mode: GameMode::Arithmetic,
            difficulty: Difficulty::Easy,
            phase: if outcome.is_pending() {
                RoundPhase::AwaitingAnswer
            } else {
                RoundPhase::Resolved
            },
            round: 1,
            question: Some(Question::Arithmetic(question)),
            state: RoundState {
                score: 0,
                time_left: 10,
                outcome,
                selected: selected.map(Candidate::Number),
            },
        }
    }

    fn highlights(snapshot: &RoundSnapshot) -> Vec<Highlight> {
        snapshot
            .candidates()
            .iter()
            .map(|c| highlight(snapshot, c))
            .collect()
    }

    #[test]
    fn pending_round_is_all_neutral() {
        let snap = snapshot(Outcome::Pending, None);
        assert!(highlights(&snap).iter().all(|h| *h == Highlight::Neutral));
    }

    #[test]
    fn correct_selection_is_green_only() {
        let snap = snapshot(Outcome::Correct, Some(12));
        assert_eq!(
            highlights(&snap),
            vec![
                Highlight::Neutral,
                Highlight::Correct,
                Highlight::Neutral,
                Highlight::Neutral
            ]
        );
    }

    #[test]
    fn wrong_selection_reveals_correct_candidate() {
        let snap = snapshot(Outcome::Incorrect(IncorrectReason::Wrong), Some(15));
        assert_eq!(
            highlights(&snap),
            vec![
                Highlight::Neutral,
                Highlight::Correct,
                Highlight::Incorrect,
                Highlight::Neutral
            ]
        );
    }

    #[test]
    fn timeout_reveals_correct_candidate() {
        let snap = snapshot(Outcome::Incorrect(IncorrectReason::Timeout), None);
        assert_eq!(
            highlights(&snap),
            vec![
                Highlight::Neutral,
                Highlight::Correct,
                Highlight::Neutral,
                Highlight::Neutral
            ]
        );
    }

    #[test]
    fn outcome_cues() {
        assert_eq!(Outcome::Pending.cue(), None);
        assert_eq!(Outcome::Correct.cue(), Some(SoundCue::Correct));
        assert_eq!(
            Outcome::Incorrect(IncorrectReason::Wrong).cue(),
            Some(SoundCue::Wrong)
        );
        assert_eq!(
            Outcome::Incorrect(IncorrectReason::Timeout).cue(),
            Some(SoundCue::Timeout)
        );
    }
}
