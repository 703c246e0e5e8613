use quiz_core::feedback::{Highlight, highlight};
use quiz_core::model::{
    Candidate, GRID_SIZE, IncorrectReason, Outcome, Question, RoundPhase, RoundSnapshot,
};

/// Seconds left at which the countdown turns red.
const LOW_TIME_SECS: u32 = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionBody {
    Loading,
    Text(String),
    /// Rows of the pattern grid; `None` marks the hidden cell.
    Grid(Vec<Vec<Option<i64>>>),
    Sequence(Vec<i64>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateVm {
    pub candidate: Candidate,
    pub label: String,
    pub highlight: Highlight,
}

impl CandidateVm {
    #[must_use]
    pub fn class(&self) -> String {
        format!("candidate {}", self.highlight.css_class())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundVm {
    pub title: &'static str,
    pub prompt: Option<&'static str>,
    pub difficulty: &'static str,
    pub score: u32,
    pub time_left: u32,
    pub time_limit: u32,
    pub body: QuestionBody,
    pub candidates: Vec<CandidateVm>,
    pub outcome: Outcome,
    pub status: Option<String>,
    pub accepting_input: bool,
}

impl RoundVm {
    #[must_use]
    pub fn timer_class(&self) -> &'static str {
        if self.time_left <= LOW_TIME_SECS {
            "timer low"
        } else {
            "timer"
        }
    }

    /// Share of the countdown remaining, 0 to 100.
    #[must_use]
    pub fn time_percent(&self) -> u32 {
        if self.time_limit == 0 {
            return 0;
        }
        (self.time_left.min(self.time_limit) * 100) / self.time_limit
    }

    #[must_use]
    pub fn status_class(&self) -> &'static str {
        match self.outcome {
            Outcome::Pending => "status",
            Outcome::Correct => "status correct",
            Outcome::Incorrect(_) => "status incorrect",
        }
    }
}

#[must_use]
pub fn map_round(snapshot: &RoundSnapshot) -> RoundVm {
    let mode = snapshot.mode;
    let candidates = snapshot
        .candidates()
        .into_iter()
        .map(|candidate| CandidateVm {
            label: candidate.to_string(),
            highlight: highlight(snapshot, &candidate),
            candidate,
        })
        .collect();

    RoundVm {
        title: mode.title(),
        prompt: mode.prompt(),
        difficulty: snapshot.difficulty.label(),
        score: snapshot.state.score,
        time_left: snapshot.state.time_left,
        time_limit: mode.time_limit_secs(),
        body: snapshot.question.as_ref().map_or(QuestionBody::Loading, body),
        candidates,
        outcome: snapshot.state.outcome,
        status: status_text(snapshot.state.outcome, mode.reward()),
        accepting_input: snapshot.phase == RoundPhase::AwaitingAnswer,
    }
}

fn body(question: &Question) -> QuestionBody {
    match question {
        Question::Pattern(q) => QuestionBody::Grid(
            (0..GRID_SIZE)
                .map(|row| (0..GRID_SIZE).map(|col| q.cell(row, col)).collect())
                .collect(),
        ),
        Question::Sequence(q) => QuestionBody::Sequence(q.terms().to_vec()),
        Question::Arithmetic(_) | Question::Comparison(_) | Question::Memory(_) => {
            QuestionBody::Text(question.text())
        }
    }
}

fn status_text(outcome: Outcome, reward: u32) -> Option<String> {
    match outcome {
        Outcome::Pending => None,
        Outcome::Correct => Some(format!("Correct! +{reward}")),
        Outcome::Incorrect(IncorrectReason::Wrong) => Some("Wrong answer".to_string()),
        Outcome::Incorrect(IncorrectReason::Timeout) => Some("Time's up!".to_string()),
    }
}
