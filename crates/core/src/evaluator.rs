use crate::model::{Candidate, IncorrectReason, Outcome, Question};

/// Result of judging one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub outcome: Outcome,
    pub score_delta: u32,
}

impl Evaluation {
    /// Expiry of the countdown: incorrect, nothing awarded.
    #[must_use]
    pub fn timeout() -> Self {
        Self {
            outcome: Outcome::Incorrect(IncorrectReason::Timeout),
            score_delta: 0,
        }
    }
}

/// Exact comparison of `submitted` against the question's correct candidate.
#[must_use]
pub fn evaluate(question: &Question, submitted: &Candidate) -> Evaluation {
    if question.is_correct(submitted) {
        Evaluation {
            outcome: Outcome::Correct,
            score_delta: question.mode().reward(),
        }
    } else {
        Evaluation {
            outcome: Outcome::Incorrect(IncorrectReason::Wrong),
            score_delta: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArithmeticQuestion, Expression, Operator};

    fn seven_plus_five() -> Question {
        Question::Arithmetic(
            ArithmeticQuestion::new(Expression::new(7, Operator::Add, 5), vec![9, 12, 15, 10])
                .unwrap(),
        )
    }

    #[test]
    fn correct_answer_earns_mode_reward() {
        let eval = evaluate(&seven_plus_five(), &Candidate::Number(12));
        assert_eq!(eval.outcome, Outcome::Correct);
        assert_eq!(eval.score_delta, 10);
    }

    #[test]
    fn wrong_answer_earns_nothing() {
        let eval = evaluate(&seven_plus_five(), &Candidate::Number(15));
        assert_eq!(eval.outcome, Outcome::Incorrect(IncorrectReason::Wrong));
        assert_eq!(eval.score_delta, 0);
    }

    #[test]
    fn candidate_of_another_kind_is_wrong() {
        let eval = evaluate(
            &seven_plus_five(),
            &Candidate::Expression(Expression::new(6, Operator::Add, 6)),
        );
        assert_eq!(eval.outcome, Outcome::Incorrect(IncorrectReason::Wrong));
    }
}
