use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

use crate::model::mode::GameMode;

/// Number of answer candidates shown for the numeric and expression modes.
pub const CANDIDATE_COUNT: usize = 4;

/// Visible terms in a sequence question.
pub const SEQUENCE_LEN: usize = 5;

/// Side length of the pattern grid.
pub const GRID_SIZE: usize = 3;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// A question payload that violates its mode's invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("expected {expected} candidates, found {found}")]
    CandidateCount { expected: usize, found: usize },

    #[error("duplicate candidate: {0}")]
    DuplicateCandidate(String),

    #[error("candidates do not contain the answer {0}")]
    MissingAnswer(String),

    #[error("expression has no integer value: {0}")]
    NotInteger(String),

    #[error("expression uses a negative operand: {0}")]
    NegativeOperand(String),

    #[error("hidden cell ({row}, {col}) is outside the grid")]
    HiddenCellOutOfBounds { row: usize, col: usize },

    #[error("sequence step must be positive, got {0}")]
    InvalidStep(i64),
}

//
// ─── EXPRESSIONS ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Applies the operator, returning `None` on overflow or inexact division.
    #[must_use]
    pub fn apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Subtract => lhs.checked_sub(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
            Operator::Divide => {
                if rhs == 0 || lhs.checked_rem(rhs)? != 0 {
                    None
                } else {
                    lhs.checked_div(rhs)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `lhs op rhs` over integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Expression {
    pub lhs: i64,
    pub op: Operator,
    pub rhs: i64,
}

impl Expression {
    #[must_use]
    pub fn new(lhs: i64, op: Operator, rhs: i64) -> Self {
        Self { lhs, op, rhs }
    }

    /// Exact integer value, or `None` when the expression has none.
    #[must_use]
    pub fn evaluate(&self) -> Option<i64> {
        self.op.apply(self.lhs, self.rhs)
    }

    fn value(&self) -> Result<i64, QuestionError> {
        self.evaluate()
            .ok_or_else(|| QuestionError::NotInteger(self.to_string()))
    }

    fn has_negative_operand(&self) -> bool {
        self.lhs < 0 || self.rhs < 0
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Less,
    Equal,
    Greater,
}

impl Relation {
    /// Display order of the comparison buttons.
    pub const ALL: [Relation; 3] = [Relation::Less, Relation::Equal, Relation::Greater];

    /// The relation that holds between `left` and `right`.
    #[must_use]
    pub fn between(left: i64, right: i64) -> Self {
        match left.cmp(&right) {
            Ordering::Less => Relation::Less,
            Ordering::Equal => Relation::Equal,
            Ordering::Greater => Relation::Greater,
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Less => "<",
            Relation::Equal => "=",
            Relation::Greater => ">",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

//
// ─── CANDIDATES ────────────────────────────────────────────────────────────────
//

/// One selectable answer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Candidate {
    Number(i64),
    Relation(Relation),
    Expression(Expression),
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Number(value) => write!(f, "{value}"),
            Candidate::Relation(relation) => write!(f, "{relation}"),
            Candidate::Expression(expression) => write!(f, "{expression}"),
        }
    }
}

fn check_candidate_set<T>(candidates: &[T], answer: &T) -> Result<(), QuestionError>
where
    T: PartialEq + fmt::Display,
{
    if candidates.len() != CANDIDATE_COUNT {
        return Err(QuestionError::CandidateCount {
            expected: CANDIDATE_COUNT,
            found: candidates.len(),
        });
    }
    for (idx, candidate) in candidates.iter().enumerate() {
        if candidates[..idx].contains(candidate) {
            return Err(QuestionError::DuplicateCandidate(candidate.to_string()));
        }
    }
    if !candidates.contains(answer) {
        return Err(QuestionError::MissingAnswer(answer.to_string()));
    }
    Ok(())
}

//
// ─── PER-MODE PAYLOADS ─────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArithmeticQuestion {
    expression: Expression,
    answer: i64,
    candidates: Vec<i64>,
}

impl ArithmeticQuestion {
    /// # Errors
    ///
    /// Returns `QuestionError` if the expression has no exact integer value or
    /// the candidates are not four distinct values including the answer.
    pub fn new(expression: Expression, candidates: Vec<i64>) -> Result<Self, QuestionError> {
        let answer = expression.value()?;
        check_candidate_set(&candidates, &answer)?;
        Ok(Self {
            expression,
            answer,
            candidates,
        })
    }

    #[must_use]
    pub fn expression(&self) -> Expression {
        self.expression
    }

    #[must_use]
    pub fn answer(&self) -> i64 {
        self.answer
    }

    #[must_use]
    pub fn candidates(&self) -> &[i64] {
        &self.candidates
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonQuestion {
    left: Expression,
    right: Expression,
    left_result: i64,
    right_result: i64,
    answer: Relation,
}

impl ComparisonQuestion {
    /// # Errors
    ///
    /// Returns `QuestionError::NotInteger` if either side has no integer value.
    pub fn new(left: Expression, right: Expression) -> Result<Self, QuestionError> {
        let left_result = left.value()?;
        let right_result = right.value()?;
        Ok(Self {
            left,
            right,
            left_result,
            right_result,
            answer: Relation::between(left_result, right_result),
        })
    }

    #[must_use]
    pub fn left(&self) -> Expression {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> Expression {
        self.right
    }

    #[must_use]
    pub fn left_result(&self) -> i64 {
        self.left_result
    }

    #[must_use]
    pub fn right_result(&self) -> i64 {
        self.right_result
    }

    #[must_use]
    pub fn answer(&self) -> Relation {
        self.answer
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternQuestion {
    grid: [[i64; GRID_SIZE]; GRID_SIZE],
    hidden: (usize, usize),
    increment: i64,
    candidates: Vec<i64>,
}

impl PatternQuestion {
    /// Builds the grid `base + (3 * row + col) * increment` and hides one cell.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the hidden cell is out of bounds or the
    /// candidates are not four distinct values including the hidden value.
    pub fn new(
        base: i64,
        increment: i64,
        hidden: (usize, usize),
        candidates: Vec<i64>,
    ) -> Result<Self, QuestionError> {
        let (row, col) = hidden;
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(QuestionError::HiddenCellOutOfBounds { row, col });
        }
        let mut grid = [[0; GRID_SIZE]; GRID_SIZE];
        for (i, cells) in grid.iter_mut().enumerate() {
            for (j, cell) in cells.iter_mut().enumerate() {
                let index = i64::try_from(i * GRID_SIZE + j).unwrap_or(i64::MAX);
                *cell = base + index * increment;
            }
        }
        check_candidate_set(&candidates, &grid[row][col])?;
        Ok(Self {
            grid,
            hidden,
            increment,
            candidates,
        })
    }

    /// Visible value of a cell; `None` for the hidden cell or out of range.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<i64> {
        if (row, col) == self.hidden {
            return None;
        }
        self.grid.get(row).and_then(|cells| cells.get(col)).copied()
    }

    #[must_use]
    pub fn hidden(&self) -> (usize, usize) {
        self.hidden
    }

    #[must_use]
    pub fn increment(&self) -> i64 {
        self.increment
    }

    #[must_use]
    pub fn answer(&self) -> i64 {
        let (row, col) = self.hidden;
        self.grid[row][col]
    }

    #[must_use]
    pub fn candidates(&self) -> &[i64] {
        &self.candidates
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceQuestion {
    terms: [i64; SEQUENCE_LEN],
    step: i64,
    answer: i64,
    candidates: Vec<i64>,
}

impl SequenceQuestion {
    /// # Errors
    ///
    /// Returns `QuestionError` for a non-positive step or an invalid
    /// candidate set.
    pub fn new(start: i64, step: i64, candidates: Vec<i64>) -> Result<Self, QuestionError> {
        if step <= 0 {
            return Err(QuestionError::InvalidStep(step));
        }
        let mut terms = [0; SEQUENCE_LEN];
        let mut value = start;
        for term in &mut terms {
            *term = value;
            value += step;
        }
        let answer = value;
        check_candidate_set(&candidates, &answer)?;
        Ok(Self {
            terms,
            step,
            answer,
            candidates,
        })
    }

    #[must_use]
    pub fn terms(&self) -> &[i64; SEQUENCE_LEN] {
        &self.terms
    }

    #[must_use]
    pub fn step(&self) -> i64 {
        self.step
    }

    #[must_use]
    pub fn answer(&self) -> i64 {
        self.answer
    }

    #[must_use]
    pub fn candidates(&self) -> &[i64] {
        &self.candidates
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryQuestion {
    primary: Expression,
    result: i64,
    answer: Expression,
    candidates: Vec<Expression>,
}

impl MemoryQuestion {
    /// The candidate evaluating to the primary result becomes the answer.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if any candidate has a negative operand or no
    /// integer value, if two candidates share a result, or if no candidate
    /// matches the primary result.
    pub fn new(primary: Expression, candidates: Vec<Expression>) -> Result<Self, QuestionError> {
        let result = primary.value()?;
        let mut results = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            if candidate.has_negative_operand() {
                return Err(QuestionError::NegativeOperand(candidate.to_string()));
            }
            results.push(candidate.value()?);
        }
        check_candidate_set(&results, &result)?;
        let answer = candidates
            .iter()
            .zip(&results)
            .find_map(|(candidate, value)| (*value == result).then_some(*candidate))
            .ok_or_else(|| QuestionError::MissingAnswer(result.to_string()))?;
        Ok(Self {
            primary,
            result,
            answer,
            candidates,
        })
    }

    #[must_use]
    pub fn primary(&self) -> Expression {
        self.primary
    }

    #[must_use]
    pub fn result(&self) -> i64 {
        self.result
    }

    #[must_use]
    pub fn answer(&self) -> Expression {
        self.answer
    }

    #[must_use]
    pub fn candidates(&self) -> &[Expression] {
        &self.candidates
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A generated question for one of the five game modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    Arithmetic(ArithmeticQuestion),
    Comparison(ComparisonQuestion),
    Pattern(PatternQuestion),
    Sequence(SequenceQuestion),
    Memory(MemoryQuestion),
}

impl Question {
    #[must_use]
    pub fn mode(&self) -> GameMode {
        match self {
            Question::Arithmetic(_) => GameMode::Arithmetic,
            Question::Comparison(_) => GameMode::Comparison,
            Question::Pattern(_) => GameMode::Pattern,
            Question::Sequence(_) => GameMode::Sequence,
            Question::Memory(_) => GameMode::Memory,
        }
    }

    /// Candidates in display order.
    #[must_use]
    pub fn candidates(&self) -> Vec<Candidate> {
        match self {
            Question::Arithmetic(q) => numbers(q.candidates()),
            Question::Pattern(q) => numbers(q.candidates()),
            Question::Sequence(q) => numbers(q.candidates()),
            Question::Comparison(_) => Relation::ALL.into_iter().map(Candidate::Relation).collect(),
            Question::Memory(q) => q
                .candidates()
                .iter()
                .copied()
                .map(Candidate::Expression)
                .collect(),
        }
    }

    /// The one correct candidate.
    #[must_use]
    pub fn correct(&self) -> Candidate {
        match self {
            Question::Arithmetic(q) => Candidate::Number(q.answer()),
            Question::Pattern(q) => Candidate::Number(q.answer()),
            Question::Sequence(q) => Candidate::Number(q.answer()),
            Question::Comparison(q) => Candidate::Relation(q.answer()),
            Question::Memory(q) => Candidate::Expression(q.answer()),
        }
    }

    #[must_use]
    pub fn is_correct(&self, candidate: &Candidate) -> bool {
        self.correct() == *candidate
    }

    /// One-line rendering of the question body.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Question::Arithmetic(q) => format!("{} = ?", q.expression()),
            Question::Comparison(q) => format!("{}  ?  {}", q.left(), q.right()),
            Question::Pattern(q) => {
                let rows: Vec<String> = (0..GRID_SIZE)
                    .map(|row| {
                        (0..GRID_SIZE)
                            .map(|col| {
                                q.cell(row, col)
                                    .map_or_else(|| "?".to_string(), |v| v.to_string())
                            })
                            .collect::<Vec<_>>()
                            .join(" ")
                    })
                    .collect();
                rows.join(" / ")
            }
            Question::Sequence(q) => {
                let terms: Vec<String> = q.terms().iter().map(ToString::to_string).collect();
                format!("{}, ?", terms.join(", "))
            }
            Question::Memory(q) => format!("{} = ?", q.primary()),
        }
    }
}

fn numbers(values: &[i64]) -> Vec<Candidate> {
    values.iter().copied().map(Candidate::Number).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_requires_exact_quotient() {
        assert_eq!(Expression::new(12, Operator::Divide, 4).evaluate(), Some(3));
        assert_eq!(Expression::new(13, Operator::Divide, 4).evaluate(), None);
        assert_eq!(Expression::new(13, Operator::Divide, 0).evaluate(), None);
    }

    #[test]
    fn arithmetic_rejects_duplicate_candidates() {
        let expr = Expression::new(7, Operator::Add, 5);
        let err = ArithmeticQuestion::new(expr, vec![12, 9, 9, 15]).unwrap_err();
        assert_eq!(err, QuestionError::DuplicateCandidate("9".into()));
    }

    #[test]
    fn arithmetic_rejects_missing_answer() {
        let expr = Expression::new(7, Operator::Add, 5);
        let err = ArithmeticQuestion::new(expr, vec![11, 9, 10, 15]).unwrap_err();
        assert_eq!(err, QuestionError::MissingAnswer("12".into()));
    }

    #[test]
    fn arithmetic_rejects_wrong_count() {
        let expr = Expression::new(7, Operator::Add, 5);
        let err = ArithmeticQuestion::new(expr, vec![12, 9, 10]).unwrap_err();
        assert_eq!(
            err,
            QuestionError::CandidateCount {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn sequence_builds_terms_and_next_value() {
        let q = SequenceQuestion::new(8, 4, vec![28, 27, 30, 25]).unwrap();
        assert_eq!(q.terms(), &[8, 12, 16, 20, 24]);
        assert_eq!(q.answer(), 28);
    }

    #[test]
    fn pattern_hides_exactly_one_cell() {
        let q = PatternQuestion::new(3, 2, (1, 2), vec![13, 12, 14, 11]).unwrap();
        assert_eq!(q.answer(), 13);
        assert_eq!(q.cell(1, 2), None);
        assert_eq!(q.cell(0, 0), Some(3));
        assert_eq!(q.cell(2, 2), Some(19));
        assert_eq!(Question::Pattern(q.clone()).text(), "3 5 7 / 9 11 ? / 15 17 19");
    }

    #[test]
    fn memory_picks_matching_expression_as_answer() {
        let primary = Expression::new(9, Operator::Add, 4);
        let candidates = vec![
            Expression::new(10, Operator::Add, 5),
            Expression::new(20, Operator::Subtract, 7),
            Expression::new(2, Operator::Add, 9),
            Expression::new(14, Operator::Subtract, 0),
        ];
        let q = MemoryQuestion::new(primary, candidates).unwrap();
        assert_eq!(q.result(), 13);
        assert_eq!(q.answer(), Expression::new(20, Operator::Subtract, 7));
    }

    #[test]
    fn memory_rejects_negative_operands() {
        let primary = Expression::new(9, Operator::Add, 4);
        let candidates = vec![
            Expression::new(-1, Operator::Add, 14),
            Expression::new(20, Operator::Subtract, 8),
            Expression::new(2, Operator::Add, 9),
            Expression::new(14, Operator::Subtract, 0),
        ];
        assert!(matches!(
            MemoryQuestion::new(primary, candidates),
            Err(QuestionError::NegativeOperand(_))
        ));
    }

    #[test]
    fn comparison_candidates_are_the_three_relations() {
        let q = Question::Comparison(
            ComparisonQuestion::new(
                Expression::new(10, Operator::Add, 2),
                Expression::new(20, Operator::Subtract, 8),
            )
            .unwrap(),
        );
        assert_eq!(q.correct(), Candidate::Relation(Relation::Equal));
        assert_eq!(q.candidates().len(), 3);
        assert!(q.is_correct(&Candidate::Relation(Relation::Equal)));
    }
}
