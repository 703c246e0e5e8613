use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameModeError {
    #[error("unknown game mode: {0:?}")]
    Unknown(String),
}

/// The five quiz mini-games offered from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Two operands and one of `+ - * /`.
    Arithmetic,
    /// 3x3 grid in arithmetic progression with one hidden cell.
    Pattern,
    /// Pick the relation between two small expressions.
    Comparison,
    /// Next term of a five-term arithmetic progression.
    Sequence,
    /// Pick the expression that evaluates to the same result.
    Memory,
}

impl GameMode {
    /// Menu order.
    pub const ALL: [GameMode; 5] = [
        GameMode::Arithmetic,
        GameMode::Pattern,
        GameMode::Comparison,
        GameMode::Sequence,
        GameMode::Memory,
    ];

    /// Stable identifier used in routes and logs.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            GameMode::Arithmetic => "basic-calc",
            GameMode::Pattern => "math-puzzle",
            GameMode::Comparison => "inequality",
            GameMode::Sequence => "sequence",
            GameMode::Memory => "math-memory",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            GameMode::Arithmetic => "Basic Calculation",
            GameMode::Pattern => "Math Puzzle Solver",
            GameMode::Comparison => "Inequality Solver",
            GameMode::Sequence => "Sequence Identifier",
            GameMode::Memory => "Math Memory",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            GameMode::Arithmetic => "Plus, Minus, Multiply, Divide",
            GameMode::Pattern => "Find the missing number",
            GameMode::Comparison => "Compare expressions",
            GameMode::Sequence => "Find the next number",
            GameMode::Memory => "Advanced calculation memory",
        }
    }

    /// Instruction shown above the question, if the mode has one.
    #[must_use]
    pub fn prompt(self) -> Option<&'static str> {
        match self {
            GameMode::Arithmetic => None,
            GameMode::Pattern => Some("Find the missing number in the pattern"),
            GameMode::Comparison => Some("Which comparison is correct?"),
            GameMode::Sequence => Some("What comes next in the sequence?"),
            GameMode::Memory => Some("Which option equals the result of:"),
        }
    }

    /// Seconds on the countdown when a fresh question is shown.
    #[must_use]
    pub fn time_limit_secs(self) -> u32 {
        match self {
            GameMode::Arithmetic => 10,
            GameMode::Comparison => 8,
            GameMode::Sequence => 12,
            GameMode::Pattern | GameMode::Memory => 15,
        }
    }

    /// Points awarded for a correct answer.
    #[must_use]
    pub fn reward(self) -> u32 {
        match self {
            GameMode::Arithmetic | GameMode::Comparison => 10,
            GameMode::Sequence => 12,
            GameMode::Pattern | GameMode::Memory => 15,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for GameMode {
    type Err = GameModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameMode::ALL
            .into_iter()
            .find(|mode| mode.id() == s)
            .ok_or_else(|| GameModeError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for mode in GameMode::ALL {
            assert_eq!(mode.id().parse::<GameMode>(), Ok(mode));
        }
        assert!("chess".parse::<GameMode>().is_err());
    }

    #[test]
    fn timing_and_rewards_match_mode_table() {
        let table: Vec<_> = GameMode::ALL
            .into_iter()
            .map(|mode| (mode, mode.time_limit_secs(), mode.reward()))
            .collect();
        assert_eq!(
            table,
            vec![
                (GameMode::Arithmetic, 10, 10),
                (GameMode::Pattern, 15, 15),
                (GameMode::Comparison, 8, 10),
                (GameMode::Sequence, 12, 12),
                (GameMode::Memory, 15, 15),
            ]
        );
    }
}
