use crate::sequence::{MAX_LEN, MIN_LEN};

/// Errors raised when building a [`Sequence`](crate::Sequence).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    #[error(
        "sequence has {0} symbols, expected between {min} and {max}",
        min = MIN_LEN,
        max = MAX_LEN
    )]
    InvalidLength(usize),

    #[error("symbol {0} appears more than once")]
    DuplicateSymbol(u8),

    #[error("cannot parse {0:?} as a symbol")]
    InvalidSymbol(String),
}

/// Errors raised when parsing an [`Action`](crate::Action).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("unknown action {0:?} (expected one of a, b, x)")]
    Unknown(char),

    #[error("no action given")]
    Empty,
}

/// Errors raised by the solver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("invalid sequence: {0}")]
    InvalidSequence(#[from] SequenceError),

    #[error("target {target} is unreachable from {start} after exploring {explored} states")]
    UnreachableTarget {
        start: String,
        target: String,
        explored: usize,
    },
}

/// Errors raised when dealing a level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error(
        "level length {0} is outside {min}..={max}",
        min = MIN_LEN,
        max = MAX_LEN
    )]
    Length(usize),

    #[error("level is already solved")]
    AlreadySolved,

    #[error("invalid sequence: {0}")]
    Sequence(#[from] SequenceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_error_display() {
        assert_eq!(
            SequenceError::InvalidLength(3).to_string(),
            "sequence has 3 symbols, expected between 4 and 8"
        );
        assert_eq!(
            SequenceError::DuplicateSymbol(2).to_string(),
            "symbol 2 appears more than once"
        );
    }

    #[test]
    fn test_solve_error_display() {
        let err = SolveError::UnreachableTarget {
            start: "1032".to_string(),
            target: "0123".to_string(),
            explored: 24,
        };
        assert_eq!(
            err.to_string(),
            "target 0123 is unreachable from 1032 after exploring 24 states"
        );

        let err: SolveError = SequenceError::InvalidLength(9).into();
        assert_eq!(
            err.to_string(),
            "invalid sequence: sequence has 9 symbols, expected between 4 and 8"
        );
    }

    #[test]
    fn test_action_error_display() {
        assert_eq!(
            ActionError::Unknown('q').to_string(),
            "unknown action 'q' (expected one of a, b, x)"
        );
        assert_eq!(ActionError::Empty.to_string(), "no action given");
    }
}
