use std::fmt;
use std::str::FromStr;

use crate::error::ActionError;
use crate::sequence::Sequence;

/// One of the three moves of the puzzle.
///
/// The declaration order is the order in which the solver expands a state,
/// and therefore decides which of several shortest solutions is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Swap the first two circles.
    ShiftFirstTwo,
    /// Swap the last two circles.
    ShiftLastTwo,
    /// Rotate every circle but the outer two one place to the right.
    RotateMiddle,
}

impl Action {
    /// All actions, in expansion order.
    pub const ALL: [Action; 3] = [
        Action::ShiftFirstTwo,
        Action::ShiftLastTwo,
        Action::RotateMiddle,
    ];

    /// The one-letter name used on the buttons and in solution strings.
    pub fn letter(&self) -> char {
        match self {
            Action::ShiftFirstTwo => 'a',
            Action::ShiftLastTwo => 'b',
            Action::RotateMiddle => 'x',
        }
    }

    pub fn from_letter(letter: char) -> Result<Self, ActionError> {
        match letter.to_ascii_lowercase() {
            'a' => Ok(Action::ShiftFirstTwo),
            'b' => Ok(Action::ShiftLastTwo),
            'x' => Ok(Action::RotateMiddle),
            _ => Err(ActionError::Unknown(letter)),
        }
    }

    /// Returns the sequence obtained by applying this action to `seq`.
    pub fn apply(&self, seq: &Sequence) -> Sequence {
        let mut next = *seq;
        let len = next.len();
        let symbols = next.symbols_mut();
        match self {
            Action::ShiftFirstTwo => symbols.swap(0, 1),
            Action::ShiftLastTwo => symbols.swap(len - 2, len - 1),
            Action::RotateMiddle => symbols[1..len - 1].rotate_right(1),
        }
        next
    }

    /// Returns the sequence that `apply` maps onto `seq`.
    pub fn undo(&self, seq: &Sequence) -> Sequence {
        match self {
            Action::ShiftFirstTwo | Action::ShiftLastTwo => self.apply(seq),
            Action::RotateMiddle => {
                let mut prev = *seq;
                let len = prev.len();
                prev.symbols_mut()[1..len - 1].rotate_left(1);
                prev
            }
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Action::from_letter(letter),
            (Some(_), Some(extra)) => Err(ActionError::Unknown(extra)),
            (None, _) => Err(ActionError::Empty),
        }
    }
}

/// Parses a solution string such as `"abx"` into actions.
pub fn parse_path(path: &str) -> Result<Vec<Action>, ActionError> {
    path.chars()
        .filter(|c| !c.is_whitespace())
        .map(Action::from_letter)
        .collect()
}

/// Formats actions as a solution string such as `"abx"`.
pub fn format_path(actions: &[Action]) -> String {
    actions.iter().map(Action::letter).collect()
}
