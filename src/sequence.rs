use std::fmt;
use std::str::FromStr;

use crate::action::Action;
use crate::error::SequenceError;

/// Fewest circles a level can have.
pub const MIN_LEN: usize = 4;
/// Most circles a level can have.
pub const MAX_LEN: usize = 8;

/// An arrangement of distinct circles, one puzzle state.
///
/// Stored inline so that states are `Copy` and cheap to hash in the
/// solver's visited set. Slots past `len` are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sequence {
    symbols: [u8; MAX_LEN],
    len: u8,
}

impl Sequence {
    pub fn new(symbols: &[u8]) -> Result<Self, SequenceError> {
        if !(MIN_LEN..=MAX_LEN).contains(&symbols.len()) {
            return Err(SequenceError::InvalidLength(symbols.len()));
        }

        for (i, &symbol) in symbols.iter().enumerate() {
            if symbols[i + 1..].contains(&symbol) {
                return Err(SequenceError::DuplicateSymbol(symbol));
            }
        }

        let mut stored = [0; MAX_LEN];
        stored[..symbols.len()].copy_from_slice(symbols);

        Ok(Self {
            symbols: stored,
            len: symbols.len() as u8,
        })
    }

    /// The solved arrangement `0, 1, .., len - 1`.
    pub fn sorted(len: usize) -> Result<Self, SequenceError> {
        if !(MIN_LEN..=MAX_LEN).contains(&len) {
            return Err(SequenceError::InvalidLength(len));
        }

        let mut symbols = [0; MAX_LEN];
        for (i, slot) in symbols.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self::new(&symbols[..len])
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols[..self.len()]
    }

    pub(crate) fn symbols_mut(&mut self) -> &mut [u8] {
        let len = self.len();
        &mut self.symbols[..len]
    }

    /// The same circles in ascending order.
    pub fn target(&self) -> Self {
        let mut target = *self;
        target.symbols_mut().sort_unstable();
        target
    }

    pub fn is_sorted(&self) -> bool {
        self.symbols().windows(2).all(|pair| pair[0] < pair[1])
    }

    /// Position of `symbol` among the sorted circles, used to pick its colour.
    pub fn rank(&self, symbol: u8) -> Option<usize> {
        self.target().symbols().iter().position(|&s| s == symbol)
    }

    /// The three neighbouring states, always in the order `a`, `b`, `x`.
    pub fn successors(&self) -> [(Action, Sequence); 3] {
        Action::ALL.map(|action| (action, action.apply(self)))
    }

    /// Applies `actions` one at a time, returning every state along the way
    /// (the start state excluded).
    pub fn replay(&self, actions: &[Action]) -> Vec<Sequence> {
        actions
            .iter()
            .scan(*self, |state, action| {
                *state = action.apply(state);
                Some(*state)
            })
            .collect()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.symbols().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// Accepts either separated symbols (`"3,1,0,2"`, `"3 1 0 2"`) or a run of
/// single digits (`"3102"`).
impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let separated = s.contains(|c: char| c == ',' || c.is_whitespace());

        let symbols = if separated {
            s.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|part| !part.is_empty())
                .map(|part| {
                    part.parse::<u8>()
                        .map_err(|_| SequenceError::InvalidSymbol(part.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            s.chars()
                .map(|c| {
                    c.to_digit(10)
                        .map(|d| d as u8)
                        .ok_or_else(|| SequenceError::InvalidSymbol(c.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        Sequence::new(&symbols)
    }
}
