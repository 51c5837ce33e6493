use rand::seq::SliceRandom;
use rand::Rng;

use crate::action::Action;
use crate::error::LevelError;
use crate::sequence::{Sequence, MAX_LEN, MIN_LEN};

/// How a finished round went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    /// Sorted in the minimum number of moves.
    Perfect,
    /// Sorted, but in more moves than needed.
    Solved(usize),
    /// Sorted by replaying the solver's answer.
    AutoSolved,
}

impl Rating {
    pub fn new(moves: usize, minimum: usize, auto_solved: bool) -> Self {
        if auto_solved {
            Rating::AutoSolved
        } else if moves == minimum {
            Rating::Perfect
        } else {
            Rating::Solved(moves)
        }
    }

    pub fn message(&self) -> String {
        match self {
            Rating::Perfect => "Perfect score!".to_string(),
            Rating::Solved(moves) => format!("Solved in {} moves!", moves),
            Rating::AutoSolved => "Try it yourself?".to_string(),
        }
    }
}

/// One round of the game: where it started, where it is now, and how many
/// moves have been made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    begin: Sequence,
    current: Sequence,
    moves: usize,
}

impl Level {
    /// Starts a round from `begin`, which must not already be sorted.
    pub fn new(begin: Sequence) -> Result<Self, LevelError> {
        if begin.is_sorted() {
            return Err(LevelError::AlreadySolved);
        }

        Ok(Self {
            begin,
            current: begin,
            moves: 0,
        })
    }

    /// Deals a uniformly random unsorted arrangement of `0..len`.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<Self, LevelError> {
        if !(MIN_LEN..=MAX_LEN).contains(&len) {
            return Err(LevelError::Length(len));
        }

        let mut symbols: Vec<u8> = (0..len).map(|i| i as u8).collect();
        loop {
            symbols.shuffle(rng);
            let begin = Sequence::new(&symbols)?;
            if !begin.is_sorted() {
                return Self::new(begin);
            }
        }
    }

    pub fn begin(&self) -> &Sequence {
        &self.begin
    }

    pub fn current(&self) -> &Sequence {
        &self.current
    }

    pub fn target(&self) -> Sequence {
        self.begin.target()
    }

    pub fn len(&self) -> usize {
        self.begin.len()
    }

    pub fn is_empty(&self) -> bool {
        self.begin.is_empty()
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn is_solved(&self) -> bool {
        self.current.is_sorted()
    }

    pub fn apply(&mut self, action: Action) {
        self.current = action.apply(&self.current);
        self.moves += 1;
    }

    /// Returns to the starting arrangement and clears the move counter.
    pub fn reset(&mut self) {
        self.current = self.begin;
        self.moves = 0;
    }

    /// Colour of each circle, indexed by its rank among the sorted circles.
    ///
    /// The hues are spread evenly around the colour wheel so the solved row
    /// reads as a spectrum.
    pub fn colors(&self) -> Vec<(u8, u8, u8)> {
        let len = self.len();
        (0..len)
            .map(|i| hsv_to_rgb(i as f64 / len as f64, 0.5, 1.0))
            .collect()
    }

    /// Colour of one circle on the board.
    pub fn color_of(&self, symbol: u8) -> Option<(u8, u8, u8)> {
        let rank = self.begin.rank(symbol)?;
        self.colors().get(rank).copied()
    }
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let to_byte = |x: f64| (x * 255.0) as u8;

    if s == 0.0 {
        return (to_byte(v), to_byte(v), to_byte(v));
    }

    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    (to_byte(r), to_byte(g), to_byte(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_levels_are_unsorted_permutations() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in MIN_LEN..=MAX_LEN {
            for _ in 0..50 {
                let level = Level::random(len, &mut rng).unwrap();
                assert_eq!(level.len(), len);
                assert!(!level.is_solved());
                let mut symbols = level.begin().symbols().to_vec();
                symbols.sort_unstable();
                assert_eq!(symbols, (0..len as u8).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_random_rejects_length() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Level::random(3, &mut rng), Err(LevelError::Length(3)));
        assert_eq!(Level::random(9, &mut rng), Err(LevelError::Length(9)));
    }

    #[test]
    fn test_sorted_start_rejected() {
        let sorted = Sequence::sorted(5).unwrap();
        assert_eq!(Level::new(sorted), Err(LevelError::AlreadySolved));
    }

    #[test]
    fn test_apply_and_reset() {
        let begin = Sequence::new(&[1, 0, 3, 2]).unwrap();
        let mut level = Level::new(begin).unwrap();

        level.apply(Action::ShiftFirstTwo);
        assert_eq!(level.moves(), 1);
        assert!(!level.is_solved());
        level.apply(Action::ShiftLastTwo);
        assert_eq!(level.moves(), 2);
        assert!(level.is_solved());
        assert_eq!(*level.current(), level.target());

        level.reset();
        assert_eq!(level.moves(), 0);
        assert_eq!(level.current(), &begin);
    }

    #[test]
    fn test_colors() {
        let level = Level::new(Sequence::new(&[3, 1, 0, 2, 4, 5]).unwrap()).unwrap();
        let colors = level.colors();
        assert_eq!(colors.len(), 6);
        assert_eq!(colors[0], (255, 127, 127));
        assert_eq!(level.color_of(0), Some((255, 127, 127)));
        assert_eq!(level.color_of(9), None);
        for pair in colors.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_rating() {
        assert_eq!(Rating::new(4, 4, false), Rating::Perfect);
        assert_eq!(Rating::new(6, 4, false), Rating::Solved(6));
        assert_eq!(Rating::new(4, 4, true), Rating::AutoSolved);
        assert_eq!(Rating::Solved(6).message(), "Solved in 6 moves!");
    }
}
