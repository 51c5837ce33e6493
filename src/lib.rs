//! # Tricky Circles
//!
//! A row of coloured circles has to be sorted using three moves: swap the
//! first two (`a`), swap the last two (`b`), or rotate the middle ones one
//! place to the right (`x`). This crate finds the fewest moves for any
//! starting row with a breadth-first search over the arrangements.
//!
//! - [`sequence`]: the puzzle state
//! - [`action`]: the three moves
//! - [`solver`]: shortest solutions
//! - [`survey`]: distances for every arrangement of a length
//! - [`level`]: random levels and round bookkeeping
//! - [`error`]: error types

pub mod action;
pub mod error;
pub mod level;
pub mod sequence;
pub mod solver;
pub mod survey;

pub use action::Action;
pub use level::{Level, Rating};
pub use sequence::{Sequence, MAX_LEN, MIN_LEN};
pub use solver::{solve, solve_symbols, Solution, Solver};
pub use survey::{survey, Survey};
