//! Exhaustive exploration of every arrangement of a given length.
//!
//! A single backward search from the solved arrangement over the inverse
//! actions gives the distance to the target of every state that can be
//! sorted at all, which is how the solver's answers are cross-checked and
//! how "every dealt level is solvable" is established.

use std::collections::{HashMap, VecDeque};

use log::info;

use crate::action::Action;
use crate::error::SequenceError;
use crate::sequence::Sequence;

/// Distances to the solved arrangement for one length.
#[derive(Debug, Clone)]
pub struct Survey {
    len: usize,
    distances: HashMap<Sequence, usize>,
    layers: Vec<usize>,
}

impl Survey {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Number of arrangements that can be sorted.
    pub fn reachable(&self) -> usize {
        self.distances.len()
    }

    /// Number of arrangements of `len` distinct circles.
    pub fn permutations(&self) -> usize {
        (1..=self.len).product()
    }

    /// Whether every arrangement can be sorted.
    pub fn is_complete(&self) -> bool {
        self.reachable() == self.permutations()
    }

    /// The largest number of moves any arrangement needs.
    pub fn diameter(&self) -> usize {
        self.layers.len().saturating_sub(1)
    }

    /// `layer_sizes()[d]` is the number of arrangements needing exactly `d`
    /// moves.
    pub fn layer_sizes(&self) -> &[usize] {
        &self.layers
    }

    /// Moves needed to sort `seq`, which must use the symbols `0..len`.
    pub fn distance(&self, seq: &Sequence) -> Option<usize> {
        self.distances.get(seq).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Sequence, &usize)> {
        self.distances.iter()
    }
}

/// Surveys every arrangement of `0..len`.
pub fn survey(len: usize) -> Result<Survey, SequenceError> {
    let target = Sequence::sorted(len)?;

    let mut distances = HashMap::new();
    let mut layers = vec![1];
    let mut queue = VecDeque::new();

    distances.insert(target, 0);
    queue.push_back((target, 0));

    while let Some((state, depth)) = queue.pop_front() {
        for action in Action::ALL {
            let prev = action.undo(&state);
            if distances.contains_key(&prev) {
                continue;
            }
            distances.insert(prev, depth + 1);
            if layers.len() == depth + 1 {
                layers.push(0);
            }
            layers[depth + 1] += 1;
            queue.push_back((prev, depth + 1));
        }
    }

    let survey = Survey {
        len,
        distances,
        layers,
    };
    info!(
        "Length {}: {} of {} arrangements solvable, at most {} moves",
        len,
        survey.reachable(),
        survey.permutations(),
        survey.diameter()
    );

    Ok(survey)
}
