use std::collections::{HashSet, VecDeque};
use std::fmt;

use log::{debug, trace};

use crate::action::{format_path, Action};
use crate::error::SolveError;
use crate::sequence::Sequence;

/// A shortest way to sort a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Fewest actions that sort the start sequence.
    pub distance: usize,
    /// One shortest list of actions, `distance` long.
    pub actions: Vec<Action>,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} moves)", format_path(&self.actions), self.distance)
    }
}

/// Counters from the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// States placed in the visited set, the start included.
    pub discovered: usize,
    /// States taken off the frontier and expanded.
    pub expanded: usize,
}

/// A discovered state. `parent` and `action` point back to the node it was
/// reached from; the root has neither.
#[derive(Debug, Clone, Copy)]
struct Node {
    state: Sequence,
    parent: Option<(usize, Action)>,
    depth: usize,
}

/// Breadth-first search from a start sequence to its sorted arrangement.
///
/// Nodes are kept in an arena in discovery order and the frontier holds
/// arena indices, so a path is rebuilt only once the target is reached.
#[derive(Debug, Default)]
pub struct Solver {
    nodes: Vec<Node>,
    frontier: VecDeque<usize>,
    visited: HashSet<Sequence>,
    stats: SolveStats,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters for the last call to [`Solver::solve`].
    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    pub fn solve(&mut self, start: &Sequence) -> Result<Solution, SolveError> {
        self.reset();
        let target = start.target();
        debug!("Solving {} towards {}", start, target);

        self.visited.insert(*start);
        self.stats.discovered = 1;

        if *start == target {
            return Ok(Solution {
                distance: 0,
                actions: Vec::new(),
            });
        }

        self.nodes.push(Node {
            state: *start,
            parent: None,
            depth: 0,
        });
        self.frontier.push_back(0);

        while let Some(index) = self.frontier.pop_front() {
            let node = self.nodes[index];
            self.stats.expanded += 1;
            trace!("Expanding {} at depth {}", node.state, node.depth);

            for (action, state) in node.state.successors() {
                if !self.visited.insert(state) {
                    continue;
                }
                self.stats.discovered += 1;

                let child = self.nodes.len();
                self.nodes.push(Node {
                    state,
                    parent: Some((index, action)),
                    depth: node.depth + 1,
                });

                if state == target {
                    let solution = self.solution(child);
                    debug!(
                        "Solved {} in {} moves: {} ({} states discovered, {} expanded)",
                        start,
                        solution.distance,
                        format_path(&solution.actions),
                        self.stats.discovered,
                        self.stats.expanded
                    );
                    return Ok(solution);
                }

                self.frontier.push_back(child);
            }
        }

        Err(SolveError::UnreachableTarget {
            start: start.to_string(),
            target: target.to_string(),
            explored: self.stats.discovered,
        })
    }

    fn reset(&mut self) {
        self.nodes.clear();
        self.frontier.clear();
        self.visited.clear();
        self.stats = SolveStats::default();
    }

    /// Walks parent links from `index` back to the root.
    fn solution(&self, index: usize) -> Solution {
        let distance = self.nodes[index].depth;
        let mut actions = Vec::with_capacity(distance);

        let mut current = index;
        while let Some((parent, action)) = self.nodes[current].parent {
            actions.push(action);
            current = parent;
        }
        actions.reverse();

        Solution { distance, actions }
    }
}

#[cfg(test)]
impl Solver {
    /// Asserts the bookkeeping of a search that just found its target.
    ///
    /// Every discovered state sits in the arena exactly once. The arena
    /// splits into expanded nodes, nodes still on the frontier, and the
    /// target. The frontier pops in arena order, so depths along the arena
    /// are the depths in dequeue order.
    fn check_found_target(&self) {
        let unique: HashSet<Sequence> = self.nodes.iter().map(|node| node.state).collect();
        assert_eq!(unique.len(), self.nodes.len(), "state discovered twice");
        assert_eq!(unique, self.visited);
        assert_eq!(self.nodes.len(), self.stats.discovered);

        let target = self.nodes.len() - 1;
        let waiting: Vec<usize> = self.frontier.iter().copied().collect();
        assert_eq!(waiting, (self.stats.expanded..target).collect::<Vec<_>>());

        for pair in self.nodes.windows(2) {
            assert!(pair[0].depth <= pair[1].depth, "depth decreased");
        }
        for node in &self.nodes[1..] {
            let (parent, _) = node.parent.unwrap();
            assert!(parent < self.stats.expanded);
            assert_eq!(self.nodes[parent].depth + 1, node.depth);
        }
    }
}

/// Solves `start` with a fresh [`Solver`].
pub fn solve(start: &Sequence) -> Result<Solution, SolveError> {
    Solver::new().solve(start)
}

/// Validates raw symbols and solves them.
pub fn solve_symbols(symbols: &[u8]) -> Result<Solution, SolveError> {
    let start = Sequence::new(symbols)?;
    solve(&start)
}
