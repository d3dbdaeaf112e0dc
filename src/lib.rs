//! Eight Puzzle Solver Library
//!
//! Solves the 3x3 sliding tile puzzle with a best-first search shared by
//! uniform cost search and A* (misplaced-tile and Manhattan-distance
//! heuristics).

pub mod board;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod moves;
pub mod node;
pub mod presets;
pub mod render;
pub mod search;

pub use board::Board;
pub use error::PuzzleError;
pub use heuristic::Heuristic;
pub use moves::{neighbors, Move};
pub use search::{
    search, search_with, Expansion, SearchObserver, SearchOptions, SearchOutcome, SearchStats,
    Solution, StopReason,
};

/// A start board paired with the goal it should reach.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Puzzle {
    pub start: Board,
    pub goal: Board,
}

impl Puzzle {
    pub fn new(start: Board, goal: Board) -> Self {
        Self { start, goal }
    }

    /// A puzzle targeting the standard goal.
    pub fn with_standard_goal(start: Board) -> Self {
        Self::new(start, presets::GOAL)
    }

    /// Whether the goal is reachable, decided by permutation parity alone.
    pub fn is_solvable(&self) -> bool {
        self.start.same_parity(&self.goal)
    }

    pub fn solve(&self, heuristic: Heuristic) -> SearchOutcome {
        search(&self.start, &self.goal, heuristic)
    }

    /// Runs each algorithm in turn, one independent search per heuristic.
    pub fn solve_all(&self, options: &SearchOptions) -> Vec<(Heuristic, SearchOutcome)> {
        Heuristic::ALL
            .iter()
            .map(|&heuristic| {
                let outcome = search_with(&self.start, &self.goal, heuristic, options, &mut ());
                (heuristic, outcome)
            })
            .collect()
    }
}
