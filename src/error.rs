//! Errors raised before a search begins.
//!
//! An unreachable goal is not an error: it is reported through
//! [`crate::search::SearchOutcome::NoSolution`].

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// The grid is not a permutation of 0..=8 laid out as 3x3.
    #[error("invalid puzzle: {0}")]
    InvalidPuzzle(String),
    /// The algorithm selection does not name a known heuristic.
    #[error("invalid heuristic: {0:?} (expected ucs, misplaced or manhattan)")]
    InvalidHeuristic(String),
    /// A move name other than up, down, left or right.
    #[error("invalid move: {0:?} (expected up, down, left or right)")]
    InvalidMove(String),
}
