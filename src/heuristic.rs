//! Distance estimates used to order the search frontier.
//!
//! Every heuristic here is admissible and consistent for unit move costs, so
//! best-first search with any of them returns a shortest solution.

use std::fmt;
use std::str::FromStr;

use crate::board::{idx_to_coord, Board, Coord, BLANK, CELLS};
use crate::error::PuzzleError;

/// Selects the priority function of the best-first search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Always 0; the search degenerates to uniform cost search.
    Zero,
    /// Count of tiles not on their goal cell.
    MisplacedTile,
    /// Sum of per-tile grid distances to the goal cell.
    ManhattanDistance,
}

impl Heuristic {
    /// All heuristics, in the order the algorithms are usually listed.
    pub const ALL: [Heuristic; 3] = [
        Heuristic::Zero,
        Heuristic::MisplacedTile,
        Heuristic::ManhattanDistance,
    ];

    /// Estimates the number of moves from `board` to `goal`.
    pub fn evaluate(self, board: &Board, goal: &Board) -> u32 {
        match self {
            Heuristic::Zero => 0,
            Heuristic::MisplacedTile => misplaced_tiles(board, goal),
            Heuristic::ManhattanDistance => manhattan_distance(board, goal),
        }
    }

    /// Name of the search algorithm this heuristic produces.
    pub const fn label(self) -> &'static str {
        match self {
            Heuristic::Zero => "Uniform Cost Search",
            Heuristic::MisplacedTile => "A* with Misplaced Tile Heuristic",
            Heuristic::ManhattanDistance => "A* with Manhattan Distance Heuristic",
        }
    }

    /// Short identifier accepted by [`Heuristic::from_str`].
    pub const fn key(self) -> &'static str {
        match self {
            Heuristic::Zero => "ucs",
            Heuristic::MisplacedTile => "misplaced",
            Heuristic::ManhattanDistance => "manhattan",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts short names, long names and the menu numbers `1`-`3`.
impl FromStr for Heuristic {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "zero" | "ucs" | "uniform-cost" | "uniform_cost" => Ok(Heuristic::Zero),
            "2" | "misplaced" | "misplaced-tile" | "misplaced_tile" => {
                Ok(Heuristic::MisplacedTile)
            }
            "3" | "manhattan" | "manhattan-distance" | "manhattan_distance" => {
                Ok(Heuristic::ManhattanDistance)
            }
            _ => Err(PuzzleError::InvalidHeuristic(s.to_string())),
        }
    }
}

/// Number of non-blank cells whose value differs from the goal at that cell.
pub fn misplaced_tiles(board: &Board, goal: &Board) -> u32 {
    board
        .cells()
        .iter()
        .zip(goal.cells())
        .filter(|&(&value, &wanted)| value != BLANK && value != wanted)
        .count() as u32
}

/// Sum over tiles of |row - goal_row| + |col - goal_col|.
pub fn manhattan_distance(board: &Board, goal: &Board) -> u32 {
    GoalPositions::new(goal).manhattan_distance(board)
}

/// Lookup table from tile value to its (row, col) in a goal board.
#[derive(Clone, Copy, Debug)]
pub struct GoalPositions {
    positions: [Coord; CELLS],
}

impl GoalPositions {
    pub fn new(goal: &Board) -> Self {
        let mut positions = [(0, 0); CELLS];
        for (cell_index, &value) in goal.cells().iter().enumerate() {
            positions[value as usize] = idx_to_coord(cell_index);
        }
        Self { positions }
    }

    /// Goal position of a tile value.
    #[inline]
    pub fn position_of(&self, value: u8) -> Coord {
        self.positions[value as usize]
    }

    pub fn manhattan_distance(&self, board: &Board) -> u32 {
        board
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != BLANK)
            .map(|(cell_index, &value)| {
                let (row, col) = idx_to_coord(cell_index);
                let (goal_row, goal_col) = self.position_of(value);
                (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
            })
            .sum()
    }
}

/// A heuristic bound to one goal, with per-goal tables computed once.
///
/// The search evaluates every generated board against the same goal, so the
/// Manhattan lookup table is built up front instead of per call.
#[derive(Clone, Copy, Debug)]
pub struct HeuristicEvaluator {
    heuristic: Heuristic,
    goal: Board,
    positions: GoalPositions,
}

impl HeuristicEvaluator {
    pub fn new(heuristic: Heuristic, goal: &Board) -> Self {
        Self {
            heuristic,
            goal: *goal,
            positions: GoalPositions::new(goal),
        }
    }

    #[inline]
    pub fn estimate(&self, board: &Board) -> u32 {
        match self.heuristic {
            Heuristic::Zero => 0,
            Heuristic::MisplacedTile => misplaced_tiles(board, &self.goal),
            Heuristic::ManhattanDistance => self.positions.manhattan_distance(board),
        }
    }
}
