//! Blank moves and successor generation.
//!
//! A move names the direction the blank travels. Moves are always generated
//! in the canonical order Up, Down, Left, Right; the search relies on this
//! order for reproducible expansion sequences.

use std::fmt;
use std::str::FromStr;

use crate::board::{coord_to_idx, Board, SIDE};
use crate::error::PuzzleError;

/// Direction the blank slides in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// Maximum number of successors of any board (blank in the center).
pub const MAX_NEIGHBORS: usize = 4;

impl Move {
    /// All moves in canonical generation order.
    pub const ALL: [Move; MAX_NEIGHBORS] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// (row, col) offset applied to the blank.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    /// The move that undoes this one.
    #[inline]
    pub const fn inverse(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Move::Up),
            "down" | "d" => Ok(Move::Down),
            "left" | "l" => Ok(Move::Left),
            "right" | "r" => Ok(Move::Right),
            _ => Err(PuzzleError::InvalidMove(s.trim().to_string())),
        }
    }
}

impl Board {
    /// Slides the blank one cell in the given direction.
    ///
    /// Returns `None` if the blank would leave the 3x3 grid.
    pub fn apply(&self, mv: Move) -> Option<Board> {
        let blank = self.blank_index();
        target_cell(blank, mv).map(|target| self.swapped(blank, target))
    }

    /// Replays a sequence of moves, stopping at the first illegal one.
    pub fn apply_all<'a, I>(&self, moves: I) -> Option<Board>
    where
        I: IntoIterator<Item = &'a Move>,
    {
        moves
            .into_iter()
            .try_fold(*self, |board, &mv| board.apply(mv))
    }
}

/// Cell the blank lands on when moving from `blank`, if it stays in bounds.
#[inline]
fn target_cell(blank: usize, mv: Move) -> Option<usize> {
    let (row, col) = (blank / SIDE, blank % SIDE);
    let (d_row, d_col) = mv.delta();
    let new_row = row.checked_add_signed(d_row).filter(|&r| r < SIDE)?;
    let new_col = col.checked_add_signed(d_col).filter(|&c| c < SIDE)?;
    Some(coord_to_idx(new_row, new_col))
}

/// Successors of one board, stored inline without heap allocation.
#[derive(Clone, Copy)]
pub struct Neighbors {
    entries: [(Board, Move); MAX_NEIGHBORS],
    len: u8,
}

impl Neighbors {
    /// The generated successors in canonical move order.
    #[inline]
    pub fn as_slice(&self) -> &[(Board, Move)] {
        &self.entries[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (Board, Move)> {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a Neighbors {
    type Item = &'a (Board, Move);
    type IntoIter = std::slice::Iter<'a, (Board, Move)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Generates every board reachable by one blank move.
///
/// Corner blanks yield 2 successors, edge blanks 3 and the center 4.
pub fn neighbors(board: &Board) -> Neighbors {
    let blank = board.blank_index();
    let mut result = Neighbors {
        entries: [(*board, Move::Up); MAX_NEIGHBORS],
        len: 0,
    };

    for mv in Move::ALL {
        if let Some(target) = target_cell(blank, mv) {
            result.entries[result.len as usize] = (board.swapped(blank, target), mv);
            result.len += 1;
        }
    }

    result
}
