//! Board representation for the 3x3 sliding tile puzzle.
//!
//! The board is stored as a flat row-major array where each cell holds a tile
//! number (1-8) or 0 for the blank.

use std::fmt;
use std::str::FromStr;

use crate::error::PuzzleError;

/// Number of cells along one side of the board.
pub const SIDE: usize = 3;

/// Total number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// Cell value marking the blank.
pub const BLANK: u8 = 0;

/// A (row, column) position on the board.
pub type Coord = (usize, usize);

/// Converts (row, col) coordinates to a linear cell index.
///
/// Index order is row-major: `idx = row * SIDE + col`.
#[inline(always)]
pub const fn coord_to_idx(row: usize, col: usize) -> usize {
    row * SIDE + col
}

/// Converts a linear cell index to (row, col) coordinates.
#[inline(always)]
pub const fn idx_to_coord(cell_index: usize) -> Coord {
    (cell_index / SIDE, cell_index % SIDE)
}

/// An immutable 3x3 tile configuration.
///
/// Every constructor checks that the cells are a permutation of `0..=8`, so a
/// `Board` always holds exactly one blank. Equality and hashing compare cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; CELLS],
}

impl Board {
    /// Builds a board from a literal grid, validated during const evaluation.
    ///
    /// Intended for named constants; runtime input goes through
    /// [`Board::try_from_rows`] or [`Board::try_from_cells`].
    pub const fn from_grid(grid: [[u8; SIDE]; SIDE]) -> Self {
        let mut cells = [BLANK; CELLS];
        let mut seen = [false; CELLS];

        let mut row = 0;
        while row < SIDE {
            let mut col = 0;
            while col < SIDE {
                let value = grid[row][col];
                assert!((value as usize) < CELLS, "tile value must be in 0..=8");
                assert!(!seen[value as usize], "tile values must be distinct");
                seen[value as usize] = true;
                cells[coord_to_idx(row, col)] = value;
                col += 1;
            }
            row += 1;
        }

        Self { cells }
    }

    /// Builds a board from row-major cells.
    pub fn try_from_cells(cells: [u8; CELLS]) -> Result<Self, PuzzleError> {
        let mut seen = [false; CELLS];
        for &value in &cells {
            let slot = seen.get_mut(value as usize).ok_or_else(|| {
                PuzzleError::InvalidPuzzle(format!("value {value} is outside 0..=8"))
            })?;
            if *slot {
                return Err(PuzzleError::InvalidPuzzle(format!(
                    "value {value} appears more than once"
                )));
            }
            *slot = true;
        }
        // nine distinct values in 0..=8 cover every tile and the blank
        Ok(Self { cells })
    }

    /// Builds a board from a grid of rows, checking shape and contents.
    pub fn try_from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, PuzzleError> {
        if rows.len() != SIDE {
            return Err(PuzzleError::InvalidPuzzle(format!(
                "expected {SIDE} rows, found {}",
                rows.len()
            )));
        }

        let mut cells = [BLANK; CELLS];
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != SIDE {
                return Err(PuzzleError::InvalidPuzzle(format!(
                    "row {} has {} values (expected {SIDE})",
                    row + 1,
                    values.len()
                )));
            }
            for (col, &value) in values.iter().enumerate() {
                cells[coord_to_idx(row, col)] = u8::try_from(value)
                    .ok()
                    .filter(|&v| (v as usize) < CELLS)
                    .ok_or_else(|| {
                        PuzzleError::InvalidPuzzle(format!("value {value} is outside 0..=8"))
                    })?;
            }
        }

        Self::try_from_cells(cells)
    }

    /// Row-major cell values.
    #[inline]
    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    /// The value at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[coord_to_idx(row, col)]
    }

    /// The board as a grid of rows.
    pub fn rows(&self) -> [[u8; SIDE]; SIDE] {
        let mut rows = [[BLANK; SIDE]; SIDE];
        for (cell_index, &value) in self.cells.iter().enumerate() {
            let (row, col) = idx_to_coord(cell_index);
            rows[row][col] = value;
        }
        rows
    }

    /// Linear index of the blank, found by scanning the cells.
    #[inline]
    pub fn blank_index(&self) -> usize {
        self.cells
            .iter()
            .position(|&value| value == BLANK)
            .unwrap_or_else(|| unreachable!("board constructed without a blank"))
    }

    /// (row, col) of the blank.
    #[inline]
    pub fn blank_position(&self) -> Coord {
        idx_to_coord(self.blank_index())
    }

    /// Returns a copy with the cells at `a` and `b` exchanged.
    ///
    /// Any exchange keeps the cells a permutation, so the result is valid.
    #[inline]
    pub(crate) fn swapped(&self, a: usize, b: usize) -> Self {
        let mut cells = self.cells;
        cells.swap(a, b);
        Self { cells }
    }

    /// Number of tile pairs (blank excluded) that appear in reverse order.
    pub fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self.cells.iter().copied().filter(|&v| v != BLANK).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, &a)| tiles[i + 1..].iter().filter(|&&b| b < a).count())
            .sum()
    }

    /// Whether `other` lies in the same parity class as this board.
    ///
    /// On an odd-width board a blank move never changes the inversion parity,
    /// so two boards are mutually reachable exactly when these parities match.
    pub fn same_parity(&self, other: &Board) -> bool {
        self.inversions() % 2 == other.inversions() % 2
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:?})", self.rows())
    }
}

/// Renders three lines of space-separated tiles with `.` for the blank.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..SIDE {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get(row, col) {
                    BLANK => write!(f, ".")?,
                    value => write!(f, "{value}")?,
                }
            }
        }
        Ok(())
    }
}

/// Parses nine integers separated by whitespace, commas or `/`.
///
/// `"1 2 3 / 4 5 6 / 7 8 0"`, `"1,2,3,4,5,6,7,8,0"` and a three-line grid are
/// all accepted.
impl FromStr for Board {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
            .filter(|token| !token.is_empty())
            .collect();

        if tokens.len() != CELLS {
            return Err(PuzzleError::InvalidPuzzle(format!(
                "expected {CELLS} values, found {}",
                tokens.len()
            )));
        }

        let values = tokens
            .iter()
            .map(|token| {
                token.parse::<i64>().map_err(|_| {
                    PuzzleError::InvalidPuzzle(format!("{token:?} is not an integer"))
                })
            })
            .collect::<Result<Vec<i64>, _>>()?;

        let rows: Vec<&[i64]> = values.chunks(SIDE).collect();
        Self::try_from_rows(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOAL: Board = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);

    #[test]
    fn test_coordinate_conversion_roundtrip() {
        for idx in 0..CELLS {
            let (row, col) = idx_to_coord(idx);
            assert!(row < SIDE && col < SIDE, "idx_to_coord({idx}) out of range");
            assert_eq!(coord_to_idx(row, col), idx, "Roundtrip failed for index {idx}");
        }
    }

    #[test]
    fn test_rows_accepts_valid_grid() {
        let board = Board::try_from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
        assert_eq!(board, GOAL);
        assert_eq!(board.rows(), [[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
        assert_eq!(board.blank_position(), (2, 2));
        assert_eq!(board.get(1, 0), 4);
    }

    #[test]
    fn test_rows_rejects_wrong_shape() {
        let too_few = Board::try_from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]);
        assert!(matches!(too_few, Err(PuzzleError::InvalidPuzzle(_))));

        let ragged = Board::try_from_rows(&[vec![1, 2, 3], vec![4, 5], vec![6, 7, 8, 0]]);
        assert!(matches!(ragged, Err(PuzzleError::InvalidPuzzle(_))));
    }

    #[test]
    fn test_rows_rejects_duplicate_and_missing_values() {
        // two blanks, no 8
        let duplicate_blank = Board::try_from_rows(&[[1, 2, 3], [4, 5, 6], [7, 0, 0]]);
        assert!(matches!(duplicate_blank, Err(PuzzleError::InvalidPuzzle(_))));

        // no blank, 8 twice
        let missing_blank = Board::try_from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 8]]);
        assert!(matches!(missing_blank, Err(PuzzleError::InvalidPuzzle(_))));
    }

    #[test]
    fn test_rows_rejects_out_of_range_values() {
        let nine = Board::try_from_rows(&[[1, 2, 3], [4, 5, 6], [7, 9, 0]]);
        assert!(matches!(nine, Err(PuzzleError::InvalidPuzzle(_))));

        let negative = Board::try_from_rows(&[[1, 2, 3], [4, 5, 6], [7, -8, 0]]);
        assert!(matches!(negative, Err(PuzzleError::InvalidPuzzle(_))));
    }

    #[test]
    fn test_cells_rejects_out_of_range() {
        let err = Board::try_from_cells([1, 2, 3, 4, 5, 6, 7, 8, 42]).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::InvalidPuzzle("value 42 is outside 0..=8".to_string())
        );
    }

    #[test]
    fn test_parse_accepts_common_layouts() {
        let expected = Board::from_grid([[1, 2, 3], [4, 5, 6], [0, 7, 8]]);
        for text in [
            "1 2 3 4 5 6 0 7 8",
            "1,2,3,4,5,6,0,7,8",
            "1 2 3 / 4 5 6 / 0 7 8",
            "1 2 3\n4 5 6\n0 7 8\n",
        ] {
            assert_eq!(text.parse::<Board>().unwrap(), expected, "parsing {text:?}");
        }
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for text in ["", "1 2 3", "1 2 3 4 5 6 7 8 0 1", "1 2 3 4 5 6 7 8 x"] {
            assert!(
                matches!(text.parse::<Board>(), Err(PuzzleError::InvalidPuzzle(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_marks_blank() {
        let board = Board::from_grid([[8, 7, 1], [6, 0, 2], [5, 4, 3]]);
        assert_eq!(board.to_string(), "8 7 1\n6 . 2\n5 4 3");
    }

    #[test]
    fn test_parity_detects_tile_swap() {
        let swapped = Board::from_grid([[2, 1, 3], [4, 5, 6], [7, 8, 0]]);
        assert_eq!(GOAL.inversions(), 0);
        assert_eq!(swapped.inversions(), 1);
        assert!(!GOAL.same_parity(&swapped));

        // moving the blank along a row never changes inversions
        let blank_moved = Board::from_grid([[1, 2, 3], [4, 5, 6], [0, 7, 8]]);
        assert!(GOAL.same_parity(&blank_moved));
    }
}
