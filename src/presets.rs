//! Built-in puzzles and the standard goal board.
//!
//! Every board is validated at compile time by [`Board::from_grid`].

use crate::board::Board;

/// Tiles in reading order with the blank in the bottom-right corner.
pub const GOAL: Board = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);

/// Already solved.
pub const TRIVIAL: Board = GOAL;

pub const VERY_EASY: Board = Board::from_grid([[1, 2, 3], [4, 5, 6], [0, 7, 8]]);

pub const EASY: Board = Board::from_grid([[1, 2, 0], [4, 5, 3], [7, 8, 6]]);

pub const MEDIUM: Board = Board::from_grid([[0, 1, 2], [4, 5, 3], [7, 8, 6]]);

/// Twenty-two moves from the goal.
pub const DIFFICULT: Board = Board::from_grid([[8, 7, 1], [6, 0, 2], [5, 4, 3]]);

/// A named built-in puzzle, ordered from easiest to hardest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    Trivial,
    VeryEasy,
    Easy,
    Medium,
    Difficult,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Trivial,
        Preset::VeryEasy,
        Preset::Easy,
        Preset::Medium,
        Preset::Difficult,
    ];

    pub const fn board(self) -> Board {
        match self {
            Preset::Trivial => TRIVIAL,
            Preset::VeryEasy => VERY_EASY,
            Preset::Easy => EASY,
            Preset::Medium => MEDIUM,
            Preset::Difficult => DIFFICULT,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Preset::Trivial => "trivial",
            Preset::VeryEasy => "very-easy",
            Preset::Easy => "easy",
            Preset::Medium => "medium",
            Preset::Difficult => "difficult",
        }
    }

    /// Looks up a preset by name or by its 1-based menu number.
    pub fn find(name: &str) -> Option<Preset> {
        let wanted = name.trim().to_ascii_lowercase().replace('_', "-");
        Preset::ALL.into_iter().enumerate().find_map(|(index, preset)| {
            (preset.name() == wanted || (index + 1).to_string() == wanted).then_some(preset)
        })
    }
}
