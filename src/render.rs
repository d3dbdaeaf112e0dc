//! Text rendering of boards, solution replays and search reports.

use std::fmt::Write;

use crate::board::{Board, SIDE};
use crate::heuristic::Heuristic;
use crate::moves::Move;
use crate::search::SearchOutcome;

/// Width of one rendered board ("1 2 3").
const BOARD_WIDTH: usize = 2 * SIDE - 1;

/// Padding between boards placed side by side.
const COLUMN_GAP: &str = "  ";

/// Boards per row of a replay before wrapping.
const BOARDS_PER_ROW: usize = 8;

/// Renders boards side by side, each under its label.
///
/// Wraps after [`BOARDS_PER_ROW`] boards, separating rows with a blank line.
pub fn format_boards(columns: &[(String, Board)]) -> String {
    let mut blocks = Vec::new();

    for chunk in columns.chunks(BOARDS_PER_ROW) {
        let mut lines = vec![String::new(); SIDE + 1];
        for (column, (label, board)) in chunk.iter().enumerate() {
            if column > 0 {
                for line in &mut lines {
                    line.push_str(COLUMN_GAP);
                }
            }
            let _ = write!(lines[0], "{label:<BOARD_WIDTH$}");
            for (row, line) in board.to_string().lines().enumerate() {
                lines[row + 1].push_str(line);
            }
        }
        let block: Vec<&str> = lines.iter().map(|line| line.trim_end()).collect();
        blocks.push(block.join("\n"));
    }

    blocks.join("\n\n")
}

/// Renders every board along a solution, starting from `start`.
///
/// Returns `None` if a move would take the blank off the grid.
pub fn format_replay(start: &Board, moves: &[Move]) -> Option<String> {
    let mut columns = vec![("Start".to_string(), *start)];
    let mut board = *start;
    for &mv in moves {
        board = board.apply(mv)?;
        columns.push((mv.to_string(), board));
    }
    Some(format_boards(&columns))
}

/// Space-separated move names, or `(none)` for an empty path.
pub fn format_moves(moves: &[Move]) -> String {
    if moves.is_empty() {
        return "(none)".to_string();
    }
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The end-of-search report for one algorithm.
pub fn format_report(heuristic: Heuristic, outcome: &SearchOutcome) -> String {
    let stats = outcome.stats();
    let mut output = String::new();

    match outcome {
        SearchOutcome::Solved(solution) => {
            output.push_str("Goal Reached!\n");
            let _ = writeln!(output, "Nodes Expanded: {}", stats.nodes_expanded);
            let _ = writeln!(output, "Max Queue Length: {}", stats.max_frontier_size);
            let _ = writeln!(output, "Depth: {}", solution.depth);
            let _ = write!(output, "Moves: {}", format_moves(&solution.moves));
        }
        _ => {
            let reason = outcome.failure_reason().unwrap_or("no solution");
            let _ = writeln!(output, "Failure. {heuristic} stopped: {reason}");
            let _ = writeln!(output, "Nodes Expanded: {}", stats.nodes_expanded);
            let _ = write!(output, "Max Queue Length: {}", stats.max_frontier_size);
        }
    }

    output
}

/// A table with one row per algorithm.
pub fn format_comparison(results: &[(Heuristic, SearchOutcome)]) -> String {
    let name_width = results
        .iter()
        .map(|(heuristic, _)| heuristic.label().len())
        .max()
        .unwrap_or(0)
        .max("Algorithm".len());

    let mut output = format!(
        "{:<name_width$}  {:>5}  {:>8}  {:>12}",
        "Algorithm", "Depth", "Expanded", "Max Frontier"
    );
    for (heuristic, outcome) in results {
        let depth = match outcome.solution() {
            Some(solution) => solution.depth.to_string(),
            None => "-".to_string(),
        };
        let stats = outcome.stats();
        let _ = write!(
            output,
            "\n{:<name_width$}  {:>5}  {:>8}  {:>12}",
            heuristic.label(),
            depth,
            stats.nodes_expanded,
            stats.max_frontier_size
        );
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::{GOAL, MEDIUM, VERY_EASY};
    use crate::search::search;

    #[test]
    fn test_replay_snapshot() {
        let outcome = search(&VERY_EASY, &GOAL, Heuristic::ManhattanDistance);
        let solution = outcome.solution().unwrap();

        let mut output = format_replay(&VERY_EASY, &solution.moves).unwrap();
        output.push_str("\n\n");
        output.push_str(&format_report(Heuristic::ManhattanDistance, &outcome));

        insta::with_settings!({ prepend_module_to_snapshot => false }, {
            insta::assert_snapshot!("very_easy_replay", output);
        });
    }

    #[test]
    fn test_replay_wraps_long_paths() {
        let moves = [Move::Right, Move::Left].repeat(5);
        let replay = format_replay(&VERY_EASY, &moves).unwrap();
        let blocks: Vec<&str> = replay.split("\n\n").collect();
        // eleven boards: eight on the first row, three on the second
        assert_eq!(blocks.len(), 2);
        assert!(blocks[1].starts_with("Left   Right  Left"));
    }

    #[test]
    fn test_replay_rejects_illegal_move() {
        assert_eq!(format_replay(&VERY_EASY, &[Move::Left]), None);
    }

    #[test]
    fn test_report_for_unsolvable_puzzle() {
        let swapped = Board::from_grid([[2, 1, 3], [4, 5, 6], [7, 8, 0]]);
        let outcome = SearchOutcome::NoSolution(crate::search::SearchStats {
            nodes_expanded: 181_440,
            max_frontier_size: 24_054,
            nodes_generated: 181_440,
        });
        assert!(!swapped.same_parity(&GOAL));
        assert_eq!(
            format_report(Heuristic::Zero, &outcome),
            "Failure. Uniform Cost Search stopped: no solution\n\
             Nodes Expanded: 181440\n\
             Max Queue Length: 24054"
        );
    }

    #[test]
    fn test_comparison_table() {
        let results: Vec<(Heuristic, SearchOutcome)> = Heuristic::ALL
            .iter()
            .map(|&heuristic| (heuristic, search(&MEDIUM, &GOAL, heuristic)))
            .collect();
        let table = format_comparison(&results);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[1],
            "Uniform Cost Search                       4        29            18"
        );
        assert_eq!(
            lines[3],
            "A* with Manhattan Distance Heuristic      4         4             4"
        );
    }

    #[test]
    fn test_format_moves() {
        assert_eq!(format_moves(&[]), "(none)");
        assert_eq!(format_moves(&[Move::Up, Move::Left]), "Up Left");
    }
}
