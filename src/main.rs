//! Eight Puzzle Solver
//!
//! Solves the 3x3 sliding tile puzzle with uniform cost search or A*, starting
//! from a built-in puzzle or a board given on the command line, and reports
//! the solution path together with search statistics.

use std::ops::ControlFlow;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};

use eight_puzzle::presets::{self, Preset};
use eight_puzzle::render::{format_boards, format_comparison, format_replay, format_report};
use eight_puzzle::{
    search_with, Board, Expansion, Heuristic, Puzzle, SearchObserver, SearchOptions,
};

/// Exit status when the search proves the goal unreachable or gives up.
const EXIT_NO_SOLUTION: u8 = 2;

/// Solves the 8-puzzle with uniform cost search or A*.
#[derive(Parser)]
#[command(name = "eight-puzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve one puzzle with one algorithm.
    Solve(SolveArgs),
    /// Solve one puzzle with every algorithm and compare statistics.
    Compare(PuzzleArgs),
    /// List the built-in puzzles.
    Presets,
}

/// Selects the start and goal boards.
#[derive(Args)]
struct PuzzleArgs {
    /// Built-in puzzle: trivial, very-easy, easy, medium, difficult (or 1-5).
    #[arg(long, value_parser = parse_preset, conflicts_with = "board")]
    preset: Option<Preset>,

    /// Custom start board as nine values, e.g. "1 2 3 4 5 6 0 7 8" (0 is the blank).
    #[arg(long)]
    board: Option<Board>,

    /// Goal board; defaults to "1 2 3 4 5 6 7 8 0".
    #[arg(long)]
    goal: Option<Board>,

    /// Stop after this many node expansions.
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Stop after this many milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,
}

#[derive(Args)]
struct SolveArgs {
    #[command(flatten)]
    puzzle: PuzzleArgs,

    /// Algorithm: ucs, misplaced or manhattan (or 1-3).
    #[arg(short, long, default_value = "manhattan")]
    algorithm: Heuristic,

    /// Print every expanded state to stderr.
    #[arg(long)]
    trace: bool,

    /// Print the boards along the solution.
    #[arg(long)]
    replay: bool,
}

fn parse_preset(name: &str) -> Result<Preset, String> {
    Preset::find(name).ok_or_else(|| {
        let names: Vec<&str> = Preset::ALL.iter().map(|preset| preset.name()).collect();
        format!("unknown preset {name:?} (expected one of: {})", names.join(", "))
    })
}

impl PuzzleArgs {
    fn puzzle(&self) -> Puzzle {
        let start = match (self.preset, self.board) {
            (_, Some(board)) => board,
            (Some(preset), None) => preset.board(),
            (None, None) => Preset::VeryEasy.board(),
        };
        Puzzle::new(start, self.goal.unwrap_or(presets::GOAL))
    }

    fn options(&self) -> SearchOptions {
        let mut options = SearchOptions::default();
        if let Some(max_expansions) = self.max_expansions {
            options = options.with_max_expansions(max_expansions);
        }
        if let Some(timeout_ms) = self.timeout_ms {
            options = options.with_timeout(Duration::from_millis(timeout_ms));
        }
        options
    }
}

/// Prints each state as it is expanded, with its frontier priority.
struct TraceObserver;

impl SearchObserver for TraceObserver {
    fn on_expand(&mut self, expansion: &Expansion<'_>) -> ControlFlow<()> {
        eprintln!(
            "Expanding state {} (cost {}, priority {}):",
            expansion.stats.nodes_expanded + 1,
            expansion.path_cost,
            expansion.priority
        );
        eprintln!("{}\n", expansion.board);
        ControlFlow::Continue(())
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve(args)) => Ok(exit_code(run_solve(&args)?)),
        Some(Command::Compare(args)) => Ok(exit_code(run_compare(&args))),
        Some(Command::Presets) => {
            println!("{}", presets_listing());
            Ok(ExitCode::SUCCESS)
        }
        None => {
            // default: the very easy puzzle with Manhattan A*
            Ok(exit_code(run_solve(&SolveArgs::default_run())?))
        }
    }
}

fn exit_code(solved: bool) -> ExitCode {
    if solved {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_NO_SOLUTION)
    }
}

impl SolveArgs {
    fn default_run() -> Self {
        Self {
            puzzle: PuzzleArgs {
                preset: Some(Preset::VeryEasy),
                board: None,
                goal: None,
                max_expansions: None,
                timeout_ms: None,
            },
            algorithm: Heuristic::ManhattanDistance,
            trace: false,
            replay: true,
        }
    }
}

/// Solves one puzzle and prints the report. Returns whether a solution was found.
fn run_solve(args: &SolveArgs) -> anyhow::Result<bool> {
    let puzzle = args.puzzle.puzzle();
    let options = args.puzzle.options();

    println!("Start:\n{}\n", puzzle.start);
    if puzzle.goal != presets::GOAL {
        println!("Goal:\n{}\n", puzzle.goal);
    }
    if !puzzle.is_solvable() {
        eprintln!("Start and goal have different parity; the search will exhaust the state space.");
    }
    println!("Now working on the puzzle with {}...", args.algorithm);

    let outcome = if args.trace {
        search_with(&puzzle.start, &puzzle.goal, args.algorithm, &options, &mut TraceObserver)
    } else {
        search_with(&puzzle.start, &puzzle.goal, args.algorithm, &options, &mut ())
    };

    println!("{}", format_report(args.algorithm, &outcome));

    let Some(solution) = outcome.solution() else {
        return Ok(false);
    };
    if args.replay {
        let replay = format_replay(&puzzle.start, &solution.moves)
            .context("solution contains a move off the board")?;
        println!("\n{replay}");
    }
    if puzzle.start.apply_all(&solution.moves) != Some(puzzle.goal) {
        bail!("solution does not reach the goal");
    }

    Ok(true)
}

/// Runs all three algorithms on one puzzle and prints a table.
fn run_compare(args: &PuzzleArgs) -> bool {
    let puzzle = args.puzzle();
    let results = puzzle.solve_all(&args.options());

    println!("Start:\n{}\n", puzzle.start);
    println!("{}", format_comparison(&results));

    results.iter().all(|(_, outcome)| outcome.is_solved())
}

/// The built-in puzzles side by side, labelled with their menu numbers.
fn presets_listing() -> String {
    let columns: Vec<(String, Board)> = Preset::ALL
        .iter()
        .enumerate()
        .map(|(index, preset)| (format!("[{}]", index + 1), preset.board()))
        .collect();
    let names: Vec<String> = Preset::ALL
        .iter()
        .enumerate()
        .map(|(index, preset)| format!("[{}] {}", index + 1, preset.name()))
        .collect();
    format!("{}\n\n{}", names.join("\n"), format_boards(&columns))
}
