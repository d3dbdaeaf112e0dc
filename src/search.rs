//! Best-first graph search shared by uniform cost search and A*.
//!
//! The frontier is ordered by `path_cost + heuristic`, ties broken by push
//! order. Each board keeps the cheapest path cost queued for it so far; a
//! cheaper path queues it again, and stale entries for boards that were
//! already expanded are skipped when popped. With the zero heuristic this is
//! uniform cost search; with an admissible, consistent heuristic it is A*, and
//! either way the first goal popped lies at the end of a shortest path.
//!
//! Every generated node is kept in an arena for the duration of the search,
//! so the solution path is rebuilt by following parent indices.

use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::board::Board;
use crate::frontier::Frontier;
use crate::heuristic::{Heuristic, HeuristicEvaluator};
use crate::moves::{neighbors, Move};
use crate::node::{Node, NodeArena};

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and expanded (the goal node is not counted).
    pub nodes_expanded: u64,
    /// Largest frontier size observed before a pop, stale entries included.
    pub max_frontier_size: usize,
    /// Nodes created, including the root and any board queued again on a
    /// cheaper path.
    pub nodes_generated: u64,
}

/// A shortest move sequence from start to goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub moves: Vec<Move>,
    pub depth: u32,
    pub stats: SearchStats,
}

/// Why a search ended before reaching a verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    ExpansionLimit,
    DeadlineExceeded,
    /// The observer asked to stop.
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved(Solution),
    /// The frontier ran out: the goal is unreachable from the start.
    NoSolution(SearchStats),
    Stopped {
        reason: StopReason,
        stats: SearchStats,
    },
}

impl SearchOutcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Solved(solution) => &solution.stats,
            SearchOutcome::NoSolution(stats) | SearchOutcome::Stopped { stats, .. } => stats,
        }
    }

    /// Human-readable reason for an unsuccessful search.
    pub fn failure_reason(&self) -> Option<&'static str> {
        match self {
            SearchOutcome::Solved(_) => None,
            SearchOutcome::NoSolution(_) => Some("no solution"),
            SearchOutcome::Stopped { reason, .. } => Some(match reason {
                StopReason::ExpansionLimit => "expansion limit reached",
                StopReason::DeadlineExceeded => "deadline exceeded",
                StopReason::Cancelled => "cancelled",
            }),
        }
    }
}

/// Limits checked once per expansion. The default is unlimited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Stop after this many expansions.
    pub max_expansions: Option<u64>,
    /// Stop once this instant has passed.
    pub deadline: Option<Instant>,
}

impl SearchOptions {
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Sets the deadline to `timeout` from now.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    fn check(&self, stats: &SearchStats) -> Option<StopReason> {
        if self
            .max_expansions
            .is_some_and(|limit| stats.nodes_expanded >= limit)
        {
            return Some(StopReason::ExpansionLimit);
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Some(StopReason::DeadlineExceeded);
        }
        None
    }
}

/// A node about to be expanded, as reported to a [`SearchObserver`].
#[derive(Clone, Copy, Debug)]
pub struct Expansion<'a> {
    pub board: &'a Board,
    /// Frontier priority the node was popped with.
    pub priority: u32,
    pub path_cost: u32,
    pub depth: u32,
    /// Counters before this expansion is counted.
    pub stats: &'a SearchStats,
}

/// Hook invoked once per expansion.
///
/// Returning `ControlFlow::Break(())` stops the search with
/// [`StopReason::Cancelled`].
pub trait SearchObserver {
    fn on_expand(&mut self, expansion: &Expansion<'_>) -> ControlFlow<()>;
}

/// The no-op observer.
impl SearchObserver for () {
    fn on_expand(&mut self, _expansion: &Expansion<'_>) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// Runs a search to completion with no limits and no observer.
pub fn search(start: &Board, goal: &Board, heuristic: Heuristic) -> SearchOutcome {
    search_with(start, goal, heuristic, &SearchOptions::default(), &mut ())
}

/// Runs a search with limits and an observer.
pub fn search_with(
    start: &Board,
    goal: &Board,
    heuristic: Heuristic,
    options: &SearchOptions,
    observer: &mut dyn SearchObserver,
) -> SearchOutcome {
    BestFirstSearch::new(start, goal, heuristic).run(options, observer)
}

/// State owned by one search invocation.
///
/// Nothing is shared between instances, so independent searches may run on
/// separate threads.
pub struct BestFirstSearch {
    goal: Board,
    evaluator: HeuristicEvaluator,
    arena: NodeArena,
    frontier: Frontier,
    /// Cheapest path cost queued so far for each board.
    best_cost: FxHashMap<Board, u32>,
    expanded: FxHashSet<Board>,
    stats: SearchStats,
}

impl BestFirstSearch {
    /// Seeds the frontier with the start board.
    pub fn new(start: &Board, goal: &Board, heuristic: Heuristic) -> Self {
        let evaluator = HeuristicEvaluator::new(heuristic, goal);
        let mut search = Self {
            goal: *goal,
            evaluator,
            arena: NodeArena::new(),
            frontier: Frontier::new(),
            best_cost: FxHashMap::default(),
            expanded: FxHashSet::default(),
            stats: SearchStats::default(),
        };

        let root = search.arena.alloc(Node::root(*start));
        search.frontier.push(root, evaluator.estimate(start));
        search.best_cost.insert(*start, 0);
        search.stats.nodes_generated = 1;
        search
    }

    /// Pops and expands nodes until the goal is found, the frontier is
    /// exhausted, or a limit or the observer stops the search.
    pub fn run(
        mut self,
        options: &SearchOptions,
        observer: &mut dyn SearchObserver,
    ) -> SearchOutcome {
        loop {
            self.stats.max_frontier_size = self.stats.max_frontier_size.max(self.frontier.len());

            let Some((key, node_id)) = self.frontier.pop() else {
                return SearchOutcome::NoSolution(self.stats);
            };
            let node = *self.arena.get(node_id);
            if self.expanded.contains(&node.board) {
                continue;
            }

            if node.board == self.goal {
                return SearchOutcome::Solved(Solution {
                    moves: self.arena.path_to(node_id),
                    depth: node.depth,
                    stats: self.stats,
                });
            }

            if let Some(reason) = options.check(&self.stats) {
                return self.stopped(reason);
            }
            let expansion = Expansion {
                board: &node.board,
                priority: key.priority,
                path_cost: node.path_cost,
                depth: node.depth,
                stats: &self.stats,
            };
            if observer.on_expand(&expansion).is_break() {
                return self.stopped(StopReason::Cancelled);
            }

            self.expanded.insert(node.board);
            self.stats.nodes_expanded += 1;

            for &(board, mv) in &neighbors(&node.board) {
                if self.expanded.contains(&board) {
                    continue;
                }
                let child = Node::child(&node, node_id, board, mv);
                if self
                    .best_cost
                    .get(&board)
                    .is_some_and(|&cost| cost <= child.path_cost)
                {
                    continue;
                }
                self.best_cost.insert(board, child.path_cost);
                let priority = child.path_cost + self.evaluator.estimate(&board);
                let child_id = self.arena.alloc(child);
                self.frontier.push(child_id, priority);
                self.stats.nodes_generated += 1;
            }
        }
    }

    fn stopped(self, reason: StopReason) -> SearchOutcome {
        SearchOutcome::Stopped {
            reason,
            stats: self.stats,
        }
    }
}
