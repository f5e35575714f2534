//! The shared graph search loop.
//!
//! # Algorithm
//!
//! 1. Build the root node from `start` (cost 0, no parent)
//! 2. If `start == end`, return a zero-length solution
//! 3. Mark the root explored (eager policy) and push it
//! 4. Loop until the frontier is empty:
//!    a. Pop a node. Under the lazy policy, drop it if its state is
//!    already explored, otherwise mark it
//!    b. If the node holds the goal, return the reconstructed path
//!    c. For every neighbour not yet explored, build a child node, mark it
//!    explored (eager policy) and push it with the algorithm's priority
//! 5. Frontier exhausted: no solution
//!
//! The explored set only grows, and the state space is finite, so every
//! run terminates.

use std::collections::HashSet;
use std::time::Instant;

use tracing::{info, trace};

use super::config::{Algorithm, DuplicatePolicy, FrontierKind};
use super::frontier::{Frontier, PriorityQueueFrontier, QueueFrontier, StackFrontier};
use super::node::{Node, NodeArena};
use super::solution::{NoSolution, SearchOutcome, SearchStats, Solution};
use super::types::GridProblem;
use crate::error::{Result, SearchError};

/// Graph search runner.
pub struct GraphSearchRunner;

impl GraphSearchRunner {
    /// Searches `problem` from its start to its end state.
    ///
    /// # Errors
    ///
    /// Fails when the problem hands back a negative or non-finite step
    /// cost or heuristic value. An unreachable goal is not an error; it
    /// yields [`SearchOutcome::NoSolution`].
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let outcome = GraphSearchRunner::run(&maze, Algorithm::AStar)?;
    /// if let Some(solution) = outcome.solution() {
    ///     println!("cost {} over {} steps", solution.cost(), solution.len());
    /// }
    /// ```
    pub fn run<P: GridProblem>(
        problem: &P,
        algorithm: Algorithm,
    ) -> Result<SearchOutcome<P::State, P::Action>> {
        match algorithm.frontier_kind() {
            FrontierKind::Stack => Self::run_with_frontier(problem, algorithm, StackFrontier::new()),
            FrontierKind::Queue => Self::run_with_frontier(problem, algorithm, QueueFrontier::new()),
            FrontierKind::PriorityQueue => {
                Self::run_with_frontier(problem, algorithm, PriorityQueueFrontier::new())
            }
        }
    }

    /// Like [`run`](Self::run), but with a caller-supplied frontier.
    ///
    /// The algorithm still decides priorities and the duplicate policy.
    /// Nodes already in the frontier can only be roots, since
    /// [`Node::root`] is the only public constructor; they are searched as
    /// extra starting points and are not marked explored up front.
    pub fn run_with_frontier<P, F>(
        problem: &P,
        algorithm: Algorithm,
        mut frontier: F,
    ) -> Result<SearchOutcome<P::State, P::Action>>
    where
        P: GridProblem,
        F: Frontier<P::State, P::Action>,
    {
        let started = Instant::now();
        let key = algorithm.priority_key();
        let policy = algorithm.duplicate_policy();

        let goal = problem.end();
        let root = Node::root(problem.start());

        let mut explored: HashSet<P::State> = HashSet::new();
        let mut arena = NodeArena::new();
        let mut stats = SearchStats::default();

        info!(event = "search_start", algorithm = algorithm.name());

        if root.state() == &goal {
            explored.insert(root.state().clone());
            let id = arena.insert(root);
            let solution = Solution::new(arena, id, explored, stats);
            log_end(algorithm, Some(solution.cost()), &stats, solution.explored_count(), started);
            return Ok(SearchOutcome::Solved(solution));
        }

        if policy == DuplicatePolicy::Eager {
            explored.insert(root.state().clone());
        }
        let h = if key.uses_heuristic() {
            checked_heuristic(problem, root.state(), &goal)?
        } else {
            0.0
        };
        frontier.add(root, key.priority(0.0, h));

        while !frontier.is_empty() {
            let node = frontier.pop()?;

            if policy == DuplicatePolicy::Lazy {
                if explored.contains(node.state()) {
                    stats.discarded += 1;
                    continue;
                }
                explored.insert(node.state().clone());
            }

            let is_goal = node.state() == &goal;
            let id = arena.insert(node);
            if is_goal {
                let solution = Solution::new(arena, id, explored, stats);
                log_end(algorithm, Some(solution.cost()), &stats, solution.explored_count(), started);
                return Ok(SearchOutcome::Solved(solution));
            }

            stats.expanded += 1;
            let parent = arena.get(id);
            let g = parent.cost();
            let neighbours = problem.neighbours(parent.state());
            trace!(node = id.index(), g, neighbours = neighbours.len(), "expand");

            for (action, next) in neighbours {
                if explored.contains(&next) {
                    continue;
                }
                let g_next = g + checked_cost(problem, &next)?;
                let h = if key.uses_heuristic() {
                    checked_heuristic(problem, &next, &goal)?
                } else {
                    0.0
                };
                if policy == DuplicatePolicy::Eager {
                    explored.insert(next.clone());
                }
                frontier.add(Node::child(next, g_next, id, action), key.priority(g_next, h));
                stats.generated += 1;
            }
        }

        log_end(algorithm, None, &stats, explored.len(), started);
        Ok(SearchOutcome::NoSolution(NoSolution::new(explored, stats)))
    }
}

fn checked_cost<P: GridProblem>(problem: &P, state: &P::State) -> Result<f64> {
    let cost = problem.cost(state);
    if cost.is_finite() && cost >= 0.0 {
        Ok(cost)
    } else {
        Err(SearchError::InvalidCost { cost })
    }
}

fn checked_heuristic<P: GridProblem>(problem: &P, state: &P::State, goal: &P::State) -> Result<f64> {
    let value = problem.heuristic(state, goal);
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SearchError::InvalidHeuristic { value })
    }
}

fn log_end(
    algorithm: Algorithm,
    cost: Option<f64>,
    stats: &SearchStats,
    explored: usize,
    started: Instant,
) {
    info!(
        event = "search_end",
        algorithm = algorithm.name(),
        solved = cost.is_some(),
        cost = cost.unwrap_or(f64::NAN),
        explored,
        expanded = stats.expanded,
        generated = stats.generated,
        discarded = stats.discarded,
        duration_ms = started.elapsed().as_millis() as u64,
    );
}
