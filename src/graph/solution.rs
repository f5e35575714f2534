//! Terminal results of a graph search run.

use std::collections::HashSet;
use std::hash::Hash;

use super::node::{NodeArena, NodeId};

/// Counters collected during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose neighbours were generated.
    pub expanded: usize,
    /// Child nodes pushed onto the frontier.
    pub generated: usize,
    /// Popped nodes dropped because their state was already explored.
    /// Always zero under eager duplicate suppression.
    pub discarded: usize,
}

/// A path from start to goal.
#[derive(Debug, Clone)]
pub struct Solution<S, A> {
    arena: NodeArena<S, A>,
    goal: NodeId,
    explored: HashSet<S>,
    stats: SearchStats,
}

impl<S, A> Solution<S, A> {
    pub(crate) fn new(
        arena: NodeArena<S, A>,
        goal: NodeId,
        explored: HashSet<S>,
        stats: SearchStats,
    ) -> Self {
        Self {
            arena,
            goal,
            explored,
            stats,
        }
    }

    /// States from start to goal, inclusive.
    pub fn states(&self) -> Vec<&S> {
        self.arena
            .lineage(self.goal)
            .into_iter()
            .map(|id| self.arena.get(id).state())
            .collect()
    }

    /// Actions from start to goal. One fewer than [`states`](Self::states).
    pub fn actions(&self) -> Vec<&A> {
        self.arena
            .lineage(self.goal)
            .into_iter()
            .filter_map(|id| self.arena.get(id).action())
            .collect()
    }

    /// `(action, state)` pairs from start to goal. The start has no action.
    pub fn path(&self) -> Vec<(Option<&A>, &S)> {
        self.arena
            .lineage(self.goal)
            .into_iter()
            .map(|id| {
                let node = self.arena.get(id);
                (node.action(), node.state())
            })
            .collect()
    }

    /// Number of steps. Zero when start equals goal.
    pub fn len(&self) -> usize {
        self.arena.lineage(self.goal).len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total path cost.
    pub fn cost(&self) -> f64 {
        self.arena.get(self.goal).cost()
    }

    pub fn goal(&self) -> &S {
        self.arena.get(self.goal).state()
    }

    pub fn explored(&self) -> &HashSet<S> {
        &self.explored
    }

    pub fn explored_count(&self) -> usize {
        self.explored.len()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Evidence that the goal is unreachable.
#[derive(Debug, Clone)]
pub struct NoSolution<S> {
    explored: HashSet<S>,
    stats: SearchStats,
}

impl<S> NoSolution<S> {
    pub(crate) fn new(explored: HashSet<S>, stats: SearchStats) -> Self {
        Self { explored, stats }
    }

    pub fn explored(&self) -> &HashSet<S> {
        &self.explored
    }

    pub fn explored_count(&self) -> usize {
        self.explored.len()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Outcome of a graph search: a path, or proof that none exists.
#[derive(Debug, Clone)]
pub enum SearchOutcome<S, A> {
    Solved(Solution<S, A>),
    NoSolution(NoSolution<S>),
}

impl<S: Eq + Hash, A> SearchOutcome<S, A> {
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }

    pub fn solution(&self) -> Option<&Solution<S, A>> {
        match self {
            SearchOutcome::Solved(s) => Some(s),
            SearchOutcome::NoSolution(_) => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution<S, A>> {
        match self {
            SearchOutcome::Solved(s) => Some(s),
            SearchOutcome::NoSolution(_) => None,
        }
    }

    pub fn explored(&self) -> &HashSet<S> {
        match self {
            SearchOutcome::Solved(s) => s.explored(),
            SearchOutcome::NoSolution(n) => n.explored(),
        }
    }

    pub fn explored_count(&self) -> usize {
        self.explored().len()
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            SearchOutcome::Solved(s) => s.stats(),
            SearchOutcome::NoSolution(n) => n.stats(),
        }
    }
}
