//! Graph search over grid-like state spaces.
//!
//! Depth-First, Breadth-First, Uniform-Cost, Greedy Best-First and A*
//! share a single expand loop ([`GraphSearchRunner`]). An [`Algorithm`]
//! value selects the frontier order, the priority key and the duplicate
//! suppression policy.
//!
//! # References
//!
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, ch. 3

mod config;
mod frontier;
mod node;
mod runner;
mod solution;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{Algorithm, DuplicatePolicy, FrontierKind, PriorityKey};
pub use frontier::{Frontier, Priority, PriorityQueueFrontier, QueueFrontier, StackFrontier};
pub use node::{Node, NodeId};
pub use runner::GraphSearchRunner;
pub use solution::{NoSolution, SearchOutcome, SearchStats, Solution};
pub use types::{GridProblem, Manhattan};
