//! Graph search and local search engines.
//!
//! Two independent engine families:
//!
//! - **Graph search** ([`graph`]): shortest-path discovery over a grid-like
//!   state space. Depth-First, Breadth-First, Uniform-Cost, Greedy
//!   Best-First and A* all run through one expand loop parameterized by a
//!   frontier policy, a priority key and a duplicate-suppression policy.
//! - **Local search** ([`local`], [`tabu`]): maximization over a
//!   permutation-style state space. Hill climbing, hill climbing with
//!   random restarts, and Tabu Search.
//!
//! # Architecture
//!
//! The grid and the optimization problem are external collaborators,
//! consumed through the [`graph::GridProblem`] and [`local::OptProblem`]
//! traits. Every run owns its frontier, explored set and incumbent; no
//! state is shared between runs.

pub mod error;
pub mod graph;
pub mod local;
pub mod tabu;

pub use error::{Result, SearchError};
