//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that keeps a short-term
//! memory (the tabu list) of recent moves or states. Forbidding them lets
//! the search accept non-improving moves and walk out of local maxima
//! without cycling straight back.
//!
//! Two memory shapes are supported through [`TabuPolicy`]:
//!
//! - **Action** (default): recent actions are tabu; stop after a run of
//!   non-improving moves.
//! - **State**: recently visited states are tabu; stop after a fixed
//!   number of moves.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod runner;

pub use config::{TabuConfig, TabuPolicy};
pub use memory::TabuMemory;
pub use runner::{TabuResult, TabuRunner, TabuStop};
