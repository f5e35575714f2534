//! Local search by hill climbing.
//!
//! Works on a single incumbent state and its one-move neighbourhood; there
//! is no frontier and no parent chain. Problems maximize their objective.
//!
//! - [`HillClimbingRunner`]: steepest ascent until a local maximum.
//! - [`HillClimbingResetRunner`]: independent climbs from random states,
//!   keeping the best.
//!
//! Tabu Search lives in [`crate::tabu`] and shares [`OptProblem`].
//!
//! # References
//!
//! Russell & Norvig, *Artificial Intelligence: A Modern Approach*, ch. 4

mod config;
mod hill;
mod restart;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use config::RestartConfig;
pub use hill::HillClimbingRunner;
pub use restart::HillClimbingResetRunner;
pub use types::{LocalSearchResult, OptProblem};

pub(crate) use hill::checked_objective;
