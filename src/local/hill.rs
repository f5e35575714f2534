//! Steepest-ascent hill climbing.
//!
//! # Algorithm
//!
//! 1. Start from the problem's initial state
//! 2. Ask the problem for its best single move ([`OptProblem::max_action`])
//! 3. If that move does not strictly improve the current value, stop:
//!    the current state is a local maximum
//! 4. Otherwise apply it and repeat
//!
//! The objective never decreases, and the loop stops the first time no
//! strict improvement exists. No randomness is involved.

use std::time::Instant;

use tracing::info;

use super::types::{LocalSearchResult, OptProblem};
use crate::error::{Result, SearchError};

/// Hill climbing runner.
pub struct HillClimbingRunner;

impl HillClimbingRunner {
    /// Climbs from [`OptProblem::init`].
    pub fn run<P: OptProblem>(problem: &P) -> Result<LocalSearchResult<P::State>> {
        Self::run_from(problem, problem.init())
    }

    /// Climbs from an explicit starting state.
    pub fn run_from<P: OptProblem>(
        problem: &P,
        start: P::State,
    ) -> Result<LocalSearchResult<P::State>> {
        let started = Instant::now();
        let outcome = climb(problem, start)?;
        let elapsed = started.elapsed();

        info!(
            event = "hill_climbing_end",
            value = outcome.value,
            iterations = outcome.iterations,
            duration_ms = elapsed.as_millis() as u64,
        );

        Ok(LocalSearchResult {
            best: outcome.state,
            value: outcome.value,
            iterations: outcome.iterations,
            restarts: 1,
            elapsed,
        })
    }
}

/// Final state of a single climb.
pub(crate) struct Climb<S> {
    pub state: S,
    pub value: f64,
    pub iterations: usize,
}

/// Runs one climb to a local maximum.
pub(crate) fn climb<P: OptProblem>(problem: &P, start: P::State) -> Result<Climb<P::State>> {
    let mut current = start;
    let mut value = checked_objective(problem.obj_val(&current))?;
    let mut iterations = 0;

    while let Some((action, next_value)) = problem.max_action(&current) {
        let next_value = checked_objective(next_value)?;
        if next_value <= value {
            break;
        }
        current = problem.result(&current, &action);
        value = next_value;
        iterations += 1;
    }

    Ok(Climb {
        state: current,
        value,
        iterations,
    })
}

pub(crate) fn checked_objective(value: f64) -> Result<f64> {
    if value.is_nan() {
        Err(SearchError::InvalidObjective)
    } else {
        Ok(value)
    }
}
