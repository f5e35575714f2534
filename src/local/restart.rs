//! Hill climbing with random restarts.
//!
//! Runs `n_restarts` independent climbs, each from a state produced by
//! [`OptProblem::random_reset`], and keeps the best final state. Each climb
//! gets its own RNG seeded from a master stream before any climb starts,
//! so sequential and parallel execution return the same result.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::config::RestartConfig;
use super::hill::{climb, Climb};
use super::types::{LocalSearchResult, OptProblem};
use crate::error::{Result, SearchError};

/// Random-restart hill climbing runner.
pub struct HillClimbingResetRunner;

impl HillClimbingResetRunner {
    /// Runs all restarts and returns the best climb.
    ///
    /// Ties between restarts go to the earliest one. `iterations` is the
    /// total number of accepted moves across all climbs.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration or a NaN objective value.
    pub fn run<P: OptProblem>(
        problem: &P,
        config: &RestartConfig,
    ) -> Result<LocalSearchResult<P::State>> {
        config.validate()?;
        let started = Instant::now();

        let mut master = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let seeds: Vec<u64> = (0..config.n_restarts).map(|_| master.random()).collect();

        let climbs = run_climbs(problem, &seeds, config.parallel)?;

        let mut iterations = 0;
        let mut best: Option<Climb<P::State>> = None;
        for (restart, c) in climbs.into_iter().enumerate() {
            debug!(
                event = "restart_end",
                restart,
                value = c.value,
                iterations = c.iterations,
            );
            iterations += c.iterations;
            if best.as_ref().is_none_or(|b| c.value > b.value) {
                best = Some(c);
            }
        }

        let elapsed = started.elapsed();
        // n_restarts >= 1 was validated, so at least one climb ran.
        let best = best
            .ok_or_else(|| SearchError::InvalidConfig("n_restarts must be at least 1".into()))?;

        info!(
            event = "hill_climbing_reset_end",
            restarts = config.n_restarts,
            value = best.value,
            iterations,
            duration_ms = elapsed.as_millis() as u64,
        );

        Ok(LocalSearchResult {
            best: best.state,
            value: best.value,
            iterations,
            restarts: config.n_restarts,
            elapsed,
        })
    }
}

fn single_climb<P: OptProblem>(problem: &P, seed: u64) -> Result<Climb<P::State>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = problem.random_reset(&mut rng);
    climb(problem, start)
}

#[cfg(feature = "parallel")]
fn run_climbs<P: OptProblem>(
    problem: &P,
    seeds: &[u64],
    parallel: bool,
) -> Result<Vec<Climb<P::State>>> {
    use rayon::prelude::*;

    if parallel {
        seeds
            .par_iter()
            .map(|&seed| single_climb(problem, seed))
            .collect()
    } else {
        seeds.iter().map(|&seed| single_climb(problem, seed)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn run_climbs<P: OptProblem>(
    problem: &P,
    seeds: &[u64],
    _parallel: bool,
) -> Result<Vec<Climb<P::State>>> {
    seeds.iter().map(|&seed| single_climb(problem, seed)).collect()
}
