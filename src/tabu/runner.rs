//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from [`OptProblem::init`]; it is both current and best
//! 2. At each iteration:
//!    a. Generate every one-move successor of the current state
//!    b. Drop successors that are tabu (by action or by state, depending on
//!    the policy), unless aspiration admits them
//!    c. Move to the highest-valued survivor, even if it is worse than the
//!    current state; ties go to the first successor
//!    d. Record the move (or the new state) in the tabu memory
//!    e. Update the best-ever state if strictly improved
//! 3. Terminate on the policy's stopping bound or when no successor
//!    survives
//!
//! The best-ever value is tracked separately from the current state, so
//! it never decreases.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

use std::hash::Hash;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::config::{TabuConfig, TabuPolicy};
use super::memory::TabuMemory;
use crate::error::Result;
use crate::local::{checked_objective, OptProblem};

/// Why a Tabu Search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabuStop {
    /// `max_stall` consecutive moves without improving the best value.
    Stalled,
    /// `max_iterations` moves were made.
    IterationLimit,
    /// Every successor was tabu, or the state had no successors.
    NoCandidates,
}

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult<S: Clone> {
    /// Best state found.
    pub best: S,
    /// Objective value of the best state.
    pub value: f64,
    /// Total moves made.
    pub iterations: usize,
    /// Move count at which the best state was found (0 = initial state).
    pub best_iteration: usize,
    /// Best value after each move.
    pub value_history: Vec<f64>,
    /// Stopping reason.
    pub stop: TabuStop,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search on the given problem.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration or a NaN objective value.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use u_search::local::OptProblem;
    /// use u_search::tabu::{TabuConfig, TabuRunner};
    /// use rand::Rng;
    ///
    /// struct Counter;
    /// impl OptProblem for Counter {
    ///     type State = i32;
    ///     type Action = i32;
    ///     fn init(&self) -> i32 { 0 }
    ///     fn random_reset<R: Rng>(&self, rng: &mut R) -> i32 { rng.random_range(-10..10) }
    ///     fn obj_val(&self, &x: &i32) -> f64 { -f64::from((x - 5) * (x - 5)) }
    ///     fn actions(&self, _x: &i32) -> Vec<i32> { vec![-1, 1] }
    ///     fn result(&self, &x: &i32, &step: &i32) -> i32 { x + step }
    /// }
    ///
    /// let config = TabuConfig::default().with_aspiration(true);
    /// let result = TabuRunner::run(&Counter, &config).unwrap();
    /// assert_eq!(result.best, 5);
    /// ```
    pub fn run<P>(problem: &P, config: &TabuConfig) -> Result<TabuResult<P::State>>
    where
        P: OptProblem,
        P::State: Eq + Hash,
        P::Action: Eq + Hash,
    {
        config.validate()?;
        let started = Instant::now();

        let mut current = problem.init();
        let mut best = current.clone();
        let mut best_value = checked_objective(problem.obj_val(&current))?;
        let mut best_iteration = 0;

        let mut action_memory: TabuMemory<P::Action> = TabuMemory::new(config.tenure);
        let mut state_memory: TabuMemory<P::State> = TabuMemory::new(config.tenure);
        if config.policy == TabuPolicy::State {
            state_memory.push(current.clone());
        }

        let mut value_history = Vec::new();
        let mut iterations = 0;
        let mut stall = 0;

        let stop = loop {
            match config.policy {
                TabuPolicy::Action if stall >= config.max_stall => break TabuStop::Stalled,
                TabuPolicy::State if iterations >= config.max_iterations => {
                    break TabuStop::IterationLimit
                }
                _ => {}
            }

            // Best admissible successor
            let mut chosen: Option<(P::Action, P::State, f64)> = None;
            for (action, next) in problem.successors(&current) {
                let value = checked_objective(problem.obj_val(&next))?;
                let is_tabu = match config.policy {
                    TabuPolicy::Action => action_memory.contains(&action),
                    TabuPolicy::State => state_memory.contains(&next),
                };
                if is_tabu && !(config.aspiration && value > best_value) {
                    continue;
                }
                if chosen.as_ref().is_none_or(|(_, _, v)| value > *v) {
                    chosen = Some((action, next, value));
                }
            }

            let Some((action, next, value)) = chosen else {
                break TabuStop::NoCandidates;
            };

            iterations += 1;
            match config.policy {
                TabuPolicy::Action => action_memory.push(action),
                TabuPolicy::State => state_memory.push(next.clone()),
            }

            if value > best_value {
                best = next.clone();
                best_value = value;
                best_iteration = iterations;
                stall = 0;
                debug!(event = "tabu_best", iteration = iterations, value);
            } else {
                stall += 1;
            }

            current = next;
            value_history.push(best_value);
        };

        let elapsed = started.elapsed();
        info!(
            event = "tabu_end",
            policy = ?config.policy,
            stop = ?stop,
            value = best_value,
            iterations,
            best_iteration,
            duration_ms = elapsed.as_millis() as u64,
        );

        Ok(TabuResult {
            best,
            value: best_value,
            iterations,
            best_iteration,
            value_history,
            stop,
            elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local::testing::{Line, Tsp};
    use crate::local::HillClimbingRunner;
    use crate::SearchError;

    #[test]
    fn test_state_policy_escapes_local_maximum() {
        let line = Line::two_peaks();
        let hill = HillClimbingRunner::run(&line).unwrap();
        assert_eq!(hill.best, 2);

        let config = TabuConfig::default()
            .with_policy(TabuPolicy::State)
            .with_tenure(10)
            .with_max_iterations(100);
        let result = TabuRunner::run(&line, &config).unwrap();

        assert_eq!(result.best, 6);
        assert_eq!(result.value, 5.0);
        assert_eq!(result.best_iteration, 6);
        assert_eq!(result.iterations, 7);
        assert_eq!(result.stop, TabuStop::NoCandidates);
    }

    #[test]
    fn test_state_policy_iteration_limit() {
        let line = Line::two_peaks();
        let config = TabuConfig::default()
            .with_policy(TabuPolicy::State)
            .with_tenure(10)
            .with_max_iterations(4);
        let result = TabuRunner::run(&line, &config).unwrap();

        assert_eq!(result.iterations, 4);
        assert_eq!(result.stop, TabuStop::IterationLimit);
        assert_eq!(result.best, 2);
        assert_eq!(result.value_history, vec![1.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_action_policy_stall_termination() {
        // 0 -> 1 -> 2 improve; then the walk bounces between 1 and 2.
        let line = Line::two_peaks();
        let config = TabuConfig::default()
            .with_tenure(1)
            .with_max_stall(3)
            .with_aspiration(true);
        let result = TabuRunner::run(&line, &config).unwrap();

        assert_eq!(result.stop, TabuStop::Stalled);
        assert_eq!(result.iterations, 5);
        assert_eq!(result.best, 2);
        assert_eq!(result.best_iteration, 2);
    }

    #[test]
    fn test_aspiration_helps() {
        let line = Line::two_peaks();
        let base = TabuConfig::default().with_tenure(1).with_max_stall(10);
        let with = TabuRunner::run(&line, &base.clone().with_aspiration(true)).unwrap();
        let without = TabuRunner::run(&line, &base.with_aspiration(false)).unwrap();

        assert_eq!(without.value, 1.0);
        assert_eq!(with.value, 2.0);
        assert!(with.value >= without.value);
    }

    #[test]
    fn test_never_worse_than_hill_climbing() {
        for seed in 0..5 {
            let tsp = Tsp::random(10, seed);
            let hill = HillClimbingRunner::run(&tsp).unwrap();
            let config = TabuConfig::default()
                .with_max_stall(200)
                .with_aspiration(true);
            let tabu = TabuRunner::run(&tsp, &config).unwrap();
            assert!(
                tabu.value >= hill.value,
                "seed {seed}: tabu {} < hill {}",
                tabu.value,
                hill.value
            );
        }
    }

    #[test]
    fn test_default_filters_tabu_moves_strictly() {
        // 0 -> 1, then Right is tabu even though it leads to the peak at 2.
        let line = Line::two_peaks();
        let config = TabuConfig::default().with_tenure(1).with_max_stall(10);
        let result = TabuRunner::run(&line, &config).unwrap();
        assert!(!config.aspiration);
        assert_eq!(result.best, 1);
        assert_eq!(result.value, 1.0);
    }

    #[test]
    fn test_value_history_non_decreasing() {
        let tsp = Tsp::random(9, 8);
        let config = TabuConfig::default()
            .with_policy(TabuPolicy::State)
            .with_max_iterations(150);
        let result = TabuRunner::run(&tsp, &config).unwrap();

        assert_eq!(result.value_history.len(), result.iterations);
        for window in result.value_history.windows(2) {
            assert!(window[1] >= window[0]);
        }
        assert!((result.value + tsp.tour_length(&result.best)).abs() < 1e-9);
    }

    #[test]
    fn test_accepts_worsening_moves() {
        let line = Line::two_peaks();
        let config = TabuConfig::default()
            .with_policy(TabuPolicy::State)
            .with_tenure(10)
            .with_max_iterations(5);
        let result = TabuRunner::run(&line, &config).unwrap();
        // Moves 3..5 walk downhill from the local peak at index 2.
        assert_eq!(result.best, 2);
        assert_eq!(result.iterations, 5);
        assert_eq!(result.best_iteration, 2);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let line = Line::two_peaks();
        let config = TabuConfig::default().with_max_stall(0);
        assert!(matches!(
            TabuRunner::run(&line, &config),
            Err(SearchError::InvalidConfig(_))
        ));
    }
}
