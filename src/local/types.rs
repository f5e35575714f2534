//! Core trait and result type for local search.

use std::time::Duration;

use rand::Rng;

/// Defines a maximization problem over a discrete neighbourhood.
///
/// The user implements state construction, objective evaluation and the
/// move set. The engines handle the search loop. Higher objective values
/// are better.
///
/// # Examples
///
/// ```ignore
/// struct Tsp { dist: Vec<Vec<f64>> }
///
/// impl OptProblem for Tsp {
///     type State = Vec<usize>;
///     type Action = (usize, usize);
///
///     fn init(&self) -> Vec<usize> { (0..self.dist.len()).collect() }
///
///     fn random_reset<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
///         let mut tour = self.init();
///         tour[1..].shuffle(rng);
///         tour
///     }
///
///     fn obj_val(&self, tour: &Vec<usize>) -> f64 {
///         -tour_length(&self.dist, tour)
///     }
///
///     fn actions(&self, tour: &Vec<usize>) -> Vec<(usize, usize)> {
///         two_opt_pairs(tour.len())
///     }
///
///     fn result(&self, tour: &Vec<usize>, &(i, j): &(usize, usize)) -> Vec<usize> {
///         let mut next = tour.clone();
///         next[i..=j].reverse();
///         next
///     }
/// }
/// ```
pub trait OptProblem: Send + Sync {
    /// State representation. Never mutated in place by the engines.
    type State: Clone + Send;

    /// A single move.
    type Action: Clone + Send;

    /// Fixed starting state.
    fn init(&self) -> Self::State;

    /// A fresh random starting state.
    fn random_reset<R: Rng>(&self, rng: &mut R) -> Self::State;

    /// Objective value. Higher is better; NaN is rejected by the engines.
    fn obj_val(&self, state: &Self::State) -> f64;

    /// Moves available from `state`.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// State reached by applying `action` to `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Best single move from `state` and the value it reaches.
    ///
    /// Ties go to the first action in [`actions`](Self::actions) order.
    /// Returns `None` when no action is available. Override when the
    /// value of a move can be computed incrementally.
    fn max_action(&self, state: &Self::State) -> Option<(Self::Action, f64)> {
        let mut best: Option<(Self::Action, f64)> = None;
        for action in self.actions(state) {
            let value = self.obj_val(&self.result(state, &action));
            if best.as_ref().is_none_or(|(_, v)| value > *v) {
                best = Some((action, value));
            }
        }
        best
    }

    /// All `(action, state)` pairs one move away from `state`.
    fn successors(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)> {
        self.actions(state)
            .into_iter()
            .map(|action| {
                let next = self.result(state, &action);
                (action, next)
            })
            .collect()
    }
}

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
pub struct LocalSearchResult<S: Clone> {
    /// Best state found.
    pub best: S,

    /// Objective value of `best`.
    pub value: f64,

    /// Accepted moves, summed over all restarts.
    pub iterations: usize,

    /// Number of independent climbs performed.
    pub restarts: usize,

    /// Wall-clock duration of the whole run.
    pub elapsed: Duration,
}
