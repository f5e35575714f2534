//! Local search fixtures: a small TSP and a one-dimensional landscape.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::OptProblem;

/// Symmetric TSP. The tour is a permutation starting at city 0 and the
/// objective is the negated closed-tour length.
#[derive(Debug, Clone)]
pub struct Tsp {
    dist: Vec<Vec<f64>>,
}

impl Tsp {
    /// `n` cities placed uniformly in the unit square.
    pub fn random(n: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let points: Vec<(f64, f64)> = (0..n)
            .map(|_| (rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
            .collect();
        let dist = points
            .iter()
            .map(|a| {
                points
                    .iter()
                    .map(|b| ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt())
                    .collect()
            })
            .collect();
        Self { dist }
    }

    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        let n = tour.len();
        (0..n).map(|i| self.dist[tour[i]][tour[(i + 1) % n]]).sum()
    }
}

impl OptProblem for Tsp {
    type State = Vec<usize>;
    /// 2-opt move: reverse `tour[i..=j]`.
    type Action = (usize, usize);

    fn init(&self) -> Vec<usize> {
        (0..self.len()).collect()
    }

    fn random_reset<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let mut tour = self.init();
        tour[1..].shuffle(rng);
        tour
    }

    fn obj_val(&self, tour: &Vec<usize>) -> f64 {
        -self.tour_length(tour)
    }

    fn actions(&self, tour: &Vec<usize>) -> Vec<(usize, usize)> {
        let n = tour.len();
        let mut out = Vec::new();
        for i in 1..n {
            for j in (i + 1)..n {
                out.push((i, j));
            }
        }
        out
    }

    fn result(&self, tour: &Vec<usize>, &(i, j): &(usize, usize)) -> Vec<usize> {
        let mut next = tour.clone();
        next[i..=j].reverse();
        next
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Left,
    Right,
}

/// Walk along a line of fixed values. Moves go one cell left or right.
#[derive(Debug, Clone)]
pub struct Line {
    pub values: Vec<f64>,
    pub start: usize,
}

impl Line {
    /// Local maximum at index 2, global maximum at index 6.
    pub fn two_peaks() -> Self {
        Self {
            values: vec![0.0, 1.0, 2.0, 1.0, 0.0, 1.0, 5.0, 4.0],
            start: 0,
        }
    }
}

impl OptProblem for Line {
    type State = usize;
    type Action = Step;

    fn init(&self) -> usize {
        self.start
    }

    fn random_reset<R: Rng>(&self, rng: &mut R) -> usize {
        rng.random_range(0..self.values.len())
    }

    fn obj_val(&self, &i: &usize) -> f64 {
        self.values[i]
    }

    fn actions(&self, &i: &usize) -> Vec<Step> {
        let mut out = Vec::with_capacity(2);
        if i > 0 {
            out.push(Step::Left);
        }
        if i + 1 < self.values.len() {
            out.push(Step::Right);
        }
        out
    }

    fn result(&self, &i: &usize, step: &Step) -> usize {
        match step {
            Step::Left => i - 1,
            Step::Right => i + 1,
        }
    }
}

/// Wraps a problem so that every random reset returns the initial state.
pub struct FixedReset<P>(pub P);

impl<P: OptProblem> OptProblem for FixedReset<P> {
    type State = P::State;
    type Action = P::Action;

    fn init(&self) -> P::State {
        self.0.init()
    }

    fn random_reset<R: Rng>(&self, _rng: &mut R) -> P::State {
        self.0.init()
    }

    fn obj_val(&self, state: &P::State) -> f64 {
        self.0.obj_val(state)
    }

    fn actions(&self, state: &P::State) -> Vec<P::Action> {
        self.0.actions(state)
    }

    fn result(&self, state: &P::State, action: &P::Action) -> P::State {
        self.0.result(state, action)
    }
}
