//! Collaborator trait for graph search problems.

use std::hash::Hash;

/// Manhattan (L1) distance between two grid positions.
pub trait Manhattan {
    fn manhattan(&self, other: &Self) -> f64;
}

macro_rules! impl_manhattan {
    ($($t:ty),*) => {
        $(
            impl Manhattan for ($t, $t) {
                fn manhattan(&self, other: &Self) -> f64 {
                    self.0.abs_diff(other.0) as f64 + self.1.abs_diff(other.1) as f64
                }
            }
        )*
    };
}

impl_manhattan!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// A grid (or any finite graph) to be searched from `start` to `end`.
///
/// # Contract
///
/// - [`neighbours`](Self::neighbours) returns a finite list in a
///   deterministic order. The same action label may lead to different
///   states from different sources.
/// - [`cost`](Self::cost) is the cost of *entering* a state and must be
///   finite and non-negative. Engines reject anything else with
///   [`SearchError::InvalidCost`](crate::SearchError::InvalidCost).
/// - The default [`heuristic`](Self::heuristic) is Manhattan distance.
///   It never overestimates when every step costs at least 1 and moves are
///   axis-aligned, which is what A* needs for optimal paths.
///
/// # Examples
///
/// ```
/// use u_search::graph::GridProblem;
///
/// struct Corridor { len: i32 }
///
/// impl GridProblem for Corridor {
///     type State = (i32, i32);
///     type Action = &'static str;
///
///     fn start(&self) -> (i32, i32) { (0, 0) }
///     fn end(&self) -> (i32, i32) { (self.len - 1, 0) }
///
///     fn neighbours(&self, &(x, y): &(i32, i32)) -> Vec<(&'static str, (i32, i32))> {
///         let mut out = Vec::new();
///         if x > 0 { out.push(("left", (x - 1, y))); }
///         if x + 1 < self.len { out.push(("right", (x + 1, y))); }
///         out
///     }
///
///     fn cost(&self, _state: &(i32, i32)) -> f64 { 1.0 }
/// }
///
/// let corridor = Corridor { len: 5 };
/// assert_eq!(corridor.heuristic(&corridor.start(), &corridor.end()), 4.0);
/// ```
pub trait GridProblem {
    /// Position type. Never mutated by the engines.
    type State: Clone + Eq + Hash + Manhattan;

    /// Label of a move between neighbouring states.
    type Action: Clone;

    fn start(&self) -> Self::State;

    fn end(&self) -> Self::State;

    /// Moves available from `state`, with the state each one leads to.
    fn neighbours(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)>;

    /// Cost of entering `state`.
    fn cost(&self, state: &Self::State) -> f64;

    /// Estimated remaining cost from `state` to `goal`.
    fn heuristic(&self, state: &Self::State, goal: &Self::State) -> f64 {
        state.manhattan(goal)
    }
}
