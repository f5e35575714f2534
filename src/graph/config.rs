//! Graph search algorithm selection.
//!
//! Each [`Algorithm`] is a configuration of the shared expand loop:
//!
//! | Algorithm | Frontier | Priority key | Duplicates |
//! |---|---|---|---|
//! | `DepthFirst` | stack | none | lazy (marked at pop) |
//! | `BreadthFirst` | queue | none | eager (marked at generation) |
//! | `UniformCost` | priority queue | g(n) | eager |
//! | `GreedyBestFirst` | priority queue | h(n) | eager |
//! | `AStar` | priority queue | g(n) + h(n), then g(n) | eager |

use std::fmt;

use super::frontier::Priority;

/// Removal order of the frontier an algorithm uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierKind {
    Stack,
    Queue,
    PriorityQueue,
}

/// Priority assigned to a node when it enters the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityKey {
    /// No priority; arrival order only.
    Arrival,
    /// Accumulated path cost g(n).
    PathCost,
    /// Heuristic estimate h(n), ignoring g(n).
    Heuristic,
    /// f(n) = g(n) + h(n); equal f goes to the lower g(n).
    PathCostPlusHeuristic,
}

impl PriorityKey {
    /// Whether computing this key needs a heuristic evaluation.
    pub fn uses_heuristic(self) -> bool {
        matches!(
            self,
            PriorityKey::Heuristic | PriorityKey::PathCostPlusHeuristic
        )
    }

    /// Combines path cost `g` and heuristic `h` into a priority.
    ///
    /// A* breaks f ties toward the lower g. Under marking at generation a
    /// state keeps the first path that reaches it, so the shallower node
    /// must be expanded first.
    pub fn priority(self, g: f64, h: f64) -> Priority {
        match self {
            PriorityKey::Arrival => Priority::NONE,
            PriorityKey::PathCost => Priority::from(g),
            PriorityKey::Heuristic => Priority::from(h),
            PriorityKey::PathCostPlusHeuristic => Priority::new(g + h, g),
        }
    }
}

/// When a state enters the explored set.
///
/// The two policies revisit states differently and are kept distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Mark on generation. A state is pushed at most once per run.
    Eager,
    /// Mark on pop. A state may be pushed several times; later copies are
    /// discarded when popped.
    Lazy,
}

/// Graph search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    GreedyBestFirst,
    AStar,
}

impl Algorithm {
    /// All algorithms, in a fixed order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::UniformCost,
        Algorithm::GreedyBestFirst,
        Algorithm::AStar,
    ];

    pub fn frontier_kind(self) -> FrontierKind {
        match self {
            Algorithm::DepthFirst => FrontierKind::Stack,
            Algorithm::BreadthFirst => FrontierKind::Queue,
            Algorithm::UniformCost | Algorithm::GreedyBestFirst | Algorithm::AStar => {
                FrontierKind::PriorityQueue
            }
        }
    }

    pub fn priority_key(self) -> PriorityKey {
        match self {
            Algorithm::DepthFirst | Algorithm::BreadthFirst => PriorityKey::Arrival,
            Algorithm::UniformCost => PriorityKey::PathCost,
            Algorithm::GreedyBestFirst => PriorityKey::Heuristic,
            Algorithm::AStar => PriorityKey::PathCostPlusHeuristic,
        }
    }

    pub fn duplicate_policy(self) -> DuplicatePolicy {
        match self {
            Algorithm::DepthFirst => DuplicatePolicy::Lazy,
            _ => DuplicatePolicy::Eager,
        }
    }

    /// Whether the algorithm returns a minimum-cost path on grids with
    /// uniform step costs.
    ///
    /// A* additionally needs a consistent heuristic, which Manhattan
    /// distance is on a 4-connected grid. With the eager marking policy a
    /// state's first generation fixes its path, so non-uniform costs can
    /// break optimality for both.
    pub fn is_cost_optimal(self) -> bool {
        matches!(self, Algorithm::UniformCost | Algorithm::AStar)
    }

    /// Short name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "dfs",
            Algorithm::BreadthFirst => "bfs",
            Algorithm::UniformCost => "ucs",
            Algorithm::GreedyBestFirst => "gbfs",
            Algorithm::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
