//! Error types shared by the graph and local search engines.

use thiserror::Error;

/// Errors raised by the search engines.
///
/// Reaching no goal is not an error: graph search reports it as
/// [`NoSolution`](crate::graph::NoSolution). Every variant here is either a
/// contract violation inside the crate or a malformed value handed over by
/// a problem implementation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// `pop` was called on an empty frontier.
    #[error("cannot pop from an empty frontier")]
    EmptyFrontier,

    /// A grid returned a negative or non-finite step cost.
    #[error("step cost must be finite and non-negative, got {cost}")]
    InvalidCost {
        /// The offending cost.
        cost: f64,
    },

    /// A heuristic returned a negative or non-finite estimate.
    #[error("heuristic must be finite and non-negative, got {value}")]
    InvalidHeuristic {
        /// The offending estimate.
        value: f64,
    },

    /// An objective function returned NaN.
    #[error("objective value must not be NaN")]
    InvalidObjective,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
