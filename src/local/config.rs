//! Random-restart hill climbing configuration.

use crate::error::{Result, SearchError};

/// Configuration for [`HillClimbingResetRunner`](super::HillClimbingResetRunner).
///
/// # Examples
///
/// ```
/// use u_search::local::RestartConfig;
///
/// let config = RestartConfig::default()
///     .with_restarts(10)
///     .with_seed(42);
/// assert_eq!(config.n_restarts, 10);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestartConfig {
    /// Number of independent climbs, each from a fresh random state.
    pub n_restarts: usize,

    /// Random seed for reproducibility. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Run the climbs on the rayon pool. Only honoured when the crate is
    /// built with the `parallel` feature; results are identical either way.
    pub parallel: bool,
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self {
            n_restarts: 15,
            seed: None,
            parallel: false,
        }
    }
}

impl RestartConfig {
    pub fn with_restarts(mut self, n: usize) -> Self {
        self.n_restarts = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.n_restarts == 0 {
            return Err(SearchError::InvalidConfig(
                "n_restarts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
