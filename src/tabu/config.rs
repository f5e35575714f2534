//! Tabu Search configuration.

use crate::error::{Result, SearchError};

/// What the tabu memory records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TabuPolicy {
    /// Recently taken actions are forbidden. The run stops once
    /// `max_stall` consecutive moves fail to improve the best value.
    #[default]
    Action,
    /// Recently visited states are forbidden. The run stops after
    /// `max_iterations` moves.
    State,
}

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_search::tabu::{TabuConfig, TabuPolicy};
///
/// let config = TabuConfig::default()
///     .with_policy(TabuPolicy::State)
///     .with_tenure(7)
///     .with_max_iterations(1000);
/// assert_eq!(config.tenure, 7);
/// assert_eq!(config.max_iterations, 1000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Which memory shape and stopping rule to use.
    pub policy: TabuPolicy,
    /// Capacity of the tabu memory. The oldest entry is evicted first.
    pub tenure: usize,
    /// Consecutive non-improving moves before stopping ([`TabuPolicy::Action`]).
    pub max_stall: usize,
    /// Number of moves before stopping ([`TabuPolicy::State`]).
    pub max_iterations: usize,
    /// Admit a tabu move when it beats the best value seen so far.
    ///
    /// Off by default, so tabu moves are filtered strictly. Turn it on to
    /// guarantee a best value at least as good as plain hill climbing.
    pub aspiration: bool,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            policy: TabuPolicy::Action,
            tenure: 20,
            max_stall: 5500,
            max_iterations: 500,
            aspiration: false,
        }
    }
}

impl TabuConfig {
    pub fn with_policy(mut self, policy: TabuPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the tabu memory capacity.
    pub fn with_tenure(mut self, tenure: usize) -> Self {
        self.tenure = tenure;
        self
    }

    /// Sets the stall threshold used by the action policy.
    pub fn with_max_stall(mut self, n: usize) -> Self {
        self.max_stall = n;
        self
    }

    /// Sets the iteration cap used by the state policy.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Validates the stopping bound of the selected policy.
    pub fn validate(&self) -> Result<()> {
        match self.policy {
            TabuPolicy::Action if self.max_stall == 0 => Err(SearchError::InvalidConfig(
                "max_stall must be at least 1".into(),
            )),
            TabuPolicy::State if self.max_iterations == 0 => Err(SearchError::InvalidConfig(
                "max_iterations must be at least 1".into(),
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabu_config_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.policy, TabuPolicy::Action);
        assert_eq!(config.tenure, 20);
        assert_eq!(config.max_stall, 5500);
        assert_eq!(config.max_iterations, 500);
        assert!(!config.aspiration);
    }

    #[test]
    fn test_tabu_config_builder() {
        let config = TabuConfig::default()
            .with_policy(TabuPolicy::State)
            .with_tenure(10)
            .with_max_stall(50)
            .with_max_iterations(1000)
            .with_aspiration(true);

        assert_eq!(config.policy, TabuPolicy::State);
        assert_eq!(config.tenure, 10);
        assert_eq!(config.max_stall, 50);
        assert_eq!(config.max_iterations, 1000);
        assert!(config.aspiration);
    }

    #[test]
    fn test_validate_checks_active_bound_only() {
        let action = TabuConfig::default().with_max_stall(0);
        assert!(action.validate().is_err());
        assert!(action.clone().with_policy(TabuPolicy::State).validate().is_ok());

        let state = TabuConfig::default()
            .with_policy(TabuPolicy::State)
            .with_max_iterations(0);
        assert!(state.validate().is_err());
    }
}
