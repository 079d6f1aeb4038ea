//! Optimizer configuration.
//!
//! [`OptimizerConfig`] holds the parameters of the generation loop.

use crate::error::{Error, Result};

/// Crossover trials per generation when not configured otherwise.
pub const DEFAULT_CROSSOVER_TRIALS: usize = 20;

/// Configuration for the [`Optimizer`](super::Optimizer).
///
/// # Defaults
///
/// ```
/// use u_treegp::gp::OptimizerConfig;
///
/// let config = OptimizerConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.crossover_trials, 20);
/// assert!(config.seed.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_treegp::gp::OptimizerConfig;
///
/// let config = OptimizerConfig::default()
///     .with_population_size(50)
///     .with_crossover_trials(40)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizerConfig {
    /// Population size restored by every populate phase.
    ///
    /// Selection may shrink the population below this and crossover may
    /// push it above; populate only ever adds.
    pub population_size: usize,

    /// Number of subtree crossover trials per generation.
    pub crossover_trials: usize,

    /// Seed for the optimizer's random number generator.
    ///
    /// `None` draws a random seed. Handy for tests; a seeded run is not
    /// guaranteed to repeat across crate versions.
    pub seed: Option<u64>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            crossover_trials: DEFAULT_CROSSOVER_TRIALS,
            seed: None,
        }
    }
}

impl OptimizerConfig {
    /// Sets the target population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of crossover trials per generation.
    pub fn with_crossover_trials(mut self, n: usize) -> Self {
        self.crossover_trials = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`] if the population size is zero.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(Error::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
