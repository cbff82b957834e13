//! ACO configuration.
//!
//! [`AcoConfig`] holds every parameter of a colony run.

use crate::error::{Result, SlottingError};

/// Configuration for the Ant Colony Optimization solver.
///
/// # Defaults
///
/// ```
/// use u_slotting::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.num_ants, 30);
/// assert_eq!(config.num_iterations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_slotting::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(50)
///     .with_evaporation_rate(0.1)
///     .with_beta(3.0)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Ants constructed per iteration.
    pub num_ants: usize,

    /// Number of construct/update iterations.
    pub num_iterations: usize,

    /// Fraction of pheromone removed each iteration, in `[0, 1)`.
    pub evaporation_rate: f64,

    /// Pheromone exponent. Non-negative.
    pub alpha: f64,

    /// Heuristic exponent. Non-negative.
    pub beta: f64,

    /// Initial value of every pheromone entry (`tau0`). Positive.
    pub initial_pheromone: f64,

    /// Added to normalized desirability so no item gets zero weight.
    pub heuristic_epsilon: f64,

    /// Numerator `Q` of the `Q / cost` deposit.
    pub deposit_weight: f64,

    /// Keep every ant's cost in the iteration records.
    pub record_ant_costs: bool,

    /// Construct ants in parallel with rayon.
    ///
    /// Only has an effect with the `parallel` feature. Results are
    /// identical either way for a fixed seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 30,
            num_iterations: 100,
            evaporation_rate: 0.3,
            alpha: 1.0,
            beta: 2.0,
            initial_pheromone: 1.0,
            heuristic_epsilon: 0.01,
            deposit_weight: 1.0,
            record_ant_costs: false,
            parallel: true,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants per iteration.
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_num_iterations(mut self, n: usize) -> Self {
        self.num_iterations = n;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    /// Sets the pheromone exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the heuristic exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the initial pheromone level.
    pub fn with_initial_pheromone(mut self, tau0: f64) -> Self {
        self.initial_pheromone = tau0;
        self
    }

    /// Sets the heuristic epsilon.
    pub fn with_heuristic_epsilon(mut self, epsilon: f64) -> Self {
        self.heuristic_epsilon = epsilon;
        self
    }

    /// Sets the deposit numerator `Q`.
    pub fn with_deposit_weight(mut self, q: f64) -> Self {
        self.deposit_weight = q;
        self
    }

    /// Enables or disables per-ant cost recording.
    pub fn with_record_ant_costs(mut self, record: bool) -> Self {
        self.record_ant_costs = record;
        self
    }

    /// Enables or disables parallel construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for quick runs: 10 ants, 30 iterations.
    pub fn fast() -> Self {
        Self {
            num_ants: 10,
            num_iterations: 30,
            ..Self::default()
        }
    }

    /// The defaults: 30 ants, 100 iterations.
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Preset for quality: 60 ants, 300 iterations, slower evaporation.
    pub fn quality() -> Self {
        Self {
            num_ants: 60,
            num_iterations: 300,
            evaporation_rate: 0.1,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`SlottingError::Configuration`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.num_ants == 0 {
            return Err(SlottingError::config("num_ants must be at least 1"));
        }
        if self.num_iterations == 0 {
            return Err(SlottingError::config("num_iterations must be at least 1"));
        }
        if !(0.0..1.0).contains(&self.evaporation_rate) {
            return Err(SlottingError::config(format!(
                "evaporation_rate must be in [0, 1), got {}",
                self.evaporation_rate
            )));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(SlottingError::config(format!(
                "alpha must be non-negative, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(SlottingError::config(format!(
                "beta must be non-negative, got {}",
                self.beta
            )));
        }
        if !self.initial_pheromone.is_finite() || self.initial_pheromone <= 0.0 {
            return Err(SlottingError::config(format!(
                "initial_pheromone must be positive, got {}",
                self.initial_pheromone
            )));
        }
        if !self.heuristic_epsilon.is_finite() || self.heuristic_epsilon <= 0.0 {
            return Err(SlottingError::config(format!(
                "heuristic_epsilon must be positive, got {}",
                self.heuristic_epsilon
            )));
        }
        if !self.deposit_weight.is_finite() || self.deposit_weight <= 0.0 {
            return Err(SlottingError::config(format!(
                "deposit_weight must be positive, got {}",
                self.deposit_weight
            )));
        }
        Ok(())
    }
}
