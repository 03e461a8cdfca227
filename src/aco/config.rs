//! ACO configuration.

use crate::error::AcoError;

/// Configuration for the knapsack ant colony.
///
/// # Examples
///
/// ```
/// use u_colony::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(30)
///     .with_max_iterations(200)
///     .with_evaporation_rate(0.3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Ants (candidates) constructed per iteration.
    pub num_ants: usize,

    /// Number of iterations. The run always performs exactly this many.
    pub max_iterations: usize,

    /// Pheromone exponent. 0 ignores learned trails.
    pub alpha: f64,

    /// Density (heuristic) exponent. 0 ignores value density.
    pub beta: f64,

    /// Fraction of pheromone removed each iteration, in `[0, 1)`.
    pub evaporation_rate: f64,

    /// Numerator of the per-candidate deposit `deposit_constant / fitness`.
    pub deposit_constant: f64,

    /// Value every pheromone entry starts at.
    pub initial_pheromone: f64,

    /// Construct the ants of an iteration on the rayon pool.
    ///
    /// Only honored when the crate is built with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 20,
            max_iterations: 100,
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.5,
            deposit_constant: 100.0,
            initial_pheromone: 0.1,
            parallel: false,
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
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the pheromone exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the density exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate (checked by [`validate`](Self::validate)).
    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    /// Sets the deposit numerator `q` in `q / fitness`.
    pub fn with_deposit_constant(mut self, q: f64) -> Self {
        self.deposit_constant = q;
        self
    }

    /// Sets the starting level of every pheromone entry.
    pub fn with_initial_pheromone(mut self, tau0: f64) -> Self {
        self.initial_pheromone = tau0;
        self
    }

    /// Enables or disables parallel ant construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`AcoError::InvalidConfig`] describing the first offending field.
    pub fn validate(&self) -> Result<(), AcoError> {
        if self.num_ants == 0 {
            return Err(AcoError::InvalidConfig("num_ants must be at least 1".into()));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(AcoError::InvalidConfig(format!(
                "alpha must be finite and non-negative, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(AcoError::InvalidConfig(format!(
                "beta must be finite and non-negative, got {}",
                self.beta
            )));
        }
        if !(0.0..1.0).contains(&self.evaporation_rate) {
            return Err(AcoError::InvalidConfig(format!(
                "evaporation_rate must be in [0, 1), got {}",
                self.evaporation_rate
            )));
        }
        if !self.deposit_constant.is_finite() || self.deposit_constant <= 0.0 {
            return Err(AcoError::InvalidConfig(format!(
                "deposit_constant must be finite and positive, got {}",
                self.deposit_constant
            )));
        }
        if !self.initial_pheromone.is_finite() || self.initial_pheromone <= 0.0 {
            return Err(AcoError::InvalidConfig(format!(
                "initial_pheromone must be finite and positive, got {}",
                self.initial_pheromone
            )));
        }
        Ok(())
    }
}
