//! Optimizer configuration.
//!
//! [`NsgaConfig`] holds all parameters controlling a run and corresponds
//! to the start command of the message boundary: problem id, population
//! size, generation budget, and operator rates.

use crate::problem::{ZdtProblem, DEFAULT_NUM_VARS};

/// Configuration for an NSGA-II run.
///
/// # Defaults
///
/// ```
/// use nsga2_moo::NsgaConfig;
///
/// let config = NsgaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 250);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use nsga2_moo::{NsgaConfig, ZdtProblem};
///
/// let config = NsgaConfig::default()
///     .with_problem(ZdtProblem::Zdt2)
///     .with_population_size(60)
///     .with_generations(100)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NsgaConfig {
    /// Benchmark problem to optimize.
    pub problem: ZdtProblem,

    /// Number of individuals in the population.
    ///
    /// Must be even (offspring are produced in pairs) and at least 4.
    pub population_size: usize,

    /// Fixed generation budget; the only termination condition besides
    /// cancellation.
    pub generations: usize,

    /// Probability of recombining a parent pair at all (`[0, 1]`).
    ///
    /// When the gate fails, both offspring are exact clones of the parents
    /// (mutation still applies).
    pub crossover_rate: f64,

    /// Per-gene mutation probability (`[0, 1]`). A common choice is
    /// `1 / num_vars`, one expected perturbation per offspring.
    pub mutation_rate: f64,

    /// Decision-vector length. The ZDT standard is 30.
    pub num_vars: usize,

    /// SBX distribution index (η). Larger keeps children closer to parents.
    pub eta_crossover: f64,

    /// Polynomial-mutation distribution index (η).
    pub eta_mutation: f64,

    /// Progress-report cadence in generations.
    ///
    /// `None` uses `max(1, generations / 100)`. The final generation is
    /// always reported regardless of cadence.
    pub report_interval: Option<usize>,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for NsgaConfig {
    fn default() -> Self {
        Self {
            problem: ZdtProblem::Zdt1,
            population_size: 100,
            generations: 250,
            crossover_rate: 0.9,
            mutation_rate: 1.0 / DEFAULT_NUM_VARS as f64,
            num_vars: DEFAULT_NUM_VARS,
            eta_crossover: crate::operators::DEFAULT_ETA,
            eta_mutation: crate::operators::DEFAULT_ETA,
            report_interval: None,
            seed: None,
        }
    }
}

impl NsgaConfig {
    /// Sets the benchmark problem.
    pub fn with_problem(mut self, problem: ZdtProblem) -> Self {
        self.problem = problem;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the decision-vector length.
    pub fn with_num_vars(mut self, n: usize) -> Self {
        self.num_vars = n;
        self
    }

    /// Sets both distribution indices at once.
    pub fn with_eta(mut self, eta: f64) -> Self {
        self.eta_crossover = eta;
        self.eta_mutation = eta;
        self
    }

    /// Sets the progress-report cadence.
    pub fn with_report_interval(mut self, generations: usize) -> Self {
        self.report_interval = Some(generations);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Effective report cadence: the configured interval, or the default
    /// of roughly one hundred reports per run.
    pub fn effective_report_interval(&self) -> usize {
        self.report_interval
            .unwrap_or_else(|| (self.generations / 100).max(1))
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid. The
    /// runner calls this before generation 0; an invalid configuration
    /// never starts a run.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 4 {
            return Err("population_size must be at least 4".into());
        }
        if self.population_size % 2 != 0 {
            return Err("population_size must be even (offspring are produced in pairs)".into());
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(format!(
                "crossover_rate must be in [0, 1], got {}",
                self.crossover_rate
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            ));
        }
        if self.num_vars < 2 {
            return Err("num_vars must be at least 2".into());
        }
        if !(self.eta_crossover > 0.0) || !(self.eta_mutation > 0.0) {
            return Err("distribution indices must be positive".into());
        }
        if self.report_interval == Some(0) {
            return Err("report_interval must be positive or None".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = NsgaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.problem, ZdtProblem::Zdt1);
        assert_eq!(config.population_size, 100);
        assert_eq!(config.generations, 250);
        assert!((config.crossover_rate - 0.9).abs() < 1e-12);
        assert!((config.mutation_rate - 1.0 / 30.0).abs() < 1e-12);
        assert_eq!(config.num_vars, 30);
        assert!(config.seed.is_none());
        assert!(config.report_interval.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = NsgaConfig::default()
            .with_problem(ZdtProblem::Zdt3)
            .with_population_size(40)
            .with_generations(80)
            .with_crossover_rate(0.8)
            .with_mutation_rate(0.05)
            .with_num_vars(10)
            .with_eta(15.0)
            .with_report_interval(5)
            .with_seed(7);

        assert_eq!(config.problem, ZdtProblem::Zdt3);
        assert_eq!(config.population_size, 40);
        assert_eq!(config.generations, 80);
        assert!((config.crossover_rate - 0.8).abs() < 1e-12);
        assert!((config.mutation_rate - 0.05).abs() < 1e-12);
        assert_eq!(config.num_vars, 10);
        assert!((config.eta_crossover - 15.0).abs() < 1e-12);
        assert!((config.eta_mutation - 15.0).abs() < 1e-12);
        assert_eq!(config.report_interval, Some(5));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_odd_population() {
        let config = NsgaConfig::default().with_population_size(25);
        let err = config.validate().unwrap_err();
        assert!(err.contains("even"), "got: {err}");
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = NsgaConfig::default().with_population_size(2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_minimum_population_accepted() {
        let config = NsgaConfig::default().with_population_size(4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = NsgaConfig::default().with_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rates_out_of_range() {
        assert!(NsgaConfig::default()
            .with_crossover_rate(1.5)
            .validate()
            .is_err());
        assert!(NsgaConfig::default()
            .with_crossover_rate(-0.1)
            .validate()
            .is_err());
        assert!(NsgaConfig::default()
            .with_mutation_rate(2.0)
            .validate()
            .is_err());
        assert!(NsgaConfig::default()
            .with_mutation_rate(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_num_vars_too_small() {
        let config = NsgaConfig::default().with_num_vars(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_report_interval() {
        let config = NsgaConfig::default().with_report_interval(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_effective_report_interval_default() {
        // 250 generations → report every 2.
        assert_eq!(NsgaConfig::default().effective_report_interval(), 2);
        // Short runs report every generation.
        let short = NsgaConfig::default().with_generations(5);
        assert_eq!(short.effective_report_interval(), 1);
    }

    #[test]
    fn test_effective_report_interval_explicit() {
        let config = NsgaConfig::default().with_report_interval(10);
        assert_eq!(config.effective_report_interval(), 10);
    }
}
