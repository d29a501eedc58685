//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::operators::CrossoverKind;
use super::selection::ParentSelection;
use super::types::InfeasiblePenalty;
use crate::error::{SolveError, SolveResult};

/// Configuration for the Genetic Algorithm.
///
/// Setters store values as given; out-of-range values are reported by
/// [`validate`](Self::validate), which every run calls before doing any work.
///
/// # Defaults
///
/// ```
/// use u_casepack::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 80);
/// assert_eq!(config.generations, 150);
/// assert_eq!(config.seed, 42);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_casepack::ga::{CrossoverKind, GaConfig, ParentSelection};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection(ParentSelection::Tournament(3))
///     .with_crossover(CrossoverKind::TwoPoint)
///     .with_mutation_rate(0.01)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of chromosomes in the population. At least 2.
    pub population_size: usize,

    /// Number of generations to run. At least 1.
    pub generations: usize,

    /// Probability of recombining a parent pair (cxpb, 0.0–1.0).
    ///
    /// When crossover is not applied, the parents are copied.
    pub crossover_rate: f64,

    /// Per-gene flip probability (mutpb, 0.0–1.0).
    ///
    /// Applied to every offspring. Typical values are around `1 / n`.
    pub mutation_rate: f64,

    /// Seed of the run's random stream.
    ///
    /// Identical pool, capacity, and configuration with the same seed always
    /// give the same selection.
    pub seed: u64,

    /// Parent selection strategy.
    pub selection: ParentSelection,

    /// Crossover operator.
    pub crossover: CrossoverKind,

    /// Number of fittest chromosomes copied unchanged into each generation.
    ///
    /// Must be smaller than `population_size`. The best feasible chromosome
    /// ever seen is tracked separately and does not depend on this.
    pub elite_count: usize,

    /// Scoring of overweight chromosomes.
    pub penalty: InfeasiblePenalty,

    /// Whether to evaluate chromosomes in parallel using rayon.
    ///
    /// Only effective with the `parallel` feature. Results are identical
    /// either way.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 80,
            generations: 150,
            crossover_rate: 0.7,
            mutation_rate: 0.02,
            seed: 42,
            selection: ParentSelection::default(),
            crossover: CrossoverKind::default(),
            elite_count: 1,
            penalty: InfeasiblePenalty::default(),
            parallel: true,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-gene mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the parent selection strategy.
    pub fn with_selection(mut self, selection: ParentSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Convenience builder for tournament selection of size `k`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(ParentSelection::Tournament(k))
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, crossover: CrossoverKind) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the elite count.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the infeasibility penalty.
    pub fn with_penalty(mut self, penalty: InfeasiblePenalty) -> Self {
        self.penalty = penalty;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Preset for quick runs: small population, few generations.
    ///
    /// - Population: 40, Generations: 60
    pub fn fast() -> Self {
        Self {
            population_size: 40,
            generations: 60,
            ..Self::default()
        }
    }

    /// Preset for large pools: bigger population, more generations,
    /// stronger selection pressure.
    ///
    /// - Population: 200, Generations: 500, Tournament: 3, Elites: 2
    pub fn thorough() -> Self {
        Self {
            population_size: 200,
            generations: 500,
            selection: ParentSelection::Tournament(3),
            elite_count: 2,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// Returns [`SolveError::Config`] describing the first invalid parameter.
    pub fn validate(&self) -> SolveResult<()> {
        if self.population_size < 2 {
            return Err(SolveError::config("population_size must be at least 2"));
        }
        if self.generations == 0 {
            return Err(SolveError::config("generations must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(SolveError::config(format!(
                "crossover_rate must be in [0, 1], got {}",
                self.crossover_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(SolveError::config(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.elite_count >= self.population_size {
            return Err(SolveError::config(
                "elite_count too high: elites fill entire population",
            ));
        }
        if self.selection == ParentSelection::Tournament(0) {
            return Err(SolveError::config("tournament size must be at least 1"));
        }
        Ok(())
    }
}
