//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat,
//! for a fixed number of generations.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};

use super::config::GaConfig;
use super::operators::bit_flip_mutation;
use super::types::{Chromosome, InfeasiblePenalty};
use crate::error::SolveResult;
use crate::pool::{Capacity, CasePool};
use crate::random::create_rng;
use crate::selection::{Algorithm, Selection};

/// Result of a GA run with its search statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct GaReport {
    /// The best feasible selection found; empty if none was feasible.
    pub selection: Selection,

    /// Generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether any feasible chromosome was ever evaluated.
    pub feasible_found: bool,

    /// Best-ever feasible value after initialization and after each
    /// generation. Never decreases.
    pub value_history: Vec<f64>,
}

/// Fitness evaluation of bit strings against a case pool.
struct CaseProblem {
    values: Vec<f64>,
    weights: Vec<f64>,
    capacity: f64,
    penalty: InfeasiblePenalty,
}

impl CaseProblem {
    fn new(pool: &CasePool, capacity: Capacity, penalty: InfeasiblePenalty) -> Self {
        Self {
            values: pool.iter().map(|c| c.value).collect(),
            weights: pool.iter().map(|c| c.weight_hours).collect(),
            capacity: capacity.hours(),
            penalty,
        }
    }

    /// Gene density of the initial population: `min(0.5, capacity / Σ hours)`.
    fn initial_density(&self) -> f64 {
        let total: f64 = self.weights.iter().sum();
        if total > 0.0 {
            (self.capacity / total).min(0.5)
        } else {
            0.5
        }
    }

    fn create_individual<R: Rng>(&self, density: f64, rng: &mut R) -> Chromosome {
        let genes = (0..self.values.len()).map(|_| rng.random_bool(density)).collect();
        Chromosome::new(genes)
    }

    fn evaluate(&self, chromosome: &mut Chromosome) {
        let mut total_value = 0.0;
        let mut total_weight = 0.0;
        for (i, &gene) in chromosome.genes.iter().enumerate() {
            if gene {
                total_value += self.values[i];
                total_weight += self.weights[i];
            }
        }
        chromosome.total_value = total_value;
        chromosome.total_weight = total_weight;
        chromosome.feasible = total_weight <= self.capacity;
        chromosome.fitness = self.penalty.fitness(total_value, total_weight, self.capacity);
    }
}

/// Executes the GA.
///
/// # Usage
///
/// ```
/// use u_casepack::{Capacity, Case, CasePool};
/// use u_casepack::ga::{GaConfig, GaRunner};
///
/// let pool = CasePool::new(vec![
///     Case::new("A", 60.0, 10.0),
///     Case::new("B", 100.0, 20.0),
///     Case::new("C", 120.0, 30.0),
/// ]).unwrap();
/// let config = GaConfig::default().with_seed(42);
/// let sel = GaRunner::run(&pool, Capacity::new(50.0).unwrap(), &config).unwrap();
/// assert!(sel.total_weight <= 50.0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA and returns the best feasible selection.
    ///
    /// # Errors
    /// [`SolveError::Config`](crate::SolveError::Config) for an invalid
    /// configuration.
    pub fn run(pool: &CasePool, capacity: Capacity, config: &GaConfig) -> SolveResult<Selection> {
        Ok(Self::run_detailed(pool, capacity, config)?.selection)
    }

    /// Runs the GA and returns the selection with search statistics.
    pub fn run_detailed(
        pool: &CasePool,
        capacity: Capacity,
        config: &GaConfig,
    ) -> SolveResult<GaReport> {
        Self::run_with_cancel(pool, capacity, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA stops at
    /// the start of the next generation and returns the best feasible
    /// selection found so far.
    pub fn run_with_cancel(
        pool: &CasePool,
        capacity: Capacity,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SolveResult<GaReport> {
        config.validate()?;

        info!(
            cases = pool.len(),
            capacity = capacity.hours(),
            population = config.population_size,
            generations = config.generations,
            seed = config.seed,
            "ga solver started"
        );

        if pool.is_empty() {
            return Ok(GaReport {
                selection: Selection::empty(Algorithm::Ga, capacity),
                generations: 0,
                cancelled: false,
                feasible_found: true,
                value_history: vec![0.0],
            });
        }

        let problem = CaseProblem::new(pool, capacity, config.penalty);
        let mut rng = create_rng(config.seed);

        // 1. Initialize population
        let density = problem.initial_density();
        let mut population: Vec<Chromosome> = (0..config.population_size)
            .map(|_| problem.create_individual(density, &mut rng))
            .collect();

        // 2. Evaluate initial population
        evaluate_population(&problem, &mut population, config.parallel);

        // 3. Track best feasible
        let mut best: Option<Chromosome> = find_best_feasible(&population).cloned();
        let mut value_history = Vec::with_capacity(config.generations + 1);
        value_history.push(best_value(&best));

        let mut generations = 0usize;
        let mut cancelled = false;

        // 4. Evolutionary loop
        for gen in 0..config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Elite preservation
            let mut next_gen: Vec<Chromosome> = rank_population(&population)
                .into_iter()
                .take(config.elite_count)
                .map(|i| population[i].clone())
                .collect();

            // Generate offspring
            while next_gen.len() < config.population_size {
                let p1 = config.selection.select(&population, &mut rng);
                let p2 = config.selection.select(&population, &mut rng);

                let (genes1, genes2) = if rng.random::<f64>() < config.crossover_rate {
                    config
                        .crossover
                        .apply(&population[p1].genes, &population[p2].genes, &mut rng)
                } else {
                    (population[p1].genes.clone(), population[p2].genes.clone())
                };

                for mut genes in [genes1, genes2] {
                    if next_gen.len() >= config.population_size {
                        break;
                    }
                    bit_flip_mutation(&mut genes, config.mutation_rate, &mut rng);
                    next_gen.push(Chromosome::new(genes));
                }
            }

            // Elites are already evaluated
            evaluate_population(&problem, &mut next_gen[config.elite_count..], config.parallel);
            population = next_gen;

            if let Some(candidate) = find_best_feasible(&population) {
                let improves = match &best {
                    None => true,
                    Some(b) => candidate.fitness > b.fitness,
                };
                if improves {
                    best = Some(candidate.clone());
                }
            }

            value_history.push(best_value(&best));
            generations = gen + 1;

            debug!(
                generation = generations,
                best_value = best_value(&best),
                "ga generation finished"
            );
        }

        let feasible_found = best.is_some();
        let selection = match best {
            Some(b) => Selection::from_indices(Algorithm::Ga, pool, b.selected_indices(), capacity),
            None => Selection::empty(Algorithm::Ga, capacity),
        };

        info!(
            selected = selection.len(),
            total_value = selection.total_value,
            total_weight = selection.total_weight,
            generations,
            cancelled,
            "ga solver finished"
        );

        Ok(GaReport {
            selection,
            generations,
            cancelled,
            feasible_found,
            value_history,
        })
    }
}

/// Evaluate all chromosomes in the slice.
fn evaluate_population(problem: &CaseProblem, population: &mut [Chromosome], parallel: bool) {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            population
                .par_iter_mut()
                .for_each(|chromosome| problem.evaluate(chromosome));
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for chromosome in population.iter_mut() {
        problem.evaluate(chromosome);
    }
}

/// Population indices, fittest first; equal fitness keeps population order.
fn rank_population(population: &[Chromosome]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..population.len()).collect();
    order.sort_by(|&a, &b| population[b].fitness.total_cmp(&population[a].fitness));
    order
}

/// The fittest feasible chromosome; the earliest one on ties.
fn find_best_feasible(population: &[Chromosome]) -> Option<&Chromosome> {
    population
        .iter()
        .filter(|c| c.feasible)
        .fold(None, |best: Option<&Chromosome>, c| match best {
            Some(b) if b.fitness >= c.fitness => Some(b),
            _ => Some(c),
        })
}

fn best_value(best: &Option<Chromosome>) -> f64 {
    best.as_ref().map_or(0.0, |c| c.total_value)
}

// ============================================================================
// Tests
// ============================================================================
