//! Parent selection strategies for the GA.
//!
//! Selection determines which chromosomes are chosen as parents for
//! crossover. Every strategy is monotonic in fitness: a fitter chromosome is
//! never less likely to be picked than a weaker one.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;

use super::types::Chromosome;

/// Selection strategy for choosing parents.
///
/// All strategies assume **maximization** (higher fitness = better).
///
/// # Examples
///
/// ```
/// use u_casepack::ga::ParentSelection;
///
/// // Binary tournament (the default)
/// let sel = ParentSelection::default();
/// assert_eq!(sel, ParentSelection::Tournament(2));
///
/// // Roulette wheel (fitness-proportionate)
/// let sel = ParentSelection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParentSelection {
    /// Tournament selection: pick `k` chromosomes at random, keep the best.
    ///
    /// Higher `k` = stronger selection pressure. `k` must be at least 1.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Fitness is shifted so the weakest chromosome gets a small positive
    /// weight; penalized (negative) fitness is handled the same way.
    ///
    /// # Complexity
    /// O(n) per selection
    Roulette,

    /// Linear rank-based selection: the best of `n` gets weight `n`, the
    /// worst weight `1`.
    ///
    /// Reference: Baker (1985), "Adaptive Selection Methods for Genetic
    /// Algorithms"
    ///
    /// # Complexity
    /// O(n log n) per selection
    Rank,
}

impl Default for ParentSelection {
    fn default() -> Self {
        ParentSelection::Tournament(2)
    }
}

impl ParentSelection {
    /// Select a parent index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<R: Rng>(&self, population: &[Chromosome], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            ParentSelection::Tournament(k) => tournament(population, *k, rng),
            ParentSelection::Roulette => roulette(population, rng),
            ParentSelection::Rank => rank(population, rng),
        }
    }
}

/// Tournament selection: pick k random chromosomes, return the fittest.
fn tournament<R: Rng>(population: &[Chromosome], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness > population[best_idx].fitness {
            best_idx = idx;
        }
    }
    best_idx
}

/// Roulette wheel selection on shifted fitness.
///
/// weight_i = fitness_i - min_fitness + epsilon
fn roulette<R: Rng>(population: &[Chromosome], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let min_fitness = population
        .iter()
        .map(|c| c.fitness)
        .fold(f64::INFINITY, f64::min);

    let epsilon = 1e-10;

    let weights: Vec<f64> = population
        .iter()
        .map(|c| (c.fitness - min_fitness + epsilon).max(epsilon))
        .collect();

    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

/// Rank-based selection using linear ranking.
fn rank<R: Rng>(population: &[Chromosome], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    // Best first; equal fitness keeps population order.
    let mut indexed: Vec<(usize, f64)> = population
        .iter()
        .enumerate()
        .map(|(i, c)| (i, c.fitness))
        .collect();
    indexed.sort_by(|a, b| b.1.total_cmp(&a.1));

    let total: f64 = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;

    for (rank, &(original_idx, _)) in indexed.iter().enumerate() {
        let weight = (n - rank) as f64;
        cumulative += weight;
        if cumulative > threshold {
            return original_idx;
        }
    }

    indexed[n - 1].0 // fallback
}
