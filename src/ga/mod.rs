//! Genetic Algorithm heuristic.
//!
//! Each chromosome is one bit per case in pool order. Fitness is the total
//! value when the selected hours fit the capacity; overweight chromosomes get
//! a penalty fitness (see [`InfeasiblePenalty`]) so they rank below every
//! feasible one.
//!
//! # Loop
//!
//! 1. Initialize: every gene is set with probability
//!    `min(0.5, capacity / Σ hours)`
//! 2. Per generation: copy elites, then fill the population with offspring
//!    from [`ParentSelection`], crossover with probability `crossover_rate`,
//!    and per-gene bit-flip mutation
//! 3. Track the best feasible chromosome ever evaluated
//!
//! The returned selection never exceeds the capacity. Optimality is not
//! guaranteed; runs are fully determined by [`GaConfig::seed`].
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, presets)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaReport`]: Selection plus search statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Chu & Beasley (1998), "A Genetic Algorithm for the Multidimensional
//!   Knapsack Problem"

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use operators::CrossoverKind;
pub use runner::{GaReport, GaRunner};
pub use selection::ParentSelection;
pub use types::{Chromosome, InfeasiblePenalty};
