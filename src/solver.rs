//! Uniform entry point over the three solvers.

use crate::dp::{DpConfig, DpRunner};
use crate::error::SolveResult;
use crate::ga::{GaConfig, GaRunner};
use crate::greedy::GreedyRunner;
use crate::pool::{Capacity, CasePool};
use crate::selection::{Algorithm, Selection};

/// A solver together with its parameters.
///
/// Callers that compare methods build one value per method and call
/// [`solve`](Self::solve) on each; invocations share nothing and may run on
/// separate threads.
///
/// ```
/// use u_casepack::{Capacity, Case, CasePool, SolverConfig};
/// use u_casepack::dp::DpConfig;
/// use u_casepack::ga::GaConfig;
///
/// let pool = CasePool::new(vec![
///     Case::new("A", 60.0, 10.0),
///     Case::new("B", 100.0, 20.0),
///     Case::new("C", 120.0, 30.0),
/// ]).unwrap();
/// let capacity = Capacity::new(50.0).unwrap();
///
/// let solvers = [
///     SolverConfig::Dp(DpConfig::default().with_resolution(10.0)),
///     SolverConfig::Greedy,
///     SolverConfig::Ga(GaConfig::default()),
/// ];
/// for solver in &solvers {
///     let sel = solver.solve(&pool, capacity).unwrap();
///     assert!(sel.total_weight <= 50.0);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "algorithm", rename_all = "snake_case"))]
pub enum SolverConfig {
    /// Exact dynamic programming over discretized hours.
    Dp(DpConfig),
    /// Value-per-hour greedy pass.
    Greedy,
    /// Genetic algorithm.
    Ga(GaConfig),
}

impl SolverConfig {
    /// The tag carried by selections from this solver.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            SolverConfig::Dp(_) => Algorithm::Dp,
            SolverConfig::Greedy => Algorithm::Greedy,
            SolverConfig::Ga(_) => Algorithm::Ga,
        }
    }

    /// Runs the configured solver.
    ///
    /// # Errors
    /// Whatever the underlying runner reports; the greedy pass never fails.
    pub fn solve(&self, pool: &CasePool, capacity: Capacity) -> SolveResult<Selection> {
        match self {
            SolverConfig::Dp(config) => DpRunner::run(pool, capacity, config),
            SolverConfig::Greedy => Ok(GreedyRunner::run(pool, capacity)),
            SolverConfig::Ga(config) => GaRunner::run(pool, capacity, config),
        }
    }
}

impl From<DpConfig> for SolverConfig {
    fn from(config: DpConfig) -> Self {
        SolverConfig::Dp(config)
    }
}

impl From<GaConfig> for SolverConfig {
    fn from(config: GaConfig) -> Self {
        SolverConfig::Ga(config)
    }
}
