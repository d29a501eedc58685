//! Capacity-constrained case selection.
//!
//! Given a pool of collection cases, each with an expected recovery value and
//! an estimated hour cost, choose the subset that maximizes total value
//! without exceeding a total hour budget (0-1 knapsack). Three independent
//! solvers share the same input and output types:
//!
//! - **DP**: Exact dynamic programming over hour costs discretized to a
//!   fixed resolution, with an optional pre-filter for very large pools.
//! - **Greedy**: Value-per-hour ranking, accepting every case that fits.
//! - **Genetic Algorithm (GA)**: Seeded bit-string evolution with a
//!   capacity penalty; never returns an overweight selection.
//!
//! # Usage
//!
//! ```
//! use u_casepack::{Capacity, Case, CasePool, SolverConfig};
//! use u_casepack::dp::DpConfig;
//!
//! let pool = CasePool::new(vec![
//!     Case::new("A", 60.0, 10.0),
//!     Case::new("B", 100.0, 20.0),
//!     Case::new("C", 120.0, 30.0),
//! ]).unwrap();
//! let capacity = Capacity::new(50.0).unwrap();
//!
//! let dp = SolverConfig::Dp(DpConfig::default().with_resolution(10.0))
//!     .solve(&pool, capacity)
//!     .unwrap();
//! let greedy = SolverConfig::Greedy.solve(&pool, capacity).unwrap();
//! assert_eq!(dp.total_value, 220.0);
//! assert_eq!(greedy.total_value, 160.0);
//! ```
//!
//! # Architecture
//!
//! Solvers are pure functions of (pool, capacity, config). They hold no
//! global state and never mutate their input, so any subset can run on
//! separate threads. Reporting and data loading belong to callers.

pub mod discretize;
pub mod dp;
pub mod error;
pub mod ga;
pub mod greedy;
pub mod pool;
pub mod random;
pub mod selection;
pub mod solver;

pub use error::{SolveError, SolveResult};
pub use pool::{Capacity, Case, CasePool};
pub use selection::{Algorithm, Selection};
pub use solver::SolverConfig;
