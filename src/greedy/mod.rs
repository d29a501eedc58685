//! Greedy ratio heuristic.
//!
//! Ranks cases by value per hour and takes each one that still fits. Fast and
//! deterministic, but only an approximation: it never backtracks, so it can
//! leave capacity unused that a different combination would fill.
//!
//! # Ranking
//!
//! Descending `value / weight_hours`, ties by higher value, then by original
//! pool position.
//!
//! # Complexity
//! O(n log n) for the ranking, O(n) for the pass.
//!
//! # References
//!
//! - Dantzig (1957), "Discrete-Variable Extremum Problems"

mod runner;

pub use runner::{rank, GreedyRunner};
pub(crate) use runner::{fill_in_order, fitted_selection};
