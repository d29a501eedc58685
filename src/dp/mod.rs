//! Exact 0-1 knapsack by dynamic programming.
//!
//! Works on the integer grid produced by [`crate::discretize`]. For item `i`
//! with grid weight `w_i` and value `v_i`:
//!
//! ```text
//! table[i][c] = max(table[i-1][c], table[i-1][c - w_i] + v_i)   if c >= w_i
//! table[i][c] = table[i-1][c]                                    otherwise
//! ```
//!
//! with a zero base row. The answer is `table[n][capacity_units]`, and the
//! selected set is recovered by walking the recorded decisions backwards.
//! Ties prefer excluding the current case.
//!
//! The result is globally optimal over the filtered, discretized universe.
//! A pre-filter can make it suboptimal with respect to the full pool.
//!
//! # Complexity
//! O(n·W) time, W/64 words of decision arena per row, two value rows.
//!
//! # References
//!
//! - Bellman (1957), *Dynamic Programming*
//! - Kellerer, Pferschy & Pisinger (2004), *Knapsack Problems*, Ch. 2

mod config;
mod runner;
mod table;

pub use config::DpConfig;
pub use runner::{DpRunner, DpSolution};
pub use table::table_bytes;
