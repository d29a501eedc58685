//! Candidate pre-filter.
//!
//! Narrows the universe the DP solver sees to the top-K cases by value or
//! by ratio, bounding the table size on large pools.
//!
//! This is a scope-reduction heuristic. A DP result on a filtered universe is
//! optimal relative to that universe only; cases removed here can belong to
//! the true full-universe optimum.

use std::cmp::Ordering;

use crate::pool::{Case, CasePool};

/// Ranking key used by the pre-filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FilterMode {
    /// Keep every case.
    #[default]
    None,
    /// Keep the `top_k` highest-value cases.
    Value,
    /// Keep the `top_k` highest value-per-hour cases.
    Ratio,
}

/// Top-K pre-filter configuration.
///
/// `top_k = 0` disables filtering regardless of `mode`.
///
/// ```
/// use u_casepack::discretize::{FilterMode, PreFilter};
///
/// let filter = PreFilter::new(FilterMode::Ratio, 500);
/// assert!(filter.is_active(10_000));
/// assert!(!filter.is_active(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreFilter {
    /// Ranking key.
    pub mode: FilterMode,
    /// Number of cases to keep; 0 disables filtering.
    pub top_k: usize,
}

impl PreFilter {
    /// No filtering.
    pub const NONE: PreFilter = PreFilter {
        mode: FilterMode::None,
        top_k: 0,
    };

    /// Creates a filter.
    pub fn new(mode: FilterMode, top_k: usize) -> Self {
        Self { mode, top_k }
    }

    /// Whether the filter would remove anything from a pool of `pool_len`.
    pub fn is_active(&self, pool_len: usize) -> bool {
        self.mode != FilterMode::None && self.top_k > 0 && self.top_k < pool_len
    }

    /// Pool positions kept by the filter, in ascending pool order.
    ///
    /// Ranking ties are broken by pool position.
    pub fn apply(&self, pool: &CasePool) -> Vec<usize> {
        let n = pool.len();
        if !self.is_active(n) {
            return (0..n).collect();
        }

        let key: fn(&Case) -> f64 = match self.mode {
            FilterMode::Value => |c: &Case| c.value,
            FilterMode::Ratio => Case::ratio,
            FilterMode::None => unreachable!("inactive filter handled above"),
        };

        let cases = pool.cases();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| match key(&cases[b]).total_cmp(&key(&cases[a])) {
            Ordering::Equal => a.cmp(&b),
            ord => ord,
        });
        order.truncate(self.top_k);
        order.sort_unstable();
        order
    }
}
