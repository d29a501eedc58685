//! Uniform solver output.
//!
//! Every solver returns a [`Selection`], so the reporting layer can compare
//! runs without knowing which algorithm produced them.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{SolveError, SolveResult};
use crate::pool::{Capacity, CasePool};

/// The solver that produced a [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    /// Exact dynamic programming over the discretized grid.
    Dp,
    /// Ratio-ranked greedy heuristic.
    Greedy,
    /// Genetic algorithm.
    Ga,
}

impl Algorithm {
    /// Short lowercase name, stable for reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Dp => "dp",
            Algorithm::Greedy => "greedy",
            Algorithm::Ga => "ga",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of cases chosen under a capacity budget.
///
/// Totals are summed in pool order. `total_weight` never exceeds
/// `capacity_hours` for a selection returned by any solver.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    /// Solver that produced this selection.
    pub algorithm: Algorithm,

    /// Selected case IDs, ordered by ID.
    pub selected_ids: BTreeSet<String>,

    /// Pool positions of the selected cases, ascending.
    pub selected_indices: Vec<usize>,

    /// Sum of the selected values.
    pub total_value: f64,

    /// Sum of the selected hour costs.
    pub total_weight: f64,

    /// Capacity the selection was computed against.
    pub capacity_hours: f64,

    /// `total_weight / capacity_hours`, in `[0, 1]`; zero when capacity is zero.
    pub capacity_used_fraction: f64,
}

impl Selection {
    /// Builds a selection from pool positions supplied by a caller.
    ///
    /// `indices` may be in any order; duplicates are ignored. Fails with
    /// [`SolveError::Config`] if an index is outside the pool.
    ///
    /// ```
    /// use u_casepack::{Algorithm, Capacity, Case, CasePool, Selection};
    ///
    /// let pool = CasePool::new(vec![Case::new("A", 60.0, 10.0)]).unwrap();
    /// let cap = Capacity::new(50.0).unwrap();
    /// assert!(Selection::try_from_indices(Algorithm::Greedy, &pool, [0], cap).is_ok());
    /// assert!(Selection::try_from_indices(Algorithm::Greedy, &pool, [3], cap).is_err());
    /// ```
    pub fn try_from_indices(
        algorithm: Algorithm,
        pool: &CasePool,
        indices: impl IntoIterator<Item = usize>,
        capacity: Capacity,
    ) -> SolveResult<Self> {
        let indices: Vec<usize> = indices.into_iter().collect();
        if let Some(&bad) = indices.iter().find(|&&i| pool.get(i).is_none()) {
            return Err(SolveError::config(format!(
                "case index {bad} is outside a pool of {} cases",
                pool.len()
            )));
        }
        Ok(Self::from_indices(algorithm, pool, indices, capacity))
    }

    /// Builds a selection from pool positions known to be in range.
    ///
    /// `indices` may be in any order; duplicates are ignored.
    pub(crate) fn from_indices(
        algorithm: Algorithm,
        pool: &CasePool,
        indices: impl IntoIterator<Item = usize>,
        capacity: Capacity,
    ) -> Self {
        let mut selected_indices: Vec<usize> = indices.into_iter().collect();
        selected_indices.sort_unstable();
        selected_indices.dedup();

        let mut selected_ids = BTreeSet::new();
        let mut total_value = 0.0;
        let mut total_weight = 0.0;
        for &i in &selected_indices {
            let case = &pool.cases()[i];
            selected_ids.insert(case.id.clone());
            total_value += case.value;
            total_weight += case.weight_hours;
        }

        let capacity_hours = capacity.hours();
        let capacity_used_fraction = if capacity_hours > 0.0 {
            (total_weight / capacity_hours).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Self {
            algorithm,
            selected_ids,
            selected_indices,
            total_value,
            total_weight,
            capacity_hours,
            capacity_used_fraction,
        }
    }

    /// The empty selection.
    pub fn empty(algorithm: Algorithm, capacity: Capacity) -> Self {
        Self {
            algorithm,
            selected_ids: BTreeSet::new(),
            selected_indices: Vec::new(),
            total_value: 0.0,
            total_weight: 0.0,
            capacity_hours: capacity.hours(),
            capacity_used_fraction: 0.0,
        }
    }

    /// Number of selected cases.
    #[inline]
    pub fn len(&self) -> usize {
        self.selected_indices.len()
    }

    /// Whether nothing was selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selected_indices.is_empty()
    }

    /// Whether the case with `id` was selected.
    pub fn contains(&self, id: &str) -> bool {
        self.selected_ids.contains(id)
    }

    /// Hours left unused.
    pub fn remaining_hours(&self) -> f64 {
        (self.capacity_hours - self.total_weight).max(0.0)
    }
}
