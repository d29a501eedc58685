//! DP solver execution.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::config::DpConfig;
use super::table::{backtrace, fill_table, table_bytes};
use crate::discretize::{discretize, DiscreteUniverse};
use crate::error::{SolveError, SolveResult};
use crate::greedy::{fill_in_order, fitted_selection, rank};
use crate::pool::{Capacity, Case, CasePool};
use crate::selection::{Algorithm, Selection};

/// Optimum of the DP over a discretized universe.
#[derive(Debug, Clone, PartialEq)]
pub struct DpSolution {
    /// Pool positions of the chosen cases, ascending.
    pub pool_indices: Vec<usize>,
    /// `table[n][capacity_units]`.
    pub best_value: f64,
}

/// Executes the exact 0-1 knapsack DP.
///
/// # Usage
///
/// ```
/// use u_casepack::{Capacity, Case, CasePool};
/// use u_casepack::dp::{DpConfig, DpRunner};
///
/// let pool = CasePool::new(vec![
///     Case::new("A", 60.0, 10.0),
///     Case::new("B", 100.0, 20.0),
///     Case::new("C", 120.0, 30.0),
/// ]).unwrap();
/// let config = DpConfig::default().with_resolution(10.0);
/// let sel = DpRunner::run(&pool, Capacity::new(50.0).unwrap(), &config).unwrap();
/// assert_eq!(sel.total_value, 220.0);
/// ```
pub struct DpRunner;

impl DpRunner {
    /// Runs the DP solver.
    ///
    /// # Errors
    /// - [`SolveError::Config`] for an invalid configuration
    /// - [`SolveError::Capacity`] if the table would exceed `max_cells`
    pub fn run(pool: &CasePool, capacity: Capacity, config: &DpConfig) -> SolveResult<Selection> {
        Self::run_with_cancel(pool, capacity, config, None)
    }

    /// Runs the DP solver with an optional cancellation token.
    ///
    /// The flag is checked before each table row. A cancelled run returns
    /// [`SolveError::Cancelled`]; the DP has no meaningful partial answer.
    pub fn run_with_cancel(
        pool: &CasePool,
        capacity: Capacity,
        config: &DpConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SolveResult<Selection> {
        config.validate()?;

        info!(
            cases = pool.len(),
            capacity = capacity.hours(),
            resolution = config.discretize.resolution,
            "dp solver started"
        );

        let universe = discretize(pool, capacity, &config.discretize)?;
        let solution = Self::solve_universe(&universe, config, cancel.as_deref())?;

        let order = candidate_order(pool, &universe);
        let mut picked = solution.pool_indices;
        let repaired = repair_overflow(pool, capacity, &mut picked);
        fill_in_order(pool, capacity, &mut picked, &order);
        let mut selection = fitted_selection(Algorithm::Dp, pool, picked, capacity);

        let mut floor = Vec::new();
        fill_in_order(pool, capacity, &mut floor, &order);
        let floor = fitted_selection(Algorithm::Dp, pool, floor, capacity);
        if floor.total_value > selection.total_value {
            warn!(
                dp_value = selection.total_value,
                greedy_value = floor.total_value,
                "rounding left the dp selection below the greedy pass; using the greedy pass"
            );
            selection = floor;
        }

        info!(
            selected = selection.len(),
            total_value = selection.total_value,
            total_weight = selection.total_weight,
            repaired,
            "dp solver finished"
        );
        Ok(selection)
    }

    /// Solves the knapsack over an already discretized universe.
    ///
    /// The result is optimal for the universe's integer weights; it does not
    /// repair rounding against the real hour capacity.
    pub fn solve_universe(
        universe: &DiscreteUniverse,
        config: &DpConfig,
        cancel: Option<&AtomicBool>,
    ) -> SolveResult<DpSolution> {
        if universe.is_empty() {
            return Ok(DpSolution {
                pool_indices: Vec::new(),
                best_value: 0.0,
            });
        }

        let width = u128::from(universe.capacity_units) + 1;
        let cells = universe.len() as u128 * width;
        if cells > u128::from(config.max_cells) {
            return Err(SolveError::Capacity {
                cells,
                max_cells: config.max_cells,
            });
        }
        let width = usize::try_from(width).map_err(|_| SolveError::Capacity {
            cells,
            max_cells: config.max_cells,
        })?;

        debug!(
            rows = universe.len(),
            width,
            cells = cells as u64,
            bytes = table_bytes(universe.len(), universe.capacity_units) as u64,
            "filling dp table"
        );

        let table = fill_table(&universe.items, width, config.parallel, || {
            cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
        })
        .ok_or(SolveError::Cancelled)?;

        let pool_indices = backtrace(&table.arena, &universe.items, width - 1)
            .into_iter()
            .map(|row| universe.items[row].pool_index)
            .collect();

        Ok(DpSolution {
            pool_indices,
            best_value: table.best_value,
        })
    }
}

/// Cases the DP may refill with: everything the pre-filter kept, including
/// cases the grid excluded, in greedy rank order. Zero-value cases are left
/// out, matching the DP's preference for exclusion on ties.
fn candidate_order(pool: &CasePool, universe: &DiscreteUniverse) -> Vec<usize> {
    let mut candidate = vec![false; pool.len()];
    for item in &universe.items {
        candidate[item.pool_index] = true;
    }
    for &i in &universe.excluded {
        candidate[i] = true;
    }
    let cases = pool.cases();
    rank(pool)
        .into_iter()
        .filter(|&i| candidate[i] && cases[i].value > 0.0)
        .collect()
}

/// Pool-order hour total of the picked cases not yet dropped.
fn kept_hours(cases: &[Case], picked: &[usize], dropped: &[bool]) -> f64 {
    picked
        .iter()
        .filter(|&&i| !dropped[i])
        .map(|&i| cases[i].weight_hours)
        .sum()
}

/// Drops cases until the real hour total fits `capacity`. Returns the number
/// of dropped cases; `picked` is left in ascending pool order.
///
/// Rounding half-up can make a case's grid weight smaller than its hours,
/// so a grid-feasible set may overrun the real budget. Cases are dropped in
/// ascending ratio order, then lower value, then later pool position.
fn repair_overflow(pool: &CasePool, capacity: Capacity, picked: &mut Vec<usize>) -> usize {
    let cases = pool.cases();
    let limit = capacity.hours();
    picked.sort_unstable();

    let mut dropped = vec![false; cases.len()];
    let mut total = kept_hours(cases, picked, &dropped);
    if total <= limit {
        return 0;
    }

    let mut drop_order = picked.clone();
    drop_order.sort_by(|&a, &b| {
        let (ca, cb) = (&cases[a], &cases[b]);
        ca.ratio()
            .total_cmp(&cb.ratio())
            .then(ca.value.total_cmp(&cb.value))
            .then(b.cmp(&a))
    });

    let mut count = 0;
    let mut next = drop_order.into_iter();
    loop {
        if total <= limit {
            // The running total drifts; settle on the pool-order sum.
            total = kept_hours(cases, picked, &dropped);
            if total <= limit {
                break;
            }
        }
        let Some(i) = next.next() else {
            break;
        };
        dropped[i] = true;
        total -= cases[i].weight_hours;
        count += 1;
        warn!(
            case = %cases[i].id,
            capacity = limit,
            "dropped case to respect real hour capacity after rounding"
        );
    }

    picked.retain(|&i| !dropped[i]);
    count
}
