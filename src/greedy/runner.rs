//! Greedy pass.

use std::cmp::Ordering;

use tracing::info;

use crate::pool::{Capacity, Case, CasePool};
use crate::selection::{Algorithm, Selection};

/// Pool positions ordered by greedy priority.
pub fn rank(pool: &CasePool) -> Vec<usize> {
    let cases = pool.cases();
    let mut order: Vec<usize> = (0..cases.len()).collect();
    order.sort_by(|&a, &b| compare(&cases[a], &cases[b]).then(a.cmp(&b)));
    order
}

/// Higher ratio first, then higher value.
fn compare(a: &Case, b: &Case) -> Ordering {
    b.ratio()
        .total_cmp(&a.ratio())
        .then(b.value.total_cmp(&a.value))
}

/// Appends to `picked` every case of `order` that still fits, in order.
///
/// Cases already in `picked` are skipped; their hours count as used.
pub(crate) fn fill_in_order(
    pool: &CasePool,
    capacity: Capacity,
    picked: &mut Vec<usize>,
    order: &[usize],
) {
    let cases = pool.cases();
    let limit = capacity.hours();
    let mut taken = vec![false; cases.len()];
    let mut used = 0.0;
    for &i in picked.iter() {
        taken[i] = true;
        used += cases[i].weight_hours;
    }
    for &i in order {
        if taken[i] {
            continue;
        }
        let weight = cases[i].weight_hours;
        if used + weight <= limit {
            used += weight;
            taken[i] = true;
            picked.push(i);
        }
    }
}

/// Builds the selection, removing the latest entries of `picked` while the
/// pool-order total exceeds the capacity.
///
/// Acceptance sums in a different order than [`Selection`] does, so the
/// last few acceptances can overshoot by a rounding error.
pub(crate) fn fitted_selection(
    algorithm: Algorithm,
    pool: &CasePool,
    mut picked: Vec<usize>,
    capacity: Capacity,
) -> Selection {
    let mut selection = Selection::from_indices(algorithm, pool, picked.iter().copied(), capacity);
    while selection.total_weight > capacity.hours() {
        picked.pop();
        selection = Selection::from_indices(algorithm, pool, picked.iter().copied(), capacity);
    }
    selection
}

/// Executes the greedy heuristic.
///
/// ```
/// use u_casepack::{Capacity, Case, CasePool};
/// use u_casepack::greedy::GreedyRunner;
///
/// let pool = CasePool::new(vec![
///     Case::new("A", 60.0, 10.0),
///     Case::new("B", 100.0, 20.0),
///     Case::new("C", 120.0, 30.0),
/// ]).unwrap();
/// let sel = GreedyRunner::run(&pool, Capacity::new(50.0).unwrap());
/// assert_eq!(sel.total_value, 160.0);
/// ```
pub struct GreedyRunner;

impl GreedyRunner {
    /// Runs the greedy heuristic. Never fails on a validated pool.
    pub fn run(pool: &CasePool, capacity: Capacity) -> Selection {
        info!(
            cases = pool.len(),
            capacity = capacity.hours(),
            "greedy solver started"
        );

        let mut picked = Vec::new();
        fill_in_order(pool, capacity, &mut picked, &rank(pool));
        let selection = fitted_selection(Algorithm::Greedy, pool, picked, capacity);

        info!(
            selected = selection.len(),
            total_value = selection.total_value,
            total_weight = selection.total_weight,
            "greedy solver finished"
        );
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cap(hours: f64) -> Capacity {
        Capacity::new(hours).unwrap()
    }

    fn scenario_pool() -> CasePool {
        CasePool::new(vec![
            Case::new("A", 60.0, 10.0),
            Case::new("B", 100.0, 20.0),
            Case::new("C", 120.0, 30.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_scenario() {
        let sel = GreedyRunner::run(&scenario_pool(), cap(50.0));
        assert_eq!(sel.algorithm, Algorithm::Greedy);
        assert_eq!(sel.selected_indices, vec![0, 1]);
        assert_eq!(sel.total_value, 160.0);
        assert_eq!(sel.total_weight, 30.0);
        assert!((sel.capacity_used_fraction - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_rank_by_ratio() {
        assert_eq!(rank(&scenario_pool()), vec![0, 1, 2]);
    }

    #[test]
    fn test_rank_ties_by_value_then_position() {
        let pool = CasePool::new(vec![
            Case::new("low", 10.0, 2.0),   // ratio 5
            Case::new("high", 50.0, 10.0), // ratio 5, higher value
            Case::new("twin", 10.0, 2.0),  // identical to "low"
            Case::new("best", 30.0, 1.0),  // ratio 30
        ])
        .unwrap();
        assert_eq!(rank(&pool), vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_skips_and_continues() {
        // B does not fit after A, but the smaller D still does.
        let pool = CasePool::new(vec![
            Case::new("A", 90.0, 9.0),
            Case::new("B", 40.0, 5.0),
            Case::new("D", 7.0, 1.0),
        ])
        .unwrap();
        let sel = GreedyRunner::run(&pool, cap(10.0));
        assert_eq!(sel.selected_indices, vec![0, 2]);
        assert_eq!(sel.total_weight, 10.0);
    }

    #[test]
    fn test_zero_capacity() {
        let sel = GreedyRunner::run(&scenario_pool(), Capacity::ZERO);
        assert!(sel.is_empty());
        assert_eq!(sel.total_value, 0.0);
    }

    #[test]
    fn test_oversized_single_case() {
        let pool = CasePool::new(vec![Case::new("big", 500.0, 11.0)]).unwrap();
        assert!(GreedyRunner::run(&pool, cap(10.0)).is_empty());
    }

    #[test]
    fn test_fill_in_order_keeps_existing_picks() {
        let mut picked = vec![2];
        fill_in_order(&scenario_pool(), cap(50.0), &mut picked, &[0, 1, 2]);
        // C (30h) is already in; A fits, B would overrun.
        assert_eq!(picked, vec![2, 0]);
    }

    #[test]
    fn test_fitted_selection_drops_latest() {
        let sel = fitted_selection(Algorithm::Greedy, &scenario_pool(), vec![2, 1, 0], cap(50.0));
        assert_eq!(sel.selected_indices, vec![1, 2]);
        assert_eq!(sel.total_weight, 50.0);
    }

    #[test]
    fn test_deterministic() {
        let a = GreedyRunner::run(&scenario_pool(), cap(35.0));
        let b = GreedyRunner::run(&scenario_pool(), cap(35.0));
        assert_eq!(a, b);
    }
}
