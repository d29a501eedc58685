//! Discretization of hour costs onto an integer unit grid.
//!
//! The DP solver indexes its table by whole capacity units, so continuous
//! hours are mapped with a fixed resolution:
//!
//! - `capacity_units = floor(capacity / resolution)`
//! - `weight_units = round_half_up(weight_hours / resolution)`
//!
//! Round-half-up (`floor(x + 0.5)`) is used instead of banker's rounding so
//! every implementation produces the same grid.
//!
//! Cases whose `weight_units` exceed `capacity_units` can never be part of a
//! feasible subset and are left out of the universe.
//!
//! # Key Types
//!
//! - [`DiscretizeConfig`]: Resolution and pre-filter
//! - [`PreFilter`] / [`FilterMode`]: Optional top-K candidate reduction
//! - [`DiscreteUniverse`]: The integer-weighted cases the DP solver consumes

mod config;
mod filter;

pub use config::DiscretizeConfig;
pub use filter::{FilterMode, PreFilter};

use tracing::{debug, warn};

use crate::error::SolveResult;
use crate::pool::{Capacity, CasePool};

/// A case on the unit grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscreteItem {
    /// Position of the case in the source pool.
    pub pool_index: usize,
    /// Case value, unchanged.
    pub value: f64,
    /// Hour cost in grid units.
    pub weight_units: u64,
}

/// The filtered, discretized case universe.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteUniverse {
    /// Candidate items in ascending pool order.
    pub items: Vec<DiscreteItem>,
    /// Capacity in grid units.
    pub capacity_units: u64,
    /// Resolution the grid was built with.
    pub resolution: f64,
    /// Pool positions dropped because they exceed the capacity on their own.
    pub excluded: Vec<usize>,
    /// Number of cases removed by the pre-filter.
    pub filtered_out: usize,
}

impl DiscreteUniverse {
    /// Number of candidate items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no item survived filtering and exclusion.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// `round_half_up(hours / resolution)`, saturating at `u64::MAX`.
#[inline]
pub fn to_weight_units(hours: f64, resolution: f64) -> u64 {
    (hours / resolution + 0.5).floor() as u64
}

/// `floor(hours / resolution)`, saturating at `u64::MAX`.
#[inline]
pub fn to_capacity_units(hours: f64, resolution: f64) -> u64 {
    (hours / resolution).floor() as u64
}

/// Builds the DP universe for `pool` under `capacity`.
///
/// # Errors
/// [`SolveError::Config`](crate::SolveError::Config) if the resolution is not
/// positive and finite.
pub fn discretize(
    pool: &CasePool,
    capacity: Capacity,
    config: &DiscretizeConfig,
) -> SolveResult<DiscreteUniverse> {
    config.validate()?;

    let resolution = config.resolution;
    let capacity_units = to_capacity_units(capacity.hours(), resolution);

    let kept = config.filter.apply(pool);
    let filtered_out = pool.len() - kept.len();
    if filtered_out > 0 {
        warn!(
            mode = ?config.filter.mode,
            top_k = config.filter.top_k,
            filtered_out,
            "pre-filter removed cases; dp optimum is relative to the filtered universe"
        );
    }

    let mut items = Vec::with_capacity(kept.len());
    let mut excluded = Vec::new();
    for pool_index in kept {
        let case = &pool.cases()[pool_index];
        let weight_units = to_weight_units(case.weight_hours, resolution);
        if weight_units > capacity_units {
            excluded.push(pool_index);
        } else {
            items.push(DiscreteItem {
                pool_index,
                value: case.value,
                weight_units,
            });
        }
    }

    debug!(
        resolution,
        capacity_units,
        items = items.len(),
        excluded = excluded.len(),
        filtered_out,
        "discretized case pool"
    );

    Ok(DiscreteUniverse {
        items,
        capacity_units,
        resolution,
        excluded,
        filtered_out,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::pool::Case;

    fn scenario_pool() -> CasePool {
        CasePool::new(vec![
            Case::new("A", 60.0, 10.0),
            Case::new("B", 100.0, 20.0),
            Case::new("C", 120.0, 30.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(to_weight_units(2.5, 1.0), 3);
        assert_eq!(to_weight_units(3.5, 1.0), 4);
        assert_eq!(to_weight_units(2.49, 1.0), 2);
        assert_eq!(to_weight_units(0.125, 0.25), 1);
        assert_eq!(to_weight_units(0.1, 0.25), 0);
    }

    #[test]
    fn test_capacity_floor() {
        assert_eq!(to_capacity_units(50.0, 10.0), 5);
        assert_eq!(to_capacity_units(59.9, 10.0), 5);
        assert_eq!(to_capacity_units(0.0, 0.25), 0);
    }

    #[test]
    fn test_saturates_instead_of_wrapping() {
        assert_eq!(to_capacity_units(1e300, 1e-300), u64::MAX);
    }

    #[test]
    fn test_scenario_grid() {
        let cap = Capacity::new(50.0).unwrap();
        let config = DiscretizeConfig::default().with_resolution(10.0);
        let universe = discretize(&scenario_pool(), cap, &config).unwrap();

        assert_eq!(universe.capacity_units, 5);
        let units: Vec<u64> = universe.items.iter().map(|i| i.weight_units).collect();
        assert_eq!(units, vec![1, 2, 3]);
        assert!(universe.excluded.is_empty());
        assert_eq!(universe.filtered_out, 0);
    }

    #[test]
    fn test_excludes_oversized_cases() {
        let cap = Capacity::new(25.0).unwrap();
        let config = DiscretizeConfig::default().with_resolution(10.0);
        let universe = discretize(&scenario_pool(), cap, &config).unwrap();

        // capacity_units = 2, C needs 3
        assert_eq!(universe.excluded, vec![2]);
        assert_eq!(universe.len(), 2);
    }

    #[test]
    fn test_filter_then_discretize() {
        let cap = Capacity::new(50.0).unwrap();
        let config = DiscretizeConfig::default()
            .with_resolution(10.0)
            .with_filter(FilterMode::Value, 2);
        let universe = discretize(&scenario_pool(), cap, &config).unwrap();

        let kept: Vec<usize> = universe.items.iter().map(|i| i.pool_index).collect();
        assert_eq!(kept, vec![1, 2]);
        assert_eq!(universe.filtered_out, 1);
    }

    #[test]
    fn test_bad_resolution() {
        let cap = Capacity::new(50.0).unwrap();
        let config = DiscretizeConfig::default().with_resolution(0.0);
        assert!(matches!(
            discretize(&scenario_pool(), cap, &config),
            Err(SolveError::Config(_))
        ));
    }
}
