//! Discretization configuration.

use super::filter::{FilterMode, PreFilter};
use crate::error::{SolveError, SolveResult};

/// Controls how hour costs are mapped to integer units.
///
/// # Defaults
///
/// ```
/// use u_casepack::discretize::DiscretizeConfig;
///
/// let config = DiscretizeConfig::default();
/// assert_eq!(config.resolution, 0.25);
/// assert_eq!(config.filter.top_k, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscretizeConfig {
    /// Hours per discretization unit. Must be positive and finite.
    ///
    /// Smaller values give a finer grid and a proportionally larger DP table.
    pub resolution: f64,

    /// Optional top-K pre-filter applied before discretization.
    pub filter: PreFilter,
}

impl Default for DiscretizeConfig {
    fn default() -> Self {
        Self {
            resolution: 0.25,
            filter: PreFilter::NONE,
        }
    }
}

impl DiscretizeConfig {
    /// Sets the resolution in hours per unit.
    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets the pre-filter.
    pub fn with_filter(mut self, mode: FilterMode, top_k: usize) -> Self {
        self.filter = PreFilter::new(mode, top_k);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> SolveResult<()> {
        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return Err(SolveError::config(format!(
                "resolution must be positive, got {}",
                self.resolution
            )));
        }
        Ok(())
    }
}
