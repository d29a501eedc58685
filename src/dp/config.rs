//! DP solver configuration.

use crate::discretize::{DiscretizeConfig, FilterMode};
use crate::error::{SolveError, SolveResult};

/// Configuration for the DP solver.
///
/// # Defaults
///
/// ```
/// use u_casepack::dp::DpConfig;
///
/// let config = DpConfig::default();
/// assert_eq!(config.discretize.resolution, 0.25);
/// assert_eq!(config.max_cells, 1_000_000_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_casepack::discretize::FilterMode;
/// use u_casepack::dp::DpConfig;
///
/// let config = DpConfig::default()
///     .with_resolution(1.0)
///     .with_filter(FilterMode::Ratio, 2_000)
///     .with_max_cells(50_000_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DpConfig {
    /// Resolution and pre-filter.
    pub discretize: DiscretizeConfig,

    /// Upper bound on `cases × (capacity_units + 1)` decision cells.
    ///
    /// Each decision cell costs one bit, so the default bounds the decision
    /// arena at roughly 125 MB. The two `f64` value rows come on top at
    /// 16 bytes per capacity unit and are not counted here: with a single
    /// case and the default bound they can reach about 16 GB. See
    /// [`table_bytes`](crate::dp::table_bytes) for the full estimate.
    pub max_cells: u64,

    /// Fill the cells of each row in parallel.
    ///
    /// Only effective with the `parallel` feature. Rows are always filled
    /// in order.
    pub parallel: bool,
}

impl Default for DpConfig {
    fn default() -> Self {
        Self {
            discretize: DiscretizeConfig::default(),
            max_cells: 1_000_000_000,
            parallel: true,
        }
    }
}

impl DpConfig {
    /// Sets the resolution in hours per unit.
    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.discretize.resolution = resolution;
        self
    }

    /// Sets the top-K pre-filter.
    pub fn with_filter(mut self, mode: FilterMode, top_k: usize) -> Self {
        self.discretize = self.discretize.with_filter(mode, top_k);
        self
    }

    /// Sets the table cell bound.
    pub fn with_max_cells(mut self, max_cells: u64) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Enables or disables parallel row filling.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> SolveResult<()> {
        self.discretize.validate()?;
        if self.max_cells == 0 {
            return Err(SolveError::config("max_cells must be at least 1"));
        }
        Ok(())
    }
}
