//! Capacity budget in processing hours.

use crate::error::{SolveError, SolveResult};

/// Total processing hours available to pursue cases.
///
/// Always finite and non-negative; the only way to build one is through a
/// validating constructor.
///
/// ```
/// use u_casepack::Capacity;
///
/// let cap = Capacity::new(50.0).unwrap();
/// assert_eq!(cap.hours(), 50.0);
/// assert!(Capacity::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Capacity(f64);

impl Capacity {
    /// Yearly hours of a 30-attorney office working 8 h over 220 business days.
    pub const DEFAULT_HOURS: f64 = 52_800.0;

    /// Zero hours. Every solver returns the empty selection for it.
    pub const ZERO: Capacity = Capacity(0.0);

    /// Creates a capacity of `hours`.
    ///
    /// Fails with [`SolveError::Config`] if `hours` is negative or not finite.
    pub fn new(hours: f64) -> SolveResult<Self> {
        if !hours.is_finite() {
            return Err(SolveError::config(format!(
                "capacity must be finite, got {hours}"
            )));
        }
        if hours < 0.0 {
            return Err(SolveError::config(format!(
                "capacity must be non-negative, got {hours}"
            )));
        }
        Ok(Capacity(hours))
    }

    /// Capacity of a team: `staff × hours_per_day × working_days`.
    pub fn from_staffing(staff: u32, hours_per_day: f64, working_days: u32) -> SolveResult<Self> {
        Self::new(f64::from(staff) * hours_per_day * f64::from(working_days))
    }

    /// The budget in hours.
    #[inline]
    pub fn hours(self) -> f64 {
        self.0
    }

    /// Whether no hours are available.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Capacity(Self::DEFAULT_HOURS)
    }
}

impl TryFrom<f64> for Capacity {
    type Error = SolveError;

    fn try_from(hours: f64) -> SolveResult<Self> {
        Capacity::new(hours)
    }
}

impl From<Capacity> for f64 {
    fn from(capacity: Capacity) -> f64 {
        capacity.0
    }
}
