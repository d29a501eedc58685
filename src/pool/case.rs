//! Case model.
//!
//! A case is one debt-collection matter: the monetary value it may recover
//! and the processing hours it costs. Cases are atomic; a solver either
//! pursues a case fully or not at all.

/// A debt-collection case.
///
/// `value` is the recoverable amount (non-negative), `weight_hours` the
/// processing effort (strictly positive). Both are checked when the case
/// enters a [`CasePool`](super::CasePool).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Case {
    /// Unique case identifier.
    pub id: String,
    /// Recoverable monetary value.
    pub value: f64,
    /// Processing cost in hours.
    pub weight_hours: f64,
}

impl Case {
    /// Creates a new case.
    pub fn new(id: impl Into<String>, value: f64, weight_hours: f64) -> Self {
        Self {
            id: id.into(),
            value,
            weight_hours,
        }
    }

    /// Value recovered per processing hour.
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.value / self.weight_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio() {
        let case = Case::new("A", 60.0, 10.0);
        assert!((case.ratio() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_value_ratio() {
        assert_eq!(Case::new("z", 0.0, 3.0).ratio(), 0.0);
    }
}
