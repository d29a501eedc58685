//! Case pool: the validated, immutable input shared by every solver.
//!
//! # Key Types
//!
//! - [`Case`]: One case with value and hour cost
//! - [`CasePool`]: Ordered, validated collection of cases with unique IDs
//! - [`Capacity`]: Non-negative hour budget
//!
//! Input order is significant: solvers break ties by pool position so that
//! repeated runs give identical selections.

mod capacity;
mod case;
mod validation;

pub use capacity::Capacity;
pub use case::Case;
pub use validation::{validate_cases, ValidationError, ValidationErrorKind};

use crate::error::{SolveError, SolveResult};

/// An ordered, validated collection of cases.
///
/// Construction rejects negative values, non-positive hour costs, and
/// duplicate IDs with [`SolveError::Validation`]. Once built the pool is
/// never mutated, so it can be shared freely across solver threads.
///
/// ```
/// use u_casepack::{Case, CasePool};
///
/// let pool = CasePool::new(vec![
///     Case::new("A", 60.0, 10.0),
///     Case::new("B", 100.0, 20.0),
/// ]).unwrap();
/// assert_eq!(pool.len(), 2);
/// assert_eq!(pool.total_weight(), 30.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Case>", into = "Vec<Case>")
)]
pub struct CasePool {
    cases: Vec<Case>,
}

impl CasePool {
    /// Validates `cases` and wraps them in a pool.
    pub fn new(cases: Vec<Case>) -> SolveResult<Self> {
        validate_cases(&cases).map_err(SolveError::Validation)?;
        Ok(Self { cases })
    }

    /// Cases in input order.
    #[inline]
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    /// Returns the case at pool position `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Case> {
        self.cases.get(index)
    }

    /// Iterates over cases in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Case> {
        self.cases.iter()
    }

    /// Number of cases.
    #[inline]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the pool holds no cases.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Sum of all hour costs.
    pub fn total_weight(&self) -> f64 {
        self.cases.iter().map(|c| c.weight_hours).sum()
    }

    /// Sum of all case values.
    pub fn total_value(&self) -> f64 {
        self.cases.iter().map(|c| c.value).sum()
    }

    /// Pool position of the case with `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.cases.iter().position(|c| c.id == id)
    }
}

impl TryFrom<Vec<Case>> for CasePool {
    type Error = SolveError;

    fn try_from(cases: Vec<Case>) -> SolveResult<Self> {
        CasePool::new(cases)
    }
}

impl From<CasePool> for Vec<Case> {
    fn from(pool: CasePool) -> Vec<Case> {
        pool.cases
    }
}

impl<'a> IntoIterator for &'a CasePool {
    type Item = &'a Case;
    type IntoIter = std::slice::Iter<'a, Case>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_pool() {
        let pool = CasePool::new(vec![Case::new("a", 1.0, 2.0), Case::new("b", 3.0, 4.0)]).unwrap();
        assert_eq!(pool.len(), 2);
        assert!(!pool.is_empty());
        assert_eq!(pool.total_value(), 4.0);
        assert_eq!(pool.total_weight(), 6.0);
        assert_eq!(pool.position("b"), Some(1));
        assert_eq!(pool.position("zz"), None);
        assert_eq!(pool.get(0).map(|c| c.id.as_str()), Some("a"));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let err = CasePool::new(vec![Case::new("a", 1.0, 2.0), Case::new("a", 3.0, 4.0)])
            .unwrap_err();
        match err {
            SolveError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_pool() {
        let pool = CasePool::new(Vec::new()).unwrap();
        assert!(pool.is_empty());
        assert_eq!(pool.total_weight(), 0.0);
    }

    #[test]
    fn test_try_from_and_back() {
        let cases = vec![Case::new("x", 5.0, 1.0)];
        let pool = CasePool::try_from(cases.clone()).unwrap();
        let back: Vec<Case> = pool.into();
        assert_eq!(back, cases);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let json = r#"[
            {"id": "a", "value": 1.0, "weight_hours": 2.0},
            {"id": "b", "value": 3.0, "weight_hours": 4.0}
        ]"#;
        let pool: CasePool = serde_json::from_str(json).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.position("b"), Some(1));

        let duplicate = r#"[
            {"id": "a", "value": 1.0, "weight_hours": 2.0},
            {"id": "a", "value": 3.0, "weight_hours": 4.0}
        ]"#;
        let err = serde_json::from_str::<CasePool>(duplicate).unwrap_err();
        assert!(err.to_string().contains("Duplicate case ID: a"), "{err}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_as_sequence() {
        let pool = CasePool::new(vec![Case::new("x", 5.0, 1.0)]).unwrap();
        let json = serde_json::to_string(&pool).unwrap();
        assert_eq!(json, r#"[{"id":"x","value":5.0,"weight_hours":1.0}]"#);
    }
}
