//! Input validation for case pools.
//!
//! Checks structural integrity of the cases before any solver sees them.
//! Detects:
//! - Duplicate or empty IDs
//! - Negative or non-finite values
//! - Zero, negative, or non-finite hour costs
//!
//! All problems are collected so that a caller fixing its input sees the
//! full list in one pass.

use std::collections::HashSet;
use std::fmt;

use super::Case;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationErrorKind {
    /// Two cases share the same ID.
    DuplicateId,
    /// A case has an empty ID.
    EmptyId,
    /// A case value is negative, NaN, or infinite.
    InvalidValue,
    /// A case hour cost is zero, negative, NaN, or infinite.
    NonPositiveWeight,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a sequence of cases.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues in
/// input order.
pub fn validate_cases(cases: &[Case]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut ids = HashSet::with_capacity(cases.len());

    for case in cases {
        if case.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Case with empty ID",
            ));
        } else if !ids.insert(case.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate case ID: {}", case.id),
            ));
        }

        if !case.value.is_finite() || case.value < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidValue,
                format!("Case '{}' has invalid value {}", case.id, case.value),
            ));
        }

        if !case.weight_hours.is_finite() || case.weight_hours <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveWeight,
                format!("Case '{}' has weight {}", case.id, case.weight_hours),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
