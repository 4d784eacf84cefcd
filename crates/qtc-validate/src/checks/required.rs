//! Presence and numeric checks.
//!
//! A measurement is rejected if it is:
//! - missing (blank field)
//! - not a number (NaN or infinite)
//! - zero or negative

use qtc_model::Sex;

use crate::issue::{FieldProblem, Measurement, ValidationIssue};

pub fn check_measurement(field: Measurement, value: Option<f64>) -> Option<ValidationIssue> {
    let problem = measurement_problem(value)?;
    Some(ValidationIssue::InvalidMeasurement { field, problem })
}

pub fn check_sex(sex: Option<Sex>) -> Option<ValidationIssue> {
    match sex {
        Some(_) => None,
        None => Some(ValidationIssue::SexMissing),
    }
}

/// Returns true for a finite, strictly positive measurement.
pub fn is_usable(value: Option<f64>) -> bool {
    measurement_problem(value).is_none()
}

fn measurement_problem(value: Option<f64>) -> Option<FieldProblem> {
    let Some(value) = value else {
        return Some(FieldProblem::Missing);
    };
    if !value.is_finite() {
        return Some(FieldProblem::NotANumber);
    }
    if value <= 0.0 {
        return Some(FieldProblem::NotPositive);
    }
    None
}
