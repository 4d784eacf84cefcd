//! Validation issue types.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Numeric measurement checked by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Measurement {
    HeartRate,
    QtInterval,
    QrsDuration,
}

impl Measurement {
    pub fn label(&self) -> &'static str {
        match self {
            Measurement::HeartRate => "Heart rate",
            Measurement::QtInterval => "QT interval",
            Measurement::QrsDuration => "QRS duration",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Measurement::HeartRate => "bpm",
            Measurement::QtInterval | Measurement::QrsDuration => "ms",
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.unit())
    }
}

/// Why a measurement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldProblem {
    Missing,
    NotANumber,
    NotPositive,
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FieldProblem::Missing => "is required",
            FieldProblem::NotANumber => "must be a number",
            FieldProblem::NotPositive => "must be greater than zero",
        };
        f.write_str(text)
    }
}

/// A single rejected input. Every issue blocks calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    #[error("{field} {problem}.")]
    InvalidMeasurement {
        field: Measurement,
        problem: FieldProblem,
    },

    #[error("Sex is required for wide-QRS calculations.")]
    SexMissing,

    #[error(
        "Heart rate {value} bpm is outside the typical range ({min}-{max} bpm); \
         check the measurement before correcting QT."
    )]
    HeartRateImplausible { value: f64, min: f64, max: f64 },
}

impl ValidationIssue {
    /// The measurement the issue refers to, if any.
    pub fn measurement(&self) -> Option<Measurement> {
        match self {
            ValidationIssue::InvalidMeasurement { field, .. } => Some(*field),
            ValidationIssue::HeartRateImplausible { .. } => Some(Measurement::HeartRate),
            ValidationIssue::SexMissing => None,
        }
    }
}

/// The only failure kind of the calculator: one or more rejected inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("invalid inputs: {}", join_messages(.issues.as_slice()))]
pub struct ValidationFailure {
    issues: Vec<ValidationIssue>,
}

impl ValidationFailure {
    pub(crate) fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    /// Returns `None` for an empty list, which is not a failure.
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Option<Self> {
        if issues.is_empty() {
            None
        } else {
            Some(Self { issues })
        }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Human-readable messages in rule order.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Never true for a constructed failure.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

fn join_messages(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
