//! Input validation for QTc calculations.
//!
//! The validator is the only gate in front of the formula engine:
//!
//! 1. Heart rate missing, non-numeric or not positive → **Error**
//! 2. QT interval missing, non-numeric or not positive → **Error**
//! 3. Wide QRS: QRS duration invalid → **Error**; sex missing → **Error**
//! 4. Usable heart rate outside the plausible range (30-140 bpm) → **Error**
//!
//! There are no warnings. Any issue means no calculation.

mod checks;
mod issue;
mod validated;

pub use issue::{FieldProblem, Measurement, ValidationFailure, ValidationIssue};
pub use validated::{ValidatedInputs, WideInputs};

use qtc_model::{ClinicalLimits, RawInputs};

/// Validation context.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    limits: ClinicalLimits,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the clinical limits used for the plausibility check.
    pub fn with_limits(mut self, limits: ClinicalLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Every issue in the inputs, in rule order. Empty means acceptable.
    pub fn issues(&self, inputs: &RawInputs) -> Vec<ValidationIssue> {
        checks::run_all(inputs, &self.limits)
    }

    /// Validate inputs, returning values the formula engine can trust.
    pub fn validate(&self, inputs: &RawInputs) -> Result<ValidatedInputs, ValidationFailure> {
        let issues = self.issues(inputs);
        match accepted_inputs(inputs) {
            Some(validated) if issues.is_empty() => Ok(validated),
            _ => Err(ValidationFailure::new(issues)),
        }
    }
}

/// Extract the fields the selected mode needs; only meaningful once every
/// check has passed.
fn accepted_inputs(inputs: &RawInputs) -> Option<ValidatedInputs> {
    let heart_rate = inputs.heart_rate?;
    let qt_interval = inputs.qt_interval?;
    if !inputs.qrs_type.is_wide() {
        return Some(ValidatedInputs::narrow(heart_rate, qt_interval));
    }
    Some(ValidatedInputs::wide(
        heart_rate,
        qt_interval,
        inputs.qrs_duration?,
        inputs.sex?,
    ))
}

/// Validate with the default clinical limits.
pub fn validate(inputs: &RawInputs) -> Result<ValidatedInputs, ValidationFailure> {
    Validator::new().validate(inputs)
}

/// Human-readable messages for every issue; empty means acceptable.
pub fn validation_messages(inputs: &RawInputs) -> Vec<String> {
    Validator::new()
        .issues(inputs)
        .iter()
        .map(ToString::to_string)
        .collect()
}
