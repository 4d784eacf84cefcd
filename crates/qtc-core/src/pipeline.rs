//! Single entry point from raw inputs to an assessment.
//!
//! Validation gates everything: on any issue nothing downstream runs and
//! the caller only gets the failure. On success the formula result feeds
//! interpretation and flagging independently.

use qtc_model::{Assessment, ClinicalLimits, RawInputs};
use qtc_validate::{ValidationFailure, Validator};
use tracing::{info, info_span, warn};

use crate::flags::derive_flags;
use crate::formulas::calculate;
use crate::interpret::interpret;
use crate::tier::classify;

/// Evaluation context holding the clinical limits.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    limits: ClinicalLimits,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: ClinicalLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Validate, calculate, interpret and flag.
    pub fn evaluate(&self, inputs: &RawInputs) -> Result<Assessment, ValidationFailure> {
        let span = info_span!("evaluate", mode = %inputs.qrs_type);
        let _guard = span.enter();

        let validated = Validator::new()
            .with_limits(self.limits)
            .validate(inputs)
            .inspect_err(|failure| {
                warn!(issue_count = failure.len(), "inputs rejected");
            })?;

        let result = calculate(&validated);
        let interpretation = interpret(&result, &self.limits);
        let flags = derive_flags(&result, &self.limits);

        if let Some(reading) = classify(&result, &self.limits) {
            info!(
                max_qtc = reading.max_qtc,
                tier = reading.tier.as_str(),
                flag_count = flags.len(),
                "evaluation complete"
            );
        }

        Ok(Assessment {
            result,
            interpretation,
            flags,
        })
    }
}

/// Evaluate with the default clinical limits.
pub fn evaluate(inputs: &RawInputs) -> Result<Assessment, ValidationFailure> {
    Calculator::new().evaluate(inputs)
}

/// Evaluate with caller-supplied clinical limits.
pub fn evaluate_with(
    inputs: &RawInputs,
    limits: &ClinicalLimits,
) -> Result<Assessment, ValidationFailure> {
    Calculator::new().with_limits(*limits).evaluate(inputs)
}
