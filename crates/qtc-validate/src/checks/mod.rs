//! Validation check modules.
//!
//! Each module performs one kind of check. The order in [`run_all`] is the
//! order issues are reported in.

mod plausibility;
mod required;

use qtc_model::{ClinicalLimits, RawInputs};

use crate::issue::{Measurement, ValidationIssue};

/// Run all checks and collect every issue, in rule order.
pub fn run_all(inputs: &RawInputs, limits: &ClinicalLimits) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    // 1-2. Heart rate and QT must be positive numbers
    issues.extend(required::check_measurement(
        Measurement::HeartRate,
        inputs.heart_rate,
    ));
    issues.extend(required::check_measurement(
        Measurement::QtInterval,
        inputs.qt_interval,
    ));

    // 3. Wide mode needs QRS duration and sex
    if inputs.qrs_type.is_wide() {
        issues.extend(required::check_measurement(
            Measurement::QrsDuration,
            inputs.qrs_duration,
        ));
        issues.extend(required::check_sex(inputs.sex));
    }

    // 4. Heart rate must sit in the range the corrections were derived on
    issues.extend(plausibility::check_heart_rate(inputs.heart_rate, limits));

    issues
}
