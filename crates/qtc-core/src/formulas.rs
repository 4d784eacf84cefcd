//! QT correction formulas.
//!
//! Units throughout: QT and QRS in milliseconds, RR in seconds, heart rate
//! in beats per minute. Nothing here rounds; rounding belongs to whoever
//! renders the numbers. Every function assumes validated input (heart rate
//! and QT strictly positive), which keeps the roots and divisions defined.

use qtc_model::{CalculationResult, FormulaValues, NarrowFormulaValues, Sex, WideFormulaValues};
use qtc_validate::ValidatedInputs;
use tracing::debug;

/// Rautaharju wide-QRS sex constant for men (ms).
const RAUTAHARJU_MALE_K: f64 = -22.0;
/// Rautaharju wide-QRS sex constant for women (ms).
const RAUTAHARJU_FEMALE_K: f64 = -34.0;

/// RR interval in seconds.
pub fn rr_interval_seconds(heart_rate: f64) -> f64 {
    60.0 / heart_rate
}

pub fn bazett(qt: f64, rr: f64) -> f64 {
    qt / rr.sqrt()
}

pub fn fridericia(qt: f64, rr: f64) -> f64 {
    qt / rr.cbrt()
}

pub fn framingham(qt: f64, rr: f64) -> f64 {
    qt + 154.0 * (1.0 - rr)
}

pub fn hodges(qt: f64, rr: f64) -> f64 {
    qt + 1.75 * (60.0 / rr - 60.0)
}

pub fn rautaharju_hr(qt: f64, heart_rate: f64) -> f64 {
    qt * (120.0 + heart_rate) / 180.0
}

/// Bogossian modified QT: the QT with half the QRS removed.
pub fn bogossian_modified_qt(qt: f64, qrs: f64) -> f64 {
    qt - 0.5 * qrs
}

/// Fridericia correction of the Bogossian modified QT.
pub fn bogossian_fridericia(modified_qt: f64, rr: f64) -> f64 {
    fridericia(modified_qt, rr)
}

pub fn rautaharju_wide(qt: f64, heart_rate: f64, qrs: f64, sex: Sex) -> f64 {
    qt - 155.0 * (60.0 / heart_rate - 1.0) - 0.93 * (qrs - 139.0) + rautaharju_sex_constant(sex)
}

/// Every non-male value takes the female constant.
pub fn rautaharju_sex_constant(sex: Sex) -> f64 {
    match sex {
        Sex::Male => RAUTAHARJU_MALE_K,
        Sex::Female => RAUTAHARJU_FEMALE_K,
    }
}

pub fn narrow_values(qt: f64, heart_rate: f64) -> NarrowFormulaValues {
    let rr = rr_interval_seconds(heart_rate);
    NarrowFormulaValues {
        bazett: bazett(qt, rr),
        fridericia: fridericia(qt, rr),
        framingham: framingham(qt, rr),
        hodges: hodges(qt, rr),
        rautaharju_hr: rautaharju_hr(qt, heart_rate),
    }
}

pub fn wide_values(qt: f64, heart_rate: f64, qrs: f64, sex: Sex) -> WideFormulaValues {
    let rr = rr_interval_seconds(heart_rate);
    let modified_qt = bogossian_modified_qt(qt, qrs);
    WideFormulaValues {
        bogossian_modified_qt: modified_qt,
        bogossian_fridericia: bogossian_fridericia(modified_qt, rr),
        rautaharju_wide: rautaharju_wide(qt, heart_rate, qrs, sex),
    }
}

/// Compute the formula set selected by the validated inputs.
pub fn calculate(inputs: &ValidatedInputs) -> CalculationResult {
    let heart_rate = inputs.heart_rate();
    let qt_interval = inputs.qt_interval();
    let rr_interval_seconds = rr_interval_seconds(heart_rate);

    let formulas = match inputs.wide_inputs() {
        None => FormulaValues::Narrow {
            values: narrow_values(qt_interval, heart_rate),
        },
        Some(wide) => FormulaValues::Wide {
            qrs_duration: wide.qrs_duration(),
            sex: wide.sex(),
            values: wide_values(qt_interval, heart_rate, wide.qrs_duration(), wide.sex()),
        },
    };
    debug!(
        mode = %inputs.mode(),
        heart_rate,
        qt_interval,
        rr_interval_seconds,
        ?formulas,
        "formulas computed"
    );

    CalculationResult {
        heart_rate,
        qt_interval,
        rr_interval_seconds,
        formulas,
    }
}
