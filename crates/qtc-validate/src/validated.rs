//! Inputs that passed validation.
//!
//! These types can only be built by the validator, so anything holding a
//! [`ValidatedInputs`] has finite, positive measurements and, in wide mode,
//! a QRS duration and sex.

use qtc_model::{QrsType, Sex};

/// QRS-specific inputs, present only in wide mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WideInputs {
    qrs_duration: f64,
    sex: Sex,
}

impl WideInputs {
    pub fn qrs_duration(&self) -> f64 {
        self.qrs_duration
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedInputs {
    heart_rate: f64,
    qt_interval: f64,
    wide: Option<WideInputs>,
}

impl ValidatedInputs {
    pub(crate) fn narrow(heart_rate: f64, qt_interval: f64) -> Self {
        Self {
            heart_rate,
            qt_interval,
            wide: None,
        }
    }

    pub(crate) fn wide(heart_rate: f64, qt_interval: f64, qrs_duration: f64, sex: Sex) -> Self {
        Self {
            heart_rate,
            qt_interval,
            wide: Some(WideInputs { qrs_duration, sex }),
        }
    }

    pub fn mode(&self) -> QrsType {
        if self.wide.is_some() {
            QrsType::Wide
        } else {
            QrsType::Narrow
        }
    }

    /// Heart rate in bpm, always > 0.
    pub fn heart_rate(&self) -> f64 {
        self.heart_rate
    }

    /// QT interval in ms, always > 0.
    pub fn qt_interval(&self) -> f64 {
        self.qt_interval
    }

    pub fn wide_inputs(&self) -> Option<&WideInputs> {
        self.wide.as_ref()
    }
}
