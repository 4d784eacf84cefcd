//! Raw, unvalidated calculator inputs.

use serde::{Deserialize, Serialize};

use crate::enums::{QrsType, Sex};

/// Inputs exactly as captured from a form, command line or request.
///
/// Numbers are optional because any of them may be left blank. A present
/// but non-finite number (NaN or infinity) stands for a value that could not
/// be read as a number. Nothing here is checked; see `qtc-validate`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawInputs {
    pub qrs_type: QrsType,
    /// Heart rate in beats per minute.
    pub heart_rate: Option<f64>,
    /// QT interval in milliseconds.
    pub qt_interval: Option<f64>,
    /// QRS duration in milliseconds. Only read in wide mode.
    pub qrs_duration: Option<f64>,
    /// Only read in wide mode.
    pub sex: Option<Sex>,
}

impl RawInputs {
    pub fn narrow(heart_rate: f64, qt_interval: f64) -> Self {
        Self {
            qrs_type: QrsType::Narrow,
            heart_rate: Some(heart_rate),
            qt_interval: Some(qt_interval),
            qrs_duration: None,
            sex: None,
        }
    }

    pub fn wide(heart_rate: f64, qt_interval: f64, qrs_duration: f64, sex: Sex) -> Self {
        Self {
            qrs_type: QrsType::Wide,
            heart_rate: Some(heart_rate),
            qt_interval: Some(qt_interval),
            qrs_duration: Some(qrs_duration),
            sex: Some(sex),
        }
    }

    /// Coerce text fields the way a web form does.
    ///
    /// Blank fields become `None`; text that does not parse as a number is
    /// kept as NaN so the validator can report it as non-numeric. Sex text is
    /// mapped with [`Sex::from_form_value`].
    pub fn from_text(
        qrs_type: QrsType,
        heart_rate: &str,
        qt_interval: &str,
        qrs_duration: &str,
        sex: &str,
    ) -> Self {
        Self {
            qrs_type,
            heart_rate: parse_numeric_field(heart_rate),
            qt_interval: parse_numeric_field(qt_interval),
            qrs_duration: parse_numeric_field(qrs_duration),
            sex: Sex::from_form_value(sex),
        }
    }
}

/// Parse a numeric form field: blank is `None`, garbage is `Some(NaN)`.
pub fn parse_numeric_field(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.parse::<f64>().unwrap_or(f64::NAN))
}
