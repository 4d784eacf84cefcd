//! Calculation results.
//!
//! A [`CalculationResult`] is produced once per evaluation and never mutated.
//! Which formula set was computed is encoded in [`FormulaValues`], so a
//! result can never carry both narrow and wide values.

use serde::{Deserialize, Serialize};

use crate::enums::{NarrowFormula, QrsType, Sex, WideFormula};

/// QTc (ms) for each narrow-QRS correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NarrowFormulaValues {
    pub bazett: f64,
    pub fridericia: f64,
    pub framingham: f64,
    pub hodges: f64,
    pub rautaharju_hr: f64,
}

impl NarrowFormulaValues {
    pub fn get(&self, formula: NarrowFormula) -> f64 {
        match formula {
            NarrowFormula::Bazett => self.bazett,
            NarrowFormula::Fridericia => self.fridericia,
            NarrowFormula::Framingham => self.framingham,
            NarrowFormula::Hodges => self.hodges,
            NarrowFormula::RautaharjuHr => self.rautaharju_hr,
        }
    }

    /// Values in catalogue order.
    pub fn entries(&self) -> Vec<(NarrowFormula, f64)> {
        NarrowFormula::ALL
            .iter()
            .map(|&formula| (formula, self.get(formula)))
            .collect()
    }

    /// Every narrow value is a corrected QT.
    pub fn qtc_values(&self) -> Vec<f64> {
        NarrowFormula::ALL.iter().map(|&f| self.get(f)).collect()
    }
}

/// Wide-QRS values (ms). The modified QT is an intermediate, not a QTc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WideFormulaValues {
    pub bogossian_modified_qt: f64,
    pub bogossian_fridericia: f64,
    pub rautaharju_wide: f64,
}

impl WideFormulaValues {
    pub fn get(&self, formula: WideFormula) -> f64 {
        match formula {
            WideFormula::BogossianModifiedQt => self.bogossian_modified_qt,
            WideFormula::BogossianFridericia => self.bogossian_fridericia,
            WideFormula::RautaharjuWide => self.rautaharju_wide,
        }
    }

    pub fn entries(&self) -> Vec<(WideFormula, f64)> {
        WideFormula::ALL
            .iter()
            .map(|&formula| (formula, self.get(formula)))
            .collect()
    }

    /// Only the corrected values; the modified QT is excluded.
    pub fn qtc_values(&self) -> Vec<f64> {
        WideFormula::ALL
            .iter()
            .filter(|formula| formula.is_corrected())
            .map(|&f| self.get(f))
            .collect()
    }
}

/// The formula set that was computed, with the inputs only that set uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum FormulaValues {
    Narrow {
        values: NarrowFormulaValues,
    },
    Wide {
        qrs_duration: f64,
        sex: Sex,
        values: WideFormulaValues,
    },
}

/// Outcome of the formula engine for one set of validated inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub heart_rate: f64,
    pub qt_interval: f64,
    /// RR interval in seconds, `60 / heart_rate`.
    pub rr_interval_seconds: f64,
    #[serde(flatten)]
    pub formulas: FormulaValues,
}

impl CalculationResult {
    pub fn mode(&self) -> QrsType {
        match self.formulas {
            FormulaValues::Narrow { .. } => QrsType::Narrow,
            FormulaValues::Wide { .. } => QrsType::Wide,
        }
    }

    pub fn narrow_values(&self) -> Option<&NarrowFormulaValues> {
        match &self.formulas {
            FormulaValues::Narrow { values } => Some(values),
            FormulaValues::Wide { .. } => None,
        }
    }

    pub fn wide_values(&self) -> Option<&WideFormulaValues> {
        match &self.formulas {
            FormulaValues::Wide { values, .. } => Some(values),
            FormulaValues::Narrow { .. } => None,
        }
    }

    pub fn qrs_duration(&self) -> Option<f64> {
        match self.formulas {
            FormulaValues::Wide { qrs_duration, .. } => Some(qrs_duration),
            FormulaValues::Narrow { .. } => None,
        }
    }

    pub fn sex(&self) -> Option<Sex> {
        match self.formulas {
            FormulaValues::Wide { sex, .. } => Some(sex),
            FormulaValues::Narrow { .. } => None,
        }
    }

    /// The QTc values that count for classification in this mode.
    pub fn qtc_values(&self) -> Vec<f64> {
        match &self.formulas {
            FormulaValues::Narrow { values } => values.qtc_values(),
            FormulaValues::Wide { values, .. } => values.qtc_values(),
        }
    }

    /// Largest applicable QTc, or `None` when there is nothing to compare.
    ///
    /// Interpretation and flagging both classify against this value.
    pub fn max_qtc(&self) -> Option<f64> {
        self.qtc_values().into_iter().reduce(f64::max)
    }
}
