//! Plain-text rendering of assessments and validation failures.
//!
//! Intervals are shown as whole milliseconds and RR with three decimals.

use std::fmt;

use serde_json::json;

use qtc_model::{Assessment, CalculationResult, FormulaValues};
use qtc_validate::ValidationFailure;

/// Round a millisecond value for display.
pub fn round_ms(value: f64) -> i64 {
    value.round() as i64
}

pub fn format_ms(value: f64) -> String {
    format!("{} ms", round_ms(value))
}

pub fn format_rr(seconds: f64) -> String {
    format!("{seconds:.3} s")
}

/// One computed formula, ready for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormulaRow {
    pub name: &'static str,
    pub value: f64,
    /// False for intermediate values that are not a QTc.
    pub is_qtc: bool,
}

impl FormulaRow {
    pub fn kind(&self) -> &'static str {
        if self.is_qtc { "QTc" } else { "intermediate" }
    }
}

pub fn formula_rows(result: &CalculationResult) -> Vec<FormulaRow> {
    match &result.formulas {
        FormulaValues::Narrow { values } => values
            .entries()
            .into_iter()
            .map(|(formula, value)| FormulaRow {
                name: formula.name(),
                value,
                is_qtc: true,
            })
            .collect(),
        FormulaValues::Wide { values, .. } => values
            .entries()
            .into_iter()
            .map(|(formula, value)| FormulaRow {
                name: formula.name(),
                value,
                is_qtc: formula.is_corrected(),
            })
            .collect(),
    }
}

pub fn render_text(assessment: &Assessment) -> String {
    TextReport(assessment).to_string()
}

pub fn render_failure(failure: &ValidationFailure) -> String {
    FailureReport(failure).to_string()
}

/// Body printed on stdout for a rejected input in JSON mode.
pub fn render_failure_json(failure: &ValidationFailure) -> serde_json::Value {
    json!({ "errors": failure.messages() })
}

struct TextReport<'a>(&'a Assessment);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assessment = self.0;
        let result = &assessment.result;
        writeln!(f, "Mode: {}", result.mode())?;
        writeln!(f, "Heart rate: {} bpm", result.heart_rate)?;
        writeln!(f, "QT interval: {}", format_ms(result.qt_interval))?;
        if let (Some(qrs), Some(sex)) = (result.qrs_duration(), result.sex()) {
            writeln!(f, "QRS duration: {}", format_ms(qrs))?;
            writeln!(f, "Sex: {sex}")?;
        }
        writeln!(f, "RR interval: {}", format_rr(result.rr_interval_seconds))?;
        writeln!(f)?;

        writeln!(f, "Formulas:")?;
        for row in formula_rows(result) {
            writeln!(f, "  {}: {} ({})", row.name, format_ms(row.value), row.kind())?;
        }
        writeln!(f)?;

        writeln!(f, "Summary: {}", assessment.interpretation.summary)?;
        for note in &assessment.interpretation.notes {
            writeln!(f, "  - {note}")?;
        }
        writeln!(f)?;

        writeln!(f, "Flags:")?;
        for flag in &assessment.flags {
            writeln!(
                f,
                "  [{}] {}",
                flag.severity.as_str().to_uppercase(),
                flag.message
            )?;
        }
        Ok(())
    }
}

struct FailureReport<'a>(&'a ValidationFailure);

impl fmt::Display for FailureReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cannot calculate QTc:")?;
        for issue in self.0.issues() {
            writeln!(f, "  - {issue}")?;
        }
        Ok(())
    }
}
