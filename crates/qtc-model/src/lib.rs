pub mod enums;
pub mod error;
pub mod inputs;
pub mod options;
pub mod report;
pub mod result;

pub use enums::{FlagSeverity, NarrowFormula, QrsType, Sex, WideFormula};
pub use error::ModelError;
pub use inputs::{RawInputs, parse_numeric_field};
pub use options::ClinicalLimits;
pub use report::{Assessment, Flag, Interpretation};
pub use result::{CalculationResult, FormulaValues, NarrowFormulaValues, WideFormulaValues};

#[cfg(test)]
mod tests {
    use super::*;

    fn narrow_result() -> CalculationResult {
        CalculationResult {
            heart_rate: 60.0,
            qt_interval: 400.0,
            rr_interval_seconds: 1.0,
            formulas: FormulaValues::Narrow {
                values: NarrowFormulaValues {
                    bazett: 400.0,
                    fridericia: 400.0,
                    framingham: 400.0,
                    hodges: 400.0,
                    rautaharju_hr: 400.0,
                },
            },
        }
    }

    #[test]
    fn assessment_counts() {
        let assessment = Assessment {
            result: narrow_result(),
            interpretation: Interpretation::default(),
            flags: vec![
                Flag::danger("urgent"),
                Flag::warning("rate"),
                Flag::info("correlate"),
            ],
        };
        assert_eq!(assessment.count(FlagSeverity::Warning), 1);
        assert_eq!(assessment.count(FlagSeverity::Info), 1);
        assert_eq!(assessment.highest_severity(), Some(FlagSeverity::Danger));
    }

    #[test]
    fn assessment_serializes() {
        let assessment = Assessment {
            result: narrow_result(),
            interpretation: Interpretation {
                summary: "ok".to_string(),
                notes: vec!["note".to_string()],
            },
            flags: vec![Flag::info("correlate")],
        };
        let json = serde_json::to_string(&assessment).expect("serialize assessment");
        let round: Assessment = serde_json::from_str(&json).expect("deserialize assessment");
        assert_eq!(round, assessment);
        assert!(json.contains(r#""severity":"info""#));
    }
}
