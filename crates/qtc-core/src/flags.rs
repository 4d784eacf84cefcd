//! Advisory flags.
//!
//! Derived independently of the interpretation notes, but from the same
//! maximum QTc, so the two can never disagree on the tier:
//!
//! 1. QTc range: **Danger** when marked, **Warning** when borderline
//! 2. Heart rate outside the reliable range → **Warning**
//! 3. Clinical-correlation reminder → **Info**, unconditional and last

use qtc_model::{CalculationResult, ClinicalLimits, Flag};

use crate::tier::{QtcTier, classify};

const CORRELATION_REMINDER: &str = "Automated QTc values support, and do not replace, clinical \
     judgement; correlate with the full ECG, medications and electrolytes.";

pub fn derive_flags(result: &CalculationResult, limits: &ClinicalLimits) -> Vec<Flag> {
    let mut flags = Vec::new();

    if let Some(reading) = classify(result, limits) {
        match reading.tier {
            QtcTier::Marked => flags.push(Flag::danger(format!(
                "QTc of {} ms or more: urgent clinical evaluation is recommended.",
                limits.marked_qtc_ms
            ))),
            QtcTier::Borderline => flags.push(Flag::warning(format!(
                "QTc between {} and {} ms: borderline prolongation, review QT-prolonging drugs \
                 and electrolytes.",
                limits.borderline_qtc_ms, limits.marked_qtc_ms
            ))),
            QtcTier::WithinRange => {}
        }
    }

    if !limits.is_reliable_heart_rate(result.heart_rate) {
        flags.push(Flag::warning(format!(
            "Heart rate outside {}-{} bpm: QT correction formulas are less reliable at rate \
             extremes.",
            limits.reliable_heart_rate_min, limits.reliable_heart_rate_max
        )));
    }

    flags.push(Flag::info(CORRELATION_REMINDER));
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtc_model::{FlagSeverity, FormulaValues, NarrowFormulaValues};

    fn narrow(heart_rate: f64, max: f64) -> CalculationResult {
        CalculationResult {
            heart_rate,
            qt_interval: 400.0,
            rr_interval_seconds: 60.0 / heart_rate,
            formulas: FormulaValues::Narrow {
                values: NarrowFormulaValues {
                    bazett: 400.0,
                    fridericia: 400.0,
                    framingham: 400.0,
                    hodges: 400.0,
                    rautaharju_hr: max,
                },
            },
        }
    }

    fn severities(flags: &[Flag]) -> Vec<FlagSeverity> {
        flags.iter().map(|flag| flag.severity).collect()
    }

    #[test]
    fn test_range_flags_are_exclusive() {
        let limits = ClinicalLimits::default();
        assert_eq!(
            severities(&derive_flags(&narrow(80.0, 520.0), &limits)),
            vec![FlagSeverity::Danger, FlagSeverity::Info]
        );
        assert_eq!(
            severities(&derive_flags(&narrow(80.0, 480.0), &limits)),
            vec![FlagSeverity::Warning, FlagSeverity::Info]
        );
        assert_eq!(
            severities(&derive_flags(&narrow(80.0, 420.0), &limits)),
            vec![FlagSeverity::Info]
        );
    }

    #[test]
    fn test_rate_extremes_add_warning() {
        let limits = ClinicalLimits::default();
        let flags = derive_flags(&narrow(35.0, 520.0), &limits);
        assert_eq!(
            severities(&flags),
            vec![FlagSeverity::Danger, FlagSeverity::Warning, FlagSeverity::Info]
        );
        assert!(flags[1].message.starts_with("Heart rate outside 40-120 bpm"));
        assert_eq!(
            severities(&derive_flags(&narrow(125.0, 400.0), &limits)),
            vec![FlagSeverity::Warning, FlagSeverity::Info]
        );
        assert_eq!(
            severities(&derive_flags(&narrow(120.0, 400.0), &limits)),
            vec![FlagSeverity::Info]
        );
    }

    #[test]
    fn test_info_flag_is_always_last() {
        let flags = derive_flags(&narrow(60.0, 400.0), &ClinicalLimits::default());
        let last = flags.last().expect("at least one flag");
        assert_eq!(last.severity, FlagSeverity::Info);
        assert_eq!(last.message, CORRELATION_REMINDER);
    }
}
