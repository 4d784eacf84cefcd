//! Clinical-range summary and notes for a calculation result.

use qtc_model::{CalculationResult, ClinicalLimits, Interpretation, QrsType};
use tracing::debug;

use crate::tier::{QtcTier, classify};

const FALLBACK_SUMMARY: &str = "No QTc values were available to interpret.";

const WIDE_QRS_NOTE: &str = "With a wide QRS, part of the QT interval reflects ventricular \
     depolarization; the JT interval may better reflect repolarization.";

/// Summarize the maximum QTc against the clinical limits.
///
/// Tier notes come first, then the wide-QRS note when applicable.
pub fn interpret(result: &CalculationResult, limits: &ClinicalLimits) -> Interpretation {
    let mut interpretation = match classify(result, limits) {
        Some(reading) => {
            debug!(max_qtc = reading.max_qtc, tier = reading.tier.as_str(), "interpreting");
            tier_interpretation(reading.tier, limits)
        }
        None => Interpretation {
            summary: FALLBACK_SUMMARY.to_string(),
            notes: Vec::new(),
        },
    };
    if result.mode() == QrsType::Wide {
        interpretation.notes.push(WIDE_QRS_NOTE.to_string());
    }
    interpretation
}

fn tier_interpretation(tier: QtcTier, limits: &ClinicalLimits) -> Interpretation {
    match tier {
        QtcTier::Marked => Interpretation {
            summary: format!(
                "Marked QTc prolongation: at least one formula gives {} ms or more.",
                limits.marked_qtc_ms
            ),
            notes: vec![
                "A QTc of this length is associated with a substantially increased risk of \
                 torsades de pointes."
                    .to_string(),
                "Correction formulas can differ by tens of milliseconds; confirm the finding \
                 with a manual measurement and more than one formula."
                    .to_string(),
            ],
        },
        QtcTier::Borderline => Interpretation {
            summary: format!(
                "Borderline to mildly prolonged QTc: the highest value lies between {} and {} ms.",
                limits.borderline_qtc_ms, limits.marked_qtc_ms
            ),
            notes: vec![
                "Upper limits of normal vary with sex, age and laboratory; values in this range \
                 need clinical context."
                    .to_string(),
                "Bazett over-corrects at faster heart rates; Fridericia or Framingham are often \
                 preferred when the formulas disagree."
                    .to_string(),
            ],
        },
        QtcTier::WithinRange => Interpretation {
            summary: format!(
                "QTc within conventional ranges: every formula is below {} ms.",
                limits.borderline_qtc_ms
            ),
            notes: vec![
                "No sex- or age-specific cut-offs were applied to this result.".to_string(),
            ],
        },
    }
}
