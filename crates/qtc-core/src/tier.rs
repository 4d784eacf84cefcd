//! QTc range classification shared by interpretation and flagging.

use serde::Serialize;

use qtc_model::{CalculationResult, ClinicalLimits};

/// Clinical range of the maximum QTc. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QtcTier {
    /// Below the borderline threshold (460 ms by default).
    WithinRange,
    /// From the borderline threshold up to, not including, the marked one.
    Borderline,
    /// At or above the marked threshold (500 ms by default).
    Marked,
}

impl QtcTier {
    /// Highest tier whose lower bound `max_qtc` reaches.
    pub fn classify(max_qtc: f64, limits: &ClinicalLimits) -> Self {
        if max_qtc >= limits.marked_qtc_ms {
            QtcTier::Marked
        } else if max_qtc >= limits.borderline_qtc_ms {
            QtcTier::Borderline
        } else {
            QtcTier::WithinRange
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QtcTier::WithinRange => "within_range",
            QtcTier::Borderline => "borderline",
            QtcTier::Marked => "marked",
        }
    }
}

/// The maximum applicable QTc and the tier it falls in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierReading {
    pub max_qtc: f64,
    pub tier: QtcTier,
}

/// Classify a result. `None` when the result has no QTc values.
pub fn classify(result: &CalculationResult, limits: &ClinicalLimits) -> Option<TierReading> {
    let max_qtc = result.max_qtc()?;
    Some(TierReading {
        max_qtc,
        tier: QtcTier::classify(max_qtc, limits),
    })
}
