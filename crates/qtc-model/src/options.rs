//! Clinical cut-offs used by validation, interpretation and flagging.

use serde::{Deserialize, Serialize};

/// Heart-rate and QTc limits.
///
/// The defaults are the conventional adult thresholds. Lower bounds of the
/// QTc tiers are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClinicalLimits {
    /// Below this heart rate (bpm) the input is rejected as implausible.
    pub plausible_heart_rate_min: f64,
    /// Above this heart rate (bpm) the input is rejected as implausible.
    pub plausible_heart_rate_max: f64,
    /// Maximum QTc (ms) at or above which the result is borderline.
    pub borderline_qtc_ms: f64,
    /// Maximum QTc (ms) at or above which prolongation is marked.
    pub marked_qtc_ms: f64,
    /// Below this heart rate (bpm) the corrections are flagged as unreliable.
    pub reliable_heart_rate_min: f64,
    /// Above this heart rate (bpm) the corrections are flagged as unreliable.
    pub reliable_heart_rate_max: f64,
}

impl Default for ClinicalLimits {
    fn default() -> Self {
        Self {
            plausible_heart_rate_min: 30.0,
            plausible_heart_rate_max: 140.0,
            borderline_qtc_ms: 460.0,
            marked_qtc_ms: 500.0,
            reliable_heart_rate_min: 40.0,
            reliable_heart_rate_max: 120.0,
        }
    }
}

impl ClinicalLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plausible_heart_rate(mut self, min: f64, max: f64) -> Self {
        self.plausible_heart_rate_min = min;
        self.plausible_heart_rate_max = max;
        self
    }

    pub fn with_qtc_thresholds(mut self, borderline: f64, marked: f64) -> Self {
        self.borderline_qtc_ms = borderline;
        self.marked_qtc_ms = marked;
        self
    }

    pub fn with_reliable_heart_rate(mut self, min: f64, max: f64) -> Self {
        self.reliable_heart_rate_min = min;
        self.reliable_heart_rate_max = max;
        self
    }

    pub fn is_plausible_heart_rate(&self, heart_rate: f64) -> bool {
        heart_rate >= self.plausible_heart_rate_min && heart_rate <= self.plausible_heart_rate_max
    }

    pub fn is_reliable_heart_rate(&self, heart_rate: f64) -> bool {
        heart_rate >= self.reliable_heart_rate_min && heart_rate <= self.reliable_heart_rate_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_are_inclusive() {
        let limits = ClinicalLimits::default();
        assert!(limits.is_plausible_heart_rate(30.0));
        assert!(limits.is_plausible_heart_rate(140.0));
        assert!(!limits.is_plausible_heart_rate(29.9));
        assert!(!limits.is_plausible_heart_rate(140.1));
        assert!(limits.is_reliable_heart_rate(40.0));
        assert!(limits.is_reliable_heart_rate(120.0));
        assert!(!limits.is_reliable_heart_rate(39.0));
        assert!(!limits.is_reliable_heart_rate(121.0));
    }

    #[test]
    fn builders_override_defaults() {
        let limits = ClinicalLimits::new()
            .with_qtc_thresholds(450.0, 480.0)
            .with_plausible_heart_rate(20.0, 200.0);
        assert_eq!(limits.borderline_qtc_ms, 450.0);
        assert_eq!(limits.marked_qtc_ms, 480.0);
        assert!(limits.is_plausible_heart_rate(180.0));
        assert_eq!(limits.reliable_heart_rate_max, 120.0);
    }
}
