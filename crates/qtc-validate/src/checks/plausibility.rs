//! Physiological plausibility of the heart rate.
//!
//! Only runs once the heart rate itself is a usable number, so a bad value
//! never yields two issues. Out-of-range rates block calculation.

use qtc_model::ClinicalLimits;

use super::required::is_usable;
use crate::issue::ValidationIssue;

pub fn check_heart_rate(heart_rate: Option<f64>, limits: &ClinicalLimits) -> Option<ValidationIssue> {
    if !is_usable(heart_rate) {
        return None;
    }
    let value = heart_rate?;
    if limits.is_plausible_heart_rate(value) {
        return None;
    }
    Some(ValidationIssue::HeartRateImplausible {
        value,
        min: limits.plausible_heart_rate_min,
        max: limits.plausible_heart_rate_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_unusable_rates() {
        let limits = ClinicalLimits::default();
        assert_eq!(check_heart_rate(None, &limits), None);
        assert_eq!(check_heart_rate(Some(0.0), &limits), None);
        assert_eq!(check_heart_rate(Some(f64::NAN), &limits), None);
    }

    #[test]
    fn flags_rates_outside_limits() {
        let limits = ClinicalLimits::default();
        assert!(check_heart_rate(Some(29.0), &limits).is_some());
        assert!(check_heart_rate(Some(141.0), &limits).is_some());
        assert_eq!(check_heart_rate(Some(30.0), &limits), None);
        assert_eq!(check_heart_rate(Some(140.0), &limits), None);
    }

    #[test]
    fn respects_custom_limits() {
        let limits = ClinicalLimits::default().with_plausible_heart_rate(20.0, 200.0);
        assert_eq!(check_heart_rate(Some(150.0), &limits), None);
    }
}
