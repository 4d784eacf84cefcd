//! Property tests for the formula engine and pipeline.

use proptest::prelude::*;
use qtc_core::{QtcTier, evaluate, formulas};
use qtc_model::{ClinicalLimits, RawInputs, Sex};

fn sex_strategy() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female)]
}

proptest! {
    #[test]
    fn prop_narrow_values_are_finite(hr in 0.1f64..1000.0, qt in 0.1f64..2000.0) {
        let values = formulas::narrow_values(qt, hr);
        for (_, value) in values.entries() {
            prop_assert!(value.is_finite());
        }
        prop_assert!(values.bazett > 0.0);
        prop_assert!(values.fridericia > 0.0);
    }

    #[test]
    fn prop_rr_is_sixty_over_rate(hr in 30.0f64..=140.0, qt in 200.0f64..700.0) {
        let assessment = evaluate(&RawInputs::narrow(hr, qt)).expect("plausible inputs");
        prop_assert_eq!(assessment.result.rr_interval_seconds, 60.0 / hr);
        prop_assert!(assessment.result.rr_interval_seconds > 0.0);
    }

    #[test]
    fn prop_evaluation_is_idempotent(
        hr in 30.0f64..=140.0,
        qt in 200.0f64..700.0,
        qrs in 80.0f64..220.0,
        sex in sex_strategy(),
    ) {
        let inputs = RawInputs::wide(hr, qt, qrs, sex);
        let first = evaluate(&inputs).expect("plausible inputs");
        let second = evaluate(&inputs).expect("plausible inputs");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_exactly_one_range_flag(hr in 40.0f64..=120.0, qt in 200.0f64..700.0) {
        let assessment = evaluate(&RawInputs::narrow(hr, qt)).expect("plausible inputs");
        let max = assessment.result.max_qtc().expect("narrow values");
        let range_flags = assessment.flags.len() - 1;
        let expected = match QtcTier::classify(max, &ClinicalLimits::default()) {
            QtcTier::WithinRange => 0,
            QtcTier::Borderline | QtcTier::Marked => 1,
        };
        prop_assert_eq!(range_flags, expected);
    }

    #[test]
    fn prop_sex_only_shifts_rautaharju(
        hr in 30.0f64..=140.0,
        qt in 200.0f64..700.0,
        qrs in 80.0f64..220.0,
    ) {
        let male = formulas::wide_values(qt, hr, qrs, Sex::Male);
        let female = formulas::wide_values(qt, hr, qrs, Sex::Female);
        prop_assert_eq!(male.bogossian_modified_qt, female.bogossian_modified_qt);
        prop_assert_eq!(male.bogossian_fridericia, female.bogossian_fridericia);
        prop_assert!((male.rautaharju_wide - female.rautaharju_wide - 12.0).abs() < 1e-9);
    }
}
