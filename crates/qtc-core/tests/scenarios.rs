//! End-to-end evaluation scenarios.

use qtc_core::{QtcTier, classify, evaluate, evaluate_with};
use qtc_model::{ClinicalLimits, FlagSeverity, QrsType, RawInputs, Sex};
use qtc_validate::{FieldProblem, Measurement, ValidationIssue};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

fn severities(flags: &[qtc_model::Flag]) -> Vec<FlagSeverity> {
    flags.iter().map(|flag| flag.severity).collect()
}

#[test]
fn test_formulas_converge_at_sixty_bpm() {
    let assessment = evaluate(&RawInputs::narrow(60.0, 400.0)).expect("valid inputs");
    let result = &assessment.result;
    assert_eq!(result.mode(), QrsType::Narrow);
    assert_close(result.rr_interval_seconds, 1.0, 1e-12);
    let values = result.narrow_values().expect("narrow values");
    for (formula, value) in values.entries() {
        assert!((value - 400.0).abs() < 1e-9, "{formula} = {value}");
    }
    assert!(result.wide_values().is_none());
    assert!(
        assessment
            .interpretation
            .summary
            .contains("within conventional ranges")
    );
    assert_eq!(assessment.interpretation.notes.len(), 1);
    assert_eq!(severities(&assessment.flags), vec![FlagSeverity::Info]);
}

#[test]
fn test_bazett_drives_borderline_at_one_hundred_bpm() {
    let assessment = evaluate(&RawInputs::narrow(100.0, 380.0)).expect("valid inputs");
    let result = &assessment.result;
    assert_close(result.rr_interval_seconds, 0.6, 1e-12);
    let values = result.narrow_values().expect("narrow values");
    assert_close(values.bazett, 490.57, 0.01);
    assert_eq!(result.max_qtc(), Some(values.bazett));

    assert!(assessment.interpretation.summary.starts_with("Borderline"));
    assert_eq!(assessment.interpretation.notes.len(), 2);
    assert_eq!(
        severities(&assessment.flags),
        vec![FlagSeverity::Warning, FlagSeverity::Info]
    );
}

#[test]
fn test_wide_qrs_male_is_borderline_with_wide_note() {
    let assessment =
        evaluate(&RawInputs::wide(90.0, 460.0, 160.0, Sex::Male)).expect("valid inputs");
    let result = &assessment.result;
    assert_eq!(result.mode(), QrsType::Wide);
    assert_eq!(result.sex(), Some(Sex::Male));
    assert_eq!(result.qrs_duration(), Some(160.0));
    assert_close(result.rr_interval_seconds, 0.6667, 1e-4);

    let values = result.wide_values().expect("wide values");
    assert_close(values.bogossian_modified_qt, 380.0, 1e-9);
    assert_close(values.bogossian_fridericia, 434.99, 0.01);
    assert_close(values.rautaharju_wide, 470.14, 0.01);
    assert_eq!(result.max_qtc(), Some(values.rautaharju_wide));

    let notes = &assessment.interpretation.notes;
    assert!(assessment.interpretation.summary.starts_with("Borderline"));
    assert_eq!(notes.len(), 3);
    assert!(notes[2].contains("JT interval"));
    assert_eq!(
        severities(&assessment.flags),
        vec![FlagSeverity::Warning, FlagSeverity::Info]
    );
}

#[test]
fn test_modified_qt_never_sets_the_tier() {
    // A modified QT of 460 ms would be borderline if it counted.
    let assessment =
        evaluate(&RawInputs::wide(30.0, 560.0, 200.0, Sex::Male)).expect("valid inputs");
    let values = assessment.result.wide_values().expect("wide values");
    assert_close(values.bogossian_modified_qt, 460.0, 1e-9);
    let reading = classify(&assessment.result, &ClinicalLimits::default()).expect("reading");
    assert_eq!(
        reading.max_qtc,
        values.bogossian_fridericia.max(values.rautaharju_wide)
    );
    assert_eq!(reading.tier, QtcTier::WithinRange);
    assert!(
        assessment
            .interpretation
            .summary
            .contains("within conventional ranges")
    );
}

#[test]
fn test_marked_prolongation_raises_danger() {
    let assessment = evaluate(&RawInputs::narrow(80.0, 480.0)).expect("valid inputs");
    assert!(assessment.interpretation.summary.starts_with("Marked"));
    assert_eq!(assessment.interpretation.notes.len(), 2);
    assert_eq!(
        severities(&assessment.flags),
        vec![FlagSeverity::Danger, FlagSeverity::Info]
    );
    assert_eq!(assessment.highest_severity(), Some(FlagSeverity::Danger));
}

#[test]
fn test_slow_rate_adds_reliability_warning() {
    let assessment = evaluate(&RawInputs::narrow(35.0, 420.0)).expect("valid inputs");
    let flags = severities(&assessment.flags);
    assert_eq!(flags.last(), Some(&FlagSeverity::Info));
    assert!(
        assessment
            .flags
            .iter()
            .any(|flag| flag.message.contains("less reliable"))
    );
}

#[test]
fn test_zero_heart_rate_halts_pipeline() {
    let failure = evaluate(&RawInputs::narrow(0.0, 400.0)).unwrap_err();
    assert!(!failure.messages().is_empty());
    assert_eq!(
        failure.issues()[0],
        ValidationIssue::InvalidMeasurement {
            field: Measurement::HeartRate,
            problem: FieldProblem::NotPositive,
        }
    );
}

#[test]
fn test_implausible_heart_rate_halts_pipeline() {
    let failure = evaluate(&RawInputs::narrow(150.0, 400.0)).unwrap_err();
    assert_eq!(failure.len(), 1);
    assert!(matches!(
        failure.issues()[0],
        ValidationIssue::HeartRateImplausible { .. }
    ));
}

#[test]
fn test_wide_mode_without_sex_halts_pipeline() {
    let inputs = RawInputs {
        sex: None,
        ..RawInputs::wide(90.0, 460.0, 160.0, Sex::Male)
    };
    let failure = evaluate(&inputs).unwrap_err();
    assert_eq!(failure.issues(), &[ValidationIssue::SexMissing]);
}

#[test]
fn test_non_male_form_value_uses_female_constant() {
    let male = evaluate(&RawInputs::from_text(QrsType::Wide, "90", "460", "160", "male"))
        .expect("valid inputs");
    let other = evaluate(&RawInputs::from_text(QrsType::Wide, "90", "460", "160", "other"))
        .expect("valid inputs");
    assert_eq!(other.result.sex(), Some(Sex::Female));
    let male_value = male.result.wide_values().expect("wide").rautaharju_wide;
    let other_value = other.result.wide_values().expect("wide").rautaharju_wide;
    assert_close(male_value - other_value, 12.0, 1e-9);
}

#[test]
fn test_abbreviated_male_form_value_uses_female_constant() {
    let male = evaluate(&RawInputs::from_text(QrsType::Wide, "90", "460", "160", " MALE "))
        .expect("valid inputs");
    let initial = evaluate(&RawInputs::from_text(QrsType::Wide, "90", "460", "160", "m"))
        .expect("valid inputs");
    assert_eq!(male.result.sex(), Some(Sex::Male));
    assert_eq!(initial.result.sex(), Some(Sex::Female));
    let male_value = male.result.wide_values().expect("wide").rautaharju_wide;
    let initial_value = initial.result.wide_values().expect("wide").rautaharju_wide;
    // 460 - 155 * (60/90 - 1) - 0.93 * 21 - 34
    assert_close(initial_value, 458.1367, 1e-3);
    assert_close(male_value - initial_value, 12.0, 1e-9);
}

#[test]
fn test_custom_limits_change_tiers_and_gates() {
    let limits = ClinicalLimits::default()
        .with_qtc_thresholds(440.0, 480.0)
        .with_plausible_heart_rate(20.0, 200.0);
    let assessment = evaluate_with(&RawInputs::narrow(60.0, 450.0), &limits).expect("valid");
    let reading = classify(&assessment.result, &limits).expect("reading");
    assert_eq!(reading.tier, QtcTier::Borderline);
    assert!(evaluate_with(&RawInputs::narrow(150.0, 400.0), &limits).is_ok());
}

#[test]
fn test_repeated_evaluation_is_identical() {
    let inputs = RawInputs::wide(72.0, 450.0, 150.0, Sex::Female);
    let first = evaluate(&inputs).expect("valid inputs");
    let second = evaluate(&inputs).expect("valid inputs");
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize"),
        serde_json::to_string(&second).expect("serialize")
    );
}
