use chrono::{TimeZone, Utc};
use disc_assessment::assessment::{
    describe, import_responses, import_responses_from_path, AssessmentService, BankVariant,
    NegativeScoreStrategy, PatternAnomaly, QuestionBank, Response, ScoringConfig, ScoringEngine,
    TraitDimension, TraitProfile,
};

const DRIVER_EXPORT: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/short_form_driver.csv"
);
const PILOT_BANK: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/pilot_bank.json");

#[test]
fn imported_short_form_export_scores_end_to_end() {
    let bank = QuestionBank::short_form();
    let responses = import_responses_from_path(DRIVER_EXPORT, &bank).expect("fixture imports");
    assert_eq!(responses.len(), bank.len());

    let service = AssessmentService::new(BankVariant::ShortForm);
    let scored = service
        .score(BankVariant::ShortForm, &responses)
        .expect("scores");

    assert_eq!(scored.result.profile, TraitProfile::new(59, 41, 0, 0));
    assert_eq!(scored.result.validity.validity_score, 100);
    assert!(scored.result.anomalies.is_empty());
    assert_eq!(scored.result.points_awarded, 100);
    assert_eq!(scored.description.primary, TraitDimension::Dominance);
    assert_eq!(scored.description.secondary, TraitDimension::Influence);
    assert_eq!(scored.description.label, "The Trailblazer");
}

#[test]
fn custom_json_bank_scores_with_its_variant_preset() {
    let bank = QuestionBank::from_path(PILOT_BANK).expect("bank loads");
    assert_eq!(bank.variant(), BankVariant::ShortForm);
    assert_eq!(bank.version(), "pilot/0.1.0");
    assert_eq!(bank.social_desirability_probe(), Some("c3"));

    let responses = vec![
        Response::new(0, 2),
        Response::new(1, 3),
        Response::new(1, 0),
        Response::new(3, 1),
    ];
    let completed_at = Utc
        .with_ymd_and_hms(2025, 6, 2, 16, 45, 0)
        .single()
        .expect("valid timestamp");

    let result = ScoringEngine::for_variant(bank.variant())
        .score_at(&bank, &responses, completed_at)
        .expect("scores");

    // 3.0 per most-like pick, 1.0 per least-like pick
    assert_eq!(result.raw_scores.get(TraitDimension::Dominance), 9.0);
    assert_eq!(result.raw_scores.get(TraitDimension::Influence), 3.0);
    assert_eq!(result.raw_scores.get(TraitDimension::Steadiness), -3.0);
    assert_eq!(result.raw_scores.get(TraitDimension::Conscientiousness), -1.0);
    assert_eq!(result.profile, TraitProfile::new(75, 25, 0, 0));
    assert_eq!(result.validity.consistency_score, 100);
    assert_eq!(result.validity.social_desirability_score, 20);
    assert_eq!(result.validity.validity_score, 100);
    assert_eq!(result.completed_at, completed_at);

    let description = describe(&result.profile);
    assert_eq!(description.label, "The Trailblazer");
    assert_eq!(description.emoji, "🚀");
}

#[test]
fn custom_bank_penalizes_probe_and_pair_mismatch() {
    let bank = QuestionBank::from_path(PILOT_BANK).expect("bank loads");
    let responses = vec![
        Response::new(1, 3),
        Response::new(1, 3),
        Response::new(0, 1),
        Response::new(0, 1),
    ];

    let result = ScoringEngine::for_variant(bank.variant())
        .score(&bank, &responses)
        .expect("scores");

    // c1 picks influence but c4 picks conscientiousness
    assert_eq!(result.validity.consistency_score, 80);
    assert_eq!(result.validity.social_desirability_score, 100);
    assert_eq!(result.validity.validity_score, 50);
    assert!(!result.validity.is_reliable);
    assert_eq!(result.points_awarded, 25);
    assert!(result.anomalies.is_empty());
}

#[test]
fn serialized_bank_loads_back_unchanged() {
    let bank = QuestionBank::long_form();
    let json = serde_json::to_vec(&bank).expect("bank serializes");
    let reloaded = QuestionBank::from_reader(json.as_slice()).expect("bank reloads");
    assert_eq!(reloaded, bank);
}

#[test]
fn shift_strategy_keeps_rejected_traits_in_the_profile() {
    let bank = QuestionBank::short_form();
    let responses = import_responses(
        "most_like,least_like\n0,3\n0,3\n0,3\n".as_bytes(),
        &bank,
    )
    .expect("imports");

    let clamp = ScoringEngine::new(ScoringConfig::short_form())
        .score(&bank, &responses)
        .expect("scores");
    let shift = ScoringEngine::new(ScoringConfig {
        negative_scores: NegativeScoreStrategy::ShiftByMinimum,
        ..ScoringConfig::short_form()
    })
    .score(&bank, &responses)
    .expect("scores");

    assert_eq!(clamp.profile, TraitProfile::new(100, 0, 0, 0));
    // shifted totals 12/3/3/0 round to 67/17/17/0; the leader absorbs the extra point
    assert_eq!(shift.profile, TraitProfile::new(66, 17, 17, 0));
    assert_eq!(clamp.anomalies, vec![PatternAnomaly::SameAnswer]);
}
