use tracing::debug;

use super::super::bank::QuestionBank;
use super::super::domain::{PatternAnomaly, Response, TraitDimension, ValidityBundle};
use super::config::ScoringConfig;
use super::ValidityAnalysis;

pub(crate) fn analyze(
    bank: &QuestionBank,
    responses: &[Response],
    config: &ScoringConfig,
) -> ValidityAnalysis {
    let consistency = consistency_score(bank, responses, config);
    let social_desirability = social_desirability_score(bank, responses, config);
    let anomalies = detect_anomalies(responses, config);

    let mut validity = 100i32;
    let floor = i32::from(config.consistency_floor);
    if i32::from(consistency) < floor {
        validity -= floor - i32::from(consistency);
    }
    let tolerance = i32::from(config.social_desirability_tolerance);
    if i32::from(social_desirability) > tolerance {
        validity -= i32::from(social_desirability) - tolerance;
    }
    for anomaly in &anomalies {
        validity -= i32::from(anomaly_penalty(*anomaly, config));
    }
    let validity_score = validity.clamp(0, 100) as u8;

    debug!(
        consistency,
        social_desirability,
        anomalies = anomalies.len(),
        validity_score,
        "validity analysis complete"
    );

    ValidityAnalysis {
        bundle: ValidityBundle {
            validity_score,
            consistency_score: consistency,
            social_desirability_score: social_desirability,
            is_reliable: is_reliable(validity_score, config),
        },
        anomalies,
    }
}

pub(crate) fn is_reliable(validity_score: u8, config: &ScoringConfig) -> bool {
    validity_score >= config.reliability_threshold
}

/// 100 minus a fixed penalty for every validation pair whose dominant traits disagree.
fn consistency_score(bank: &QuestionBank, responses: &[Response], config: &ScoringConfig) -> u8 {
    let mut score = 100i32;

    for pair in bank.validation_pairs() {
        let original = dominant_pick(bank, responses, &pair.original);
        let validation = dominant_pick(bank, responses, &pair.validation);

        match (original, validation) {
            (Some(original), Some(validation)) if original != validation => {
                debug!(
                    original = %pair.original,
                    validation = %pair.validation,
                    "validation pair mismatch"
                );
                score -= i32::from(config.consistency_penalty_per_mismatch);
            }
            (Some(_), Some(_)) => {}
            _ => debug!(
                original = %pair.original,
                validation = %pair.validation,
                "validation pair not answered; skipped"
            ),
        }
    }

    score.clamp(0, 100) as u8
}

fn dominant_pick(bank: &QuestionBank, responses: &[Response], id: &str) -> Option<TraitDimension> {
    let position = bank.position_of(id)?;
    let response = responses.get(position)?;
    let option = bank.questions()[position].option(response.most_like)?;
    Some(option.weights.dominant())
}

fn social_desirability_score(
    bank: &QuestionBank,
    responses: &[Response],
    config: &ScoringConfig,
) -> u8 {
    let probe_answer = bank
        .social_desirability_probe()
        .and_then(|id| bank.position_of(id))
        .and_then(|position| responses.get(position));

    match probe_answer {
        Some(response) if response.most_like == 0 => config.social_desirability_flagged,
        _ => config.social_desirability_baseline,
    }
}

fn detect_anomalies(responses: &[Response], config: &ScoringConfig) -> Vec<PatternAnomaly> {
    let mut anomalies = Vec::new();
    let picks: Vec<usize> = responses.iter().map(|response| response.most_like).collect();

    if picks.len() >= 2 {
        let transitions = picks.len() - 1;
        let changes = picks.windows(2).filter(|pair| pair[0] != pair[1]).count();
        if changes as f64 / transitions as f64 > config.alternating_ratio_threshold {
            anomalies.push(PatternAnomaly::Alternating);
        }
    }

    if let Some(first) = picks.first() {
        let repeats = picks.iter().filter(|pick| *pick == first).count();
        if repeats as f64 / picks.len() as f64 > config.same_answer_ratio_threshold {
            anomalies.push(PatternAnomaly::SameAnswer);
        }
    }

    anomalies
}

fn anomaly_penalty(anomaly: PatternAnomaly, config: &ScoringConfig) -> u8 {
    match anomaly {
        PatternAnomaly::Alternating => config.alternating_penalty,
        PatternAnomaly::SameAnswer => config.same_answer_penalty,
    }
}
