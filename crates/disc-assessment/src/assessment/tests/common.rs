use std::sync::Arc;

use axum::response::Response as HttpResponse;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::assessment::bank::{BankVariant, QuestionBank};
use crate::assessment::domain::{Question, Response, TraitDimension};
use crate::assessment::service::AssessmentService;

/// Leans dominant with an influence streak and the odd conscientious answer.
pub(super) const DRIVER: [TraitDimension; 6] = [
    TraitDimension::Dominance,
    TraitDimension::Dominance,
    TraitDimension::Dominance,
    TraitDimension::Influence,
    TraitDimension::Influence,
    TraitDimension::Conscientiousness,
];

pub(super) fn completed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// Index of the option whose weights peak on `dimension`.
pub(super) fn pick(question: &Question, dimension: TraitDimension) -> usize {
    question
        .options
        .iter()
        .position(|option| option.weights.dominant() == dimension)
        .unwrap_or_else(|| panic!("question {} has no {:?} option", question.id, dimension))
}

pub(super) fn opposite(dimension: TraitDimension) -> TraitDimension {
    match dimension {
        TraitDimension::Dominance => TraitDimension::Steadiness,
        TraitDimension::Influence => TraitDimension::Conscientiousness,
        TraitDimension::Steadiness => TraitDimension::Dominance,
        TraitDimension::Conscientiousness => TraitDimension::Influence,
    }
}

/// A respondent who cycles through `preference` and answers every validation question the
/// same way as its original.
pub(super) fn respond_as(bank: &QuestionBank, preference: &[TraitDimension]) -> Vec<Response> {
    let mut chosen: Vec<TraitDimension> = Vec::with_capacity(bank.len());
    let mut responses = Vec::with_capacity(bank.len());

    for (position, question) in bank.questions().iter().enumerate() {
        let echoed = bank
            .validation_pairs()
            .iter()
            .find(|pair| pair.validation == question.id)
            .and_then(|pair| bank.position_of(&pair.original))
            .map(|original| chosen[original]);
        let most = echoed.unwrap_or(preference[position % preference.len()]);

        chosen.push(most);
        responses.push(Response::new(
            pick(question, most),
            pick(question, opposite(most)),
        ));
    }

    responses
}

pub(super) fn uniform(bank: &QuestionBank) -> Vec<Response> {
    vec![Response::new(0, 3); bank.len()]
}

pub(super) fn zigzag(bank: &QuestionBank) -> Vec<Response> {
    (0..bank.len()).map(|i| Response::new(i % 2, 3)).collect()
}

pub(super) fn position(bank: &QuestionBank, id: &str) -> usize {
    bank.position_of(id)
        .unwrap_or_else(|| panic!("bank has no question {id}"))
}

pub(super) fn service() -> Arc<AssessmentService> {
    Arc::new(AssessmentService::new(BankVariant::LongForm))
}

pub(super) async fn read_json_body(response: HttpResponse) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
