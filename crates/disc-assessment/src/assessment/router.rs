use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::bank::{BankVariant, QuestionBank};
use super::domain::Response as AssessmentResponse;
use super::service::AssessmentService;

/// Router builder exposing the question banks and the scoring endpoint.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/assessments/banks/:variant", get(bank_handler))
        .route("/api/v1/assessments/score", post(score_handler))
        .with_state(service)
}

/// Scoring request; `variant` falls back to the service default when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub variant: Option<String>,
    pub responses: Vec<AssessmentResponse>,
}

/// Public view of a bank: prompts and option labels without the trait weights.
#[derive(Debug, Clone, Serialize)]
pub struct BankView {
    pub variant: BankVariant,
    pub version: String,
    pub questions: Vec<QuestionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
}

impl From<&QuestionBank> for BankView {
    fn from(bank: &QuestionBank) -> Self {
        Self {
            variant: bank.variant(),
            version: bank.version().to_string(),
            questions: bank
                .questions()
                .iter()
                .map(|question| QuestionView {
                    id: question.id.clone(),
                    prompt: question.prompt.clone(),
                    options: question
                        .options
                        .iter()
                        .map(|option| option.label.clone())
                        .collect(),
                })
                .collect(),
        }
    }
}

pub(crate) async fn bank_handler(
    State(service): State<Arc<AssessmentService>>,
    Path(variant): Path<String>,
) -> Response {
    match BankVariant::parse(&variant) {
        Some(variant) => {
            let view = BankView::from(service.bank(variant));
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        None => {
            let payload = json!({
                "error": format!("unknown assessment variant '{variant}'"),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn score_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response {
    let scored = service
        .resolve_variant(request.variant.as_deref())
        .and_then(|variant| service.score(variant, &request.responses));

    match scored {
        Ok(scored) => (StatusCode::OK, axum::Json(scored)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
