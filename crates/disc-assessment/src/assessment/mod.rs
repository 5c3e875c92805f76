//! Forced-choice DISC assessment: question banks, scoring, validity analysis and the
//! descriptive layer.
//!
//! Everything here is a pure function of `(bank, responses)`. Banks are values passed in by
//! the caller, so the long and short forms (or a custom bank loaded from JSON) can be scored
//! side by side.

pub mod bank;
pub mod describe;
pub mod domain;
pub mod import;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use bank::{BankVariant, QuestionBank, QuestionBankError, ValidationPair};
pub use describe::{describe, describe_with, DescriptionThresholds, ProfileDescription};
pub use domain::{
    AnswerOption, AssessmentResult, PatternAnomaly, Question, RawScores, Response, TraitDimension,
    TraitProfile, TraitWeights, ValidityBundle,
};
pub use import::{import_responses, import_responses_from_path, ResponseImportError};
pub use router::{assessment_router, BankView, QuestionView, ScoreRequest};
pub use scoring::{
    points_for, NegativeScoreStrategy, RemainderStrategy, ScoringConfig, ScoringEngine,
    ValidityAnalysis,
};
pub use service::{AssessmentService, AssessmentServiceError, ScoredAssessment};
pub use validation::{validate_responses, InvalidAssessmentInput};
