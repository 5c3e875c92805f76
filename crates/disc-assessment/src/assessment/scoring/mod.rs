mod accumulator;
mod config;
mod normalizer;
mod points;
mod validity;

pub use config::{NegativeScoreStrategy, RemainderStrategy, ScoringConfig};
pub use points::points_for;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::bank::{BankVariant, QuestionBank};
use super::domain::{
    AssessmentResult, PatternAnomaly, Question, RawScores, Response, TraitProfile, ValidityBundle,
};
use super::validation::{validate_responses, InvalidAssessmentInput};

/// Stateless scorer that applies one weighting configuration to any question bank.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

/// Validity meta-scores together with the answering patterns that were penalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidityAnalysis {
    pub bundle: ValidityBundle,
    pub anomalies: Vec<PatternAnomaly>,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Engine carrying the preset that belongs with a built-in bank.
    pub fn for_variant(variant: BankVariant) -> Self {
        Self::new(ScoringConfig::for_variant(variant))
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Validates and scores a completed assessment, stamped with the current time.
    pub fn score(
        &self,
        bank: &QuestionBank,
        responses: &[Response],
    ) -> Result<AssessmentResult, InvalidAssessmentInput> {
        self.score_at(bank, responses, Utc::now())
    }

    /// Same as [`ScoringEngine::score`] with a caller-supplied completion time.
    pub fn score_at(
        &self,
        bank: &QuestionBank,
        responses: &[Response],
        completed_at: DateTime<Utc>,
    ) -> Result<AssessmentResult, InvalidAssessmentInput> {
        if let Err(err) = validate_responses(bank, responses) {
            warn!(variant = bank.variant().label(), error = %err, "rejected assessment input");
            return Err(err);
        }

        let raw_scores = self.accumulate(bank.questions(), responses);
        let profile = self.normalize(&raw_scores);
        let ValidityAnalysis { bundle, anomalies } = self.analyze(bank, responses);
        let points_awarded = points_for(bundle.validity_score);

        info!(
            variant = bank.variant().label(),
            version = bank.version(),
            answered = responses.len(),
            validity = bundle.validity_score,
            reliable = bundle.is_reliable,
            "assessment scored"
        );

        Ok(AssessmentResult {
            variant: bank.variant(),
            bank_version: bank.version().to_string(),
            profile,
            validity: bundle,
            raw_scores,
            anomalies,
            points_awarded,
            completed_at,
        })
    }

    /// Raw per-dimension totals. Tolerates short response lists and out-of-range picks.
    pub fn accumulate(&self, questions: &[Question], responses: &[Response]) -> RawScores {
        accumulator::accumulate(questions, responses, &self.config)
    }

    pub fn normalize(&self, raw: &RawScores) -> TraitProfile {
        normalizer::normalize(raw, &self.config)
    }

    pub fn analyze(&self, bank: &QuestionBank, responses: &[Response]) -> ValidityAnalysis {
        validity::analyze(bank, responses, &self.config)
    }

    pub fn is_reliable(&self, validity_score: u8) -> bool {
        validity::is_reliable(validity_score, &self.config)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
