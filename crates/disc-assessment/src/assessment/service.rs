use serde::Serialize;
use tracing::info;

use super::bank::{BankVariant, QuestionBank};
use super::describe::{describe, ProfileDescription};
use super::domain::{AssessmentResult, Response};
use super::scoring::ScoringEngine;
use super::validation::InvalidAssessmentInput;

/// A bank paired with the engine preset it is scored with.
#[derive(Debug, Clone)]
struct ScoringSuite {
    bank: QuestionBank,
    engine: ScoringEngine,
}

impl ScoringSuite {
    fn built_in(variant: BankVariant) -> Self {
        Self {
            bank: QuestionBank::for_variant(variant),
            engine: ScoringEngine::for_variant(variant),
        }
    }
}

/// Service facade over both built-in banks, used by the HTTP router and the CLI.
#[derive(Debug, Clone)]
pub struct AssessmentService {
    default_variant: BankVariant,
    long_form: ScoringSuite,
    short_form: ScoringSuite,
}

/// Scored result together with its presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredAssessment {
    pub result: AssessmentResult,
    pub description: ProfileDescription,
}

impl AssessmentService {
    pub fn new(default_variant: BankVariant) -> Self {
        Self {
            default_variant,
            long_form: ScoringSuite::built_in(BankVariant::LongForm),
            short_form: ScoringSuite::built_in(BankVariant::ShortForm),
        }
    }

    pub fn default_variant(&self) -> BankVariant {
        self.default_variant
    }

    pub fn bank(&self, variant: BankVariant) -> &QuestionBank {
        &self.suite(variant).bank
    }

    /// Resolves a caller-supplied variant name, falling back to the configured default.
    pub fn resolve_variant(
        &self,
        requested: Option<&str>,
    ) -> Result<BankVariant, AssessmentServiceError> {
        match requested {
            None => Ok(self.default_variant),
            Some(raw) => BankVariant::parse(raw)
                .ok_or_else(|| AssessmentServiceError::UnknownVariant(raw.to_string())),
        }
    }

    pub fn score(
        &self,
        variant: BankVariant,
        responses: &[Response],
    ) -> Result<ScoredAssessment, AssessmentServiceError> {
        let suite = self.suite(variant);
        let result = suite.engine.score(&suite.bank, responses)?;
        let description = describe(&result.profile);

        info!(
            variant = variant.label(),
            label = %description.label,
            points = result.points_awarded,
            "assessment described"
        );

        Ok(ScoredAssessment {
            result,
            description,
        })
    }

    fn suite(&self, variant: BankVariant) -> &ScoringSuite {
        match variant {
            BankVariant::LongForm => &self.long_form,
            BankVariant::ShortForm => &self.short_form,
        }
    }
}

impl Default for AssessmentService {
    fn default() -> Self {
        Self::new(BankVariant::LongForm)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("unknown assessment variant '{0}'")]
    UnknownVariant(String),
    #[error(transparent)]
    Input(#[from] InvalidAssessmentInput),
}
