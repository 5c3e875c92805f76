//! Versioned question banks.
//!
//! A bank is plain data handed to the scoring engine by value or reference; nothing here is
//! global. The built-in long and short forms are constructed on demand and custom banks can be
//! loaded from JSON assets with [`QuestionBank::from_reader`].

mod long_form;
mod short_form;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::{AnswerOption, Question, TraitWeights};

/// The two shipped bank shapes; each carries its own scoring preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankVariant {
    LongForm,
    ShortForm,
}

impl BankVariant {
    pub const fn label(self) -> &'static str {
        match self {
            BankVariant::LongForm => "long",
            BankVariant::ShortForm => "short",
        }
    }

    /// Accepts `long`/`short` and their `*_form`/`*-form` spellings, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "long" | "long_form" | "long-form" => Some(Self::LongForm),
            "short" | "short_form" | "short-form" => Some(Self::ShortForm),
            _ => None,
        }
    }
}

/// Two questions expected to elicit the same dominant trait from a genuine respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPair {
    pub original: String,
    pub validation: String,
}

impl ValidationPair {
    pub fn new(original: impl Into<String>, validation: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            validation: validation.into(),
        }
    }
}

/// Errors raised while assembling or loading a question bank.
#[derive(Debug, thiserror::Error)]
pub enum QuestionBankError {
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid question bank JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("question bank has no questions")]
    Empty,
    #[error("duplicate question id '{0}'")]
    DuplicateId(String),
    #[error("question '{question}' option {option} has a negative or non-finite weight")]
    InvalidWeight { question: String, option: usize },
    #[error("validation pair references unknown question '{0}'")]
    UnknownPairQuestion(String),
    #[error("social desirability probe references unknown question '{0}'")]
    UnknownProbe(String),
}

/// Ordered questions plus the validity metadata the analyzer needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionBank {
    variant: BankVariant,
    version: String,
    questions: Vec<Question>,
    validation_pairs: Vec<ValidationPair>,
    social_desirability_probe: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BankDocument {
    variant: BankVariant,
    version: String,
    questions: Vec<Question>,
    #[serde(default)]
    validation_pairs: Vec<ValidationPair>,
    #[serde(default)]
    social_desirability_probe: Option<String>,
}

impl QuestionBank {
    pub fn new(
        variant: BankVariant,
        version: impl Into<String>,
        questions: Vec<Question>,
        validation_pairs: Vec<ValidationPair>,
        social_desirability_probe: Option<String>,
    ) -> Result<Self, QuestionBankError> {
        if questions.is_empty() {
            return Err(QuestionBankError::Empty);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id.as_str()) {
                return Err(QuestionBankError::DuplicateId(question.id.clone()));
            }
            for (index, option) in question.options.iter().enumerate() {
                let valid = option
                    .weights
                    .values()
                    .all(|(_, weight)| weight.is_finite() && weight >= 0.0);
                if !valid {
                    return Err(QuestionBankError::InvalidWeight {
                        question: question.id.clone(),
                        option: index,
                    });
                }
            }
        }

        for pair in &validation_pairs {
            for id in [&pair.original, &pair.validation] {
                if !seen.contains(id.as_str()) {
                    return Err(QuestionBankError::UnknownPairQuestion(id.clone()));
                }
            }
        }

        if let Some(probe) = &social_desirability_probe {
            if !seen.contains(probe.as_str()) {
                return Err(QuestionBankError::UnknownProbe(probe.clone()));
            }
        }

        Ok(Self {
            variant,
            version: version.into(),
            questions,
            validation_pairs,
            social_desirability_probe,
        })
    }

    /// The 31-question long form.
    pub fn long_form() -> Self {
        long_form::bank()
    }

    /// The 15-question short form.
    pub fn short_form() -> Self {
        short_form::bank()
    }

    pub fn for_variant(variant: BankVariant) -> Self {
        match variant {
            BankVariant::LongForm => Self::long_form(),
            BankVariant::ShortForm => Self::short_form(),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, QuestionBankError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, QuestionBankError> {
        let document: BankDocument = serde_json::from_reader(reader)?;
        Self::new(
            document.variant,
            document.version,
            document.questions,
            document.validation_pairs,
            document.social_desirability_probe,
        )
    }

    pub fn variant(&self) -> BankVariant {
        self.variant
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn validation_pairs(&self) -> &[ValidationPair] {
        &self.validation_pairs
    }

    pub fn social_desirability_probe(&self) -> Option<&str> {
        self.social_desirability_probe.as_deref()
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|question| question.id == id)
    }
}

fn option(label: &str, weights: [f64; 4]) -> AnswerOption {
    let [dominance, influence, steadiness, conscientiousness] = weights;
    AnswerOption {
        label: label.to_string(),
        weights: TraitWeights::new(dominance, influence, steadiness, conscientiousness),
    }
}

fn question(id: &str, prompt: &str, options: [AnswerOption; 4]) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::TraitDimension;

    fn assert_well_formed(bank: &QuestionBank) {
        for question in bank.questions() {
            let mut dominants: Vec<TraitDimension> = question
                .options
                .iter()
                .map(|option| option.weights.dominant())
                .collect();
            dominants.sort();
            dominants.dedup();
            assert_eq!(
                dominants.len(),
                4,
                "question {} should signal each dimension exactly once",
                question.id
            );
        }
    }

    #[test]
    fn long_form_has_expected_shape() {
        let bank = QuestionBank::long_form();
        assert_eq!(bank.variant(), BankVariant::LongForm);
        assert_eq!(bank.len(), 31);
        assert_eq!(bank.validation_pairs().len(), 5);
        assert!(bank.social_desirability_probe().is_some());
        assert_well_formed(&bank);
    }

    #[test]
    fn short_form_has_expected_shape() {
        let bank = QuestionBank::short_form();
        assert_eq!(bank.variant(), BankVariant::ShortForm);
        assert_eq!(bank.len(), 15);
        assert_eq!(bank.validation_pairs().len(), 3);
        assert!(bank.social_desirability_probe().is_some());
        assert_well_formed(&bank);
    }

    #[test]
    fn validation_pairs_link_questions_with_matching_signals() {
        for bank in [QuestionBank::long_form(), QuestionBank::short_form()] {
            for pair in bank.validation_pairs() {
                let original = &bank.questions()[bank.position_of(&pair.original).unwrap()];
                let validation = &bank.questions()[bank.position_of(&pair.validation).unwrap()];
                for dimension in TraitDimension::ALL {
                    assert!(original
                        .options
                        .iter()
                        .any(|option| option.weights.dominant() == dimension));
                    assert!(validation
                        .options
                        .iter()
                        .any(|option| option.weights.dominant() == dimension));
                }
            }
        }
    }

    #[test]
    fn parses_variant_spellings() {
        assert_eq!(BankVariant::parse("LONG"), Some(BankVariant::LongForm));
        assert_eq!(BankVariant::parse("short-form"), Some(BankVariant::ShortForm));
        assert_eq!(BankVariant::parse("tiny"), None);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let first = QuestionBank::short_form().questions()[0].clone();
        let err = QuestionBank::new(
            BankVariant::ShortForm,
            "test",
            vec![first.clone(), first],
            Vec::new(),
            None,
        )
        .expect_err("duplicate rejected");
        assert!(matches!(err, QuestionBankError::DuplicateId(_)));
    }

    #[test]
    fn rejects_negative_weights() {
        let mut broken = QuestionBank::short_form().questions()[0].clone();
        broken.options[2].weights.steadiness = -1.0;
        let err = QuestionBank::new(BankVariant::ShortForm, "test", vec![broken], Vec::new(), None)
            .expect_err("negative weight rejected");
        assert!(matches!(
            err,
            QuestionBankError::InvalidWeight { option: 2, .. }
        ));
    }

    #[test]
    fn rejects_dangling_probe_and_pairs() {
        let questions = QuestionBank::short_form().questions().to_vec();
        let err = QuestionBank::new(
            BankVariant::ShortForm,
            "test",
            questions.clone(),
            vec![ValidationPair::new("s01", "missing")],
            None,
        )
        .expect_err("pair rejected");
        assert!(matches!(err, QuestionBankError::UnknownPairQuestion(id) if id == "missing"));

        let err = QuestionBank::new(
            BankVariant::ShortForm,
            "test",
            questions,
            Vec::new(),
            Some("nope".to_string()),
        )
        .expect_err("probe rejected");
        assert!(matches!(err, QuestionBankError::UnknownProbe(_)));
    }

    #[test]
    fn loads_bank_from_json_asset() {
        let json = r#"{
            "variant": "short_form",
            "version": "custom-1",
            "questions": [
                {
                    "id": "c1",
                    "prompt": "Under pressure I",
                    "options": [
                        { "label": "take charge", "weights": { "dominance": 2.0, "influence": 0.0, "steadiness": 0.0, "conscientiousness": 0.0 } },
                        { "label": "rally people", "weights": { "dominance": 0.0, "influence": 2.0, "steadiness": 0.0, "conscientiousness": 0.0 } },
                        { "label": "stay calm", "weights": { "dominance": 0.0, "influence": 0.0, "steadiness": 2.0, "conscientiousness": 0.0 } },
                        { "label": "check the facts", "weights": { "dominance": 0.0, "influence": 0.0, "steadiness": 0.0, "conscientiousness": 2.0 } }
                    ]
                }
            ],
            "social_desirability_probe": "c1"
        }"#;

        let bank = QuestionBank::from_reader(json.as_bytes()).expect("bank loads");
        assert_eq!(bank.version(), "custom-1");
        assert_eq!(bank.len(), 1);
        assert!(bank.validation_pairs().is_empty());
        assert_eq!(bank.social_desirability_probe(), Some("c1"));
    }

    #[test]
    fn rejects_question_with_three_options() {
        let json = r#"{
            "variant": "long_form",
            "version": "broken",
            "questions": [
                {
                    "id": "c1",
                    "prompt": "Three is not enough",
                    "options": [
                        { "label": "a", "weights": { "dominance": 1.0, "influence": 0.0, "steadiness": 0.0, "conscientiousness": 0.0 } },
                        { "label": "b", "weights": { "dominance": 0.0, "influence": 1.0, "steadiness": 0.0, "conscientiousness": 0.0 } },
                        { "label": "c", "weights": { "dominance": 0.0, "influence": 0.0, "steadiness": 1.0, "conscientiousness": 0.0 } }
                    ]
                }
            ]
        }"#;

        let err = QuestionBank::from_reader(json.as_bytes()).expect_err("option count enforced");
        assert!(matches!(err, QuestionBankError::Json(_)));
    }
}
