use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bank::BankVariant;

/// Number of answer options every forced-choice question carries.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// The four behavioral axes every option maps weight onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitDimension {
    Dominance,
    Influence,
    Steadiness,
    Conscientiousness,
}

impl TraitDimension {
    /// Canonical order, also used to break ties.
    pub const ALL: [TraitDimension; 4] = [
        TraitDimension::Dominance,
        TraitDimension::Influence,
        TraitDimension::Steadiness,
        TraitDimension::Conscientiousness,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            TraitDimension::Dominance => "Dominance",
            TraitDimension::Influence => "Influence",
            TraitDimension::Steadiness => "Steadiness",
            TraitDimension::Conscientiousness => "Conscientiousness",
        }
    }

    pub const fn letter(self) -> char {
        match self {
            TraitDimension::Dominance => 'D',
            TraitDimension::Influence => 'I',
            TraitDimension::Steadiness => 'S',
            TraitDimension::Conscientiousness => 'C',
        }
    }
}

/// Per-dimension weight vector carried by an answer option.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TraitWeights {
    pub dominance: f64,
    pub influence: f64,
    pub steadiness: f64,
    pub conscientiousness: f64,
}

impl TraitWeights {
    pub const fn new(dominance: f64, influence: f64, steadiness: f64, conscientiousness: f64) -> Self {
        Self {
            dominance,
            influence,
            steadiness,
            conscientiousness,
        }
    }

    pub fn get(&self, dimension: TraitDimension) -> f64 {
        match dimension {
            TraitDimension::Dominance => self.dominance,
            TraitDimension::Influence => self.influence,
            TraitDimension::Steadiness => self.steadiness,
            TraitDimension::Conscientiousness => self.conscientiousness,
        }
    }

    /// Dimension carrying the highest weight. Ties resolve in D, I, S, C order.
    pub fn dominant(&self) -> TraitDimension {
        let mut best = TraitDimension::Dominance;
        for dimension in TraitDimension::ALL {
            if self.get(dimension) > self.get(best) {
                best = dimension;
            }
        }
        best
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = (TraitDimension, f64)> + '_ {
        TraitDimension::ALL
            .into_iter()
            .map(move |dimension| (dimension, self.get(dimension)))
    }
}

/// One of the four choices offered by a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub weights: TraitWeights,
}

/// A forced-choice question; the array type pins the option count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: [AnswerOption; OPTIONS_PER_QUESTION],
}

impl Question {
    pub fn option(&self, index: usize) -> Option<&AnswerOption> {
        self.options.get(index)
    }
}

/// Respondent's pick for the question at the same position in the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub most_like: usize,
    pub least_like: usize,
}

impl Response {
    pub const fn new(most_like: usize, least_like: usize) -> Self {
        Self {
            most_like,
            least_like,
        }
    }
}

/// Unnormalized per-dimension totals produced by the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawScores {
    pub dominance: f64,
    pub influence: f64,
    pub steadiness: f64,
    pub conscientiousness: f64,
}

impl RawScores {
    pub fn get(&self, dimension: TraitDimension) -> f64 {
        match dimension {
            TraitDimension::Dominance => self.dominance,
            TraitDimension::Influence => self.influence,
            TraitDimension::Steadiness => self.steadiness,
            TraitDimension::Conscientiousness => self.conscientiousness,
        }
    }

    pub(crate) fn add_scaled(&mut self, weights: &TraitWeights, factor: f64) {
        self.dominance += weights.dominance * factor;
        self.influence += weights.influence * factor;
        self.steadiness += weights.steadiness * factor;
        self.conscientiousness += weights.conscientiousness * factor;
    }
}

/// Integer percentages per dimension, summing to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraitProfile {
    pub dominance: u8,
    pub influence: u8,
    pub steadiness: u8,
    pub conscientiousness: u8,
}

impl TraitProfile {
    pub const BALANCED: TraitProfile = TraitProfile {
        dominance: 25,
        influence: 25,
        steadiness: 25,
        conscientiousness: 25,
    };

    pub const fn new(dominance: u8, influence: u8, steadiness: u8, conscientiousness: u8) -> Self {
        Self {
            dominance,
            influence,
            steadiness,
            conscientiousness,
        }
    }

    pub fn get(&self, dimension: TraitDimension) -> u8 {
        match dimension {
            TraitDimension::Dominance => self.dominance,
            TraitDimension::Influence => self.influence,
            TraitDimension::Steadiness => self.steadiness,
            TraitDimension::Conscientiousness => self.conscientiousness,
        }
    }

    pub fn total(&self) -> u16 {
        TraitDimension::ALL
            .iter()
            .map(|dimension| u16::from(self.get(*dimension)))
            .sum()
    }

    /// Dimensions sorted by descending percentage; equal values keep D, I, S, C order.
    pub fn ranked(&self) -> [(TraitDimension, u8); 4] {
        let mut ranked = TraitDimension::ALL.map(|dimension| (dimension, self.get(dimension)));
        ranked.sort_by(|left, right| right.1.cmp(&left.1));
        ranked
    }
}

/// Trustworthiness meta-scores for one completed assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityBundle {
    pub validity_score: u8,
    pub consistency_score: u8,
    pub social_desirability_score: u8,
    pub is_reliable: bool,
}

/// Degenerate answering patterns detected across the "most like me" sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternAnomaly {
    Alternating,
    SameAnswer,
}

impl PatternAnomaly {
    pub const fn label(self) -> &'static str {
        match self {
            PatternAnomaly::Alternating => "alternating answers",
            PatternAnomaly::SameAnswer => "same answer repeated",
        }
    }
}

/// Final record handed to persistence and presentation callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub variant: BankVariant,
    pub bank_version: String,
    pub profile: TraitProfile,
    pub validity: ValidityBundle,
    pub raw_scores: RawScores,
    pub anomalies: Vec<PatternAnomaly>,
    pub points_awarded: u32,
    pub completed_at: DateTime<Utc>,
}
