use serde::{Deserialize, Serialize};

use super::super::bank::BankVariant;

/// How negative raw totals are brought back to a non-negative range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeScoreStrategy {
    /// Each negative dimension is clamped to zero on its own.
    Clamp,
    /// Every dimension is shifted up by the magnitude of the lowest one.
    ShiftByMinimum,
}

/// How rounding drift is settled so the profile sums to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainderStrategy {
    /// The whole correction lands on the currently highest dimension.
    HighestDimension,
    /// Hamilton apportionment: floor everything, hand leftover points to the largest remainders.
    LargestRemainder,
}

/// Scoring dials shared by every bank variant.
///
/// Only the most/least weighting differs between the shipped presets; penalties and thresholds
/// are identical so the two forms stay comparable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub most_like_weight: f64,
    pub least_like_weight: f64,
    pub negative_scores: NegativeScoreStrategy,
    pub remainder: RemainderStrategy,
    pub consistency_penalty_per_mismatch: u8,
    pub consistency_floor: u8,
    pub social_desirability_flagged: u8,
    pub social_desirability_baseline: u8,
    pub social_desirability_tolerance: u8,
    pub alternating_ratio_threshold: f64,
    pub alternating_penalty: u8,
    pub same_answer_ratio_threshold: f64,
    pub same_answer_penalty: u8,
    pub reliability_threshold: u8,
}

impl ScoringConfig {
    /// Long form: full weight for "most like me", half weight subtracted for "least like me".
    pub fn long_form() -> Self {
        Self {
            most_like_weight: 1.0,
            least_like_weight: 0.5,
            ..Self::shared()
        }
    }

    /// Short form: "most like me" amplified 3x, "least like me" subtracted at full weight.
    pub fn short_form() -> Self {
        Self {
            most_like_weight: 3.0,
            least_like_weight: 1.0,
            ..Self::shared()
        }
    }

    pub fn for_variant(variant: BankVariant) -> Self {
        match variant {
            BankVariant::LongForm => Self::long_form(),
            BankVariant::ShortForm => Self::short_form(),
        }
    }

    fn shared() -> Self {
        Self {
            most_like_weight: 1.0,
            least_like_weight: 0.5,
            negative_scores: NegativeScoreStrategy::Clamp,
            remainder: RemainderStrategy::HighestDimension,
            consistency_penalty_per_mismatch: 20,
            consistency_floor: 80,
            social_desirability_flagged: 100,
            social_desirability_baseline: 20,
            social_desirability_tolerance: 50,
            alternating_ratio_threshold: 0.8,
            alternating_penalty: 20,
            same_answer_ratio_threshold: 0.7,
            same_answer_penalty: 25,
            reliability_threshold: 70,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::long_form()
    }
}
