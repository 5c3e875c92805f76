//! Human-readable presentation of a trait profile.

mod tables;

use serde::{Deserialize, Serialize};

use super::domain::{TraitDimension, TraitProfile};

/// Label, emoji and narrative lists shown alongside a scored profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDescription {
    pub label: String,
    pub emoji: String,
    pub primary: TraitDimension,
    pub secondary: TraitDimension,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub ideal_environment: Vec<String>,
    pub motivators: Vec<String>,
}

/// Cut-offs for the descriptive layer.
///
/// Labels and emoji use separate "strong primary" thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionThresholds {
    pub strong_label: u8,
    pub strong_emoji: u8,
    pub balanced_gap: u8,
    pub strong_trait: u8,
    pub moderate_trait: u8,
    pub minimum_strengths: usize,
}

impl Default for DescriptionThresholds {
    fn default() -> Self {
        Self {
            strong_label: 35,
            strong_emoji: 40,
            balanced_gap: 10,
            strong_trait: 30,
            moderate_trait: 20,
            minimum_strengths: 4,
        }
    }
}

pub fn describe(profile: &TraitProfile) -> ProfileDescription {
    describe_with(profile, &DescriptionThresholds::default())
}

pub fn describe_with(
    profile: &TraitProfile,
    thresholds: &DescriptionThresholds,
) -> ProfileDescription {
    let ranked = profile.ranked();
    let (primary, primary_value) = ranked[0];
    let (secondary, secondary_value) = ranked[1];

    let combination = tables::persona(primary, secondary);
    let fallback = if primary_value.saturating_sub(secondary_value) <= thresholds.balanced_gap {
        tables::BALANCED
    } else {
        tables::VERSATILE
    };
    let label = if primary_value >= thresholds.strong_label {
        combination.label
    } else {
        fallback.label
    };
    let emoji = if primary_value >= thresholds.strong_emoji {
        combination.emoji
    } else {
        fallback.emoji
    };

    ProfileDescription {
        label: label.to_string(),
        emoji: emoji.to_string(),
        primary,
        secondary,
        strengths: strengths(profile, thresholds),
        challenges: owned(tables::challenges(primary)),
        ideal_environment: owned(tables::ideal_environment(primary)),
        motivators: owned(tables::motivators(primary)),
    }
}

fn strengths(profile: &TraitProfile, thresholds: &DescriptionThresholds) -> Vec<String> {
    let mut strengths: Vec<String> = TraitDimension::ALL
        .into_iter()
        .map(|dimension| {
            let [strong, moderate, light] = tables::strength(dimension);
            let value = profile.get(dimension);
            if value >= thresholds.strong_trait {
                strong
            } else if value >= thresholds.moderate_trait {
                moderate
            } else {
                light
            }
        })
        .map(str::to_string)
        .collect();

    for filler in tables::GENERIC_STRENGTHS {
        if strengths.len() >= thresholds.minimum_strengths {
            break;
        }
        strengths.push(filler.to_string());
    }

    strengths
}

fn owned(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|phrase| phrase.to_string()).collect()
}
