use super::super::domain::TraitDimension;

#[derive(Debug, Clone, Copy)]
pub(super) struct Persona {
    pub label: &'static str,
    pub emoji: &'static str,
}

pub(super) const BALANCED: Persona = Persona {
    label: "The Balanced Collaborator",
    emoji: "⚖️",
};

pub(super) const VERSATILE: Persona = Persona {
    label: "The Versatile Adapter",
    emoji: "🌈",
};

pub(super) const GENERIC_STRENGTHS: [&str; 4] =
    ["Adaptable", "Professional", "Reliable team member", "Open to feedback"];

pub(super) fn persona(primary: TraitDimension, secondary: TraitDimension) -> Persona {
    use TraitDimension::*;

    let (label, emoji) = match (primary, secondary) {
        (Dominance, Influence) => ("The Trailblazer", "🚀"),
        (Dominance, Steadiness) => ("The Steady Commander", "🛡️"),
        (Dominance, Conscientiousness) => ("The Strategic Director", "🎯"),
        (Influence, Dominance) => ("The Persuader", "📣"),
        (Influence, Steadiness) => ("The Team Energizer", "🤝"),
        (Influence, Conscientiousness) => ("The Creative Communicator", "🎨"),
        (Steadiness, Dominance) => ("The Dependable Driver", "⚓"),
        (Steadiness, Influence) => ("The Supportive Connector", "🌱"),
        (Steadiness, Conscientiousness) => ("The Reliable Specialist", "🧩"),
        (Conscientiousness, Dominance) => ("The Quality Champion", "🏗️"),
        (Conscientiousness, Influence) => ("The Thoughtful Advisor", "💡"),
        (Conscientiousness, Steadiness) => ("The Meticulous Analyst", "🔬"),
        // primary and secondary always differ; single-trait fallbacks
        (Dominance, Dominance) => ("The Driver", "🔥"),
        (Influence, Influence) => ("The Influencer", "✨"),
        (Steadiness, Steadiness) => ("The Supporter", "🌿"),
        (Conscientiousness, Conscientiousness) => ("The Analyst", "📊"),
    };

    Persona { label, emoji }
}

/// Strong, moderate and light phrasing of what a dimension brings.
pub(super) fn strength(dimension: TraitDimension) -> [&'static str; 3] {
    match dimension {
        TraitDimension::Dominance => [
            "Decisive leadership under pressure",
            "Comfortable taking ownership of results",
            "Willing to make a call when needed",
        ],
        TraitDimension::Influence => [
            "Inspires and energizes others",
            "Builds rapport quickly",
            "Friendly and approachable",
        ],
        TraitDimension::Steadiness => [
            "Exceptionally dependable and patient",
            "Supportive team player",
            "Calm in day-to-day work",
        ],
        TraitDimension::Conscientiousness => [
            "Rigorous attention to quality and detail",
            "Organized and methodical",
            "Respects standards and process",
        ],
    }
}

pub(super) fn challenges(dimension: TraitDimension) -> &'static [&'static str] {
    match dimension {
        TraitDimension::Dominance => &[
            "May come across as impatient or blunt",
            "Can overlook input from quieter colleagues",
            "Tends to take on too much control",
        ],
        TraitDimension::Influence => &[
            "May lose focus on follow-through",
            "Can overpromise in the moment",
            "Finds detailed, solitary work draining",
        ],
        TraitDimension::Steadiness => &[
            "May resist sudden change",
            "Can avoid necessary conflict",
            "Hesitates to speak up about own needs",
        ],
        TraitDimension::Conscientiousness => &[
            "May get stuck pursuing perfection",
            "Can be overly critical of self and others",
            "Slow to decide without complete information",
        ],
    }
}

pub(super) fn ideal_environment(dimension: TraitDimension) -> &'static [&'static str] {
    match dimension {
        TraitDimension::Dominance => &[
            "Fast-paced teams with clear targets",
            "Autonomy and authority to decide",
            "Room to take on new challenges",
        ],
        TraitDimension::Influence => &[
            "Collaborative, people-centered culture",
            "Frequent interaction and variety",
            "Visible recognition for contributions",
        ],
        TraitDimension::Steadiness => &[
            "Stable, supportive team",
            "Predictable routines and clear expectations",
            "Time to adjust when change is coming",
        ],
        TraitDimension::Conscientiousness => &[
            "Well-defined processes and quality standards",
            "Space for focused, independent work",
            "Access to the data behind decisions",
        ],
    }
}

pub(super) fn motivators(dimension: TraitDimension) -> &'static [&'static str] {
    match dimension {
        TraitDimension::Dominance => &["Winning", "Measurable results", "Ownership"],
        TraitDimension::Influence => &["Recognition", "Social connection", "Creative freedom"],
        TraitDimension::Steadiness => &["Security", "Appreciation", "Helping others"],
        TraitDimension::Conscientiousness => &["Mastery", "Accuracy", "Clear expectations"],
    }
}
