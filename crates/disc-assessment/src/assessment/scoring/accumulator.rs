use tracing::debug;

use super::super::domain::{Question, RawScores, Response};
use super::config::ScoringConfig;

/// Walks the overlapping prefix of questions and responses, adding the weighted "most like me"
/// option and subtracting the scaled "least like me" option. Out-of-range picks contribute
/// nothing.
pub(crate) fn accumulate(
    questions: &[Question],
    responses: &[Response],
    config: &ScoringConfig,
) -> RawScores {
    let mut totals = RawScores::default();

    for (position, (question, response)) in questions.iter().zip(responses).enumerate() {
        match question.option(response.most_like) {
            Some(option) => totals.add_scaled(&option.weights, config.most_like_weight),
            None => debug!(
                question = %question.id,
                position,
                index = response.most_like,
                "skipping out-of-range most-like pick"
            ),
        }

        match question.option(response.least_like) {
            Some(option) => totals.add_scaled(&option.weights, -config.least_like_weight),
            None => debug!(
                question = %question.id,
                position,
                index = response.least_like,
                "skipping out-of-range least-like pick"
            ),
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::{AnswerOption, TraitWeights};

    fn one_hot_question(id: &str) -> Question {
        let option = |label: &str, weights: TraitWeights| AnswerOption {
            label: label.to_string(),
            weights,
        };
        Question {
            id: id.to_string(),
            prompt: "pick".to_string(),
            options: [
                option("d", TraitWeights::new(2.0, 0.0, 0.0, 0.0)),
                option("i", TraitWeights::new(0.0, 2.0, 0.0, 0.0)),
                option("s", TraitWeights::new(0.0, 0.0, 2.0, 0.0)),
                option("c", TraitWeights::new(0.0, 0.0, 0.0, 2.0)),
            ],
        }
    }

    #[test]
    fn adds_most_and_subtracts_scaled_least() {
        let questions = vec![one_hot_question("a"), one_hot_question("b")];
        let responses = vec![Response::new(0, 3), Response::new(0, 1)];

        let raw = accumulate(&questions, &responses, &ScoringConfig::long_form());

        assert_eq!(raw.dominance, 4.0);
        assert_eq!(raw.influence, -1.0);
        assert_eq!(raw.steadiness, 0.0);
        assert_eq!(raw.conscientiousness, -1.0);
    }

    #[test]
    fn short_form_weighting_amplifies_most_like() {
        let questions = vec![one_hot_question("a")];
        let responses = vec![Response::new(2, 1)];

        let raw = accumulate(&questions, &responses, &ScoringConfig::short_form());

        assert_eq!(raw.steadiness, 6.0);
        assert_eq!(raw.influence, -2.0);
    }

    #[test]
    fn scores_only_the_overlapping_prefix() {
        let questions = vec![one_hot_question("a"), one_hot_question("b")];
        let responses = vec![Response::new(1, 0)];

        let raw = accumulate(&questions, &responses, &ScoringConfig::long_form());

        assert_eq!(raw.influence, 2.0);
        assert_eq!(raw.dominance, -1.0);
    }

    #[test]
    fn skips_out_of_range_indices() {
        let questions = vec![one_hot_question("a")];
        let responses = vec![Response::new(7, 2)];

        let raw = accumulate(&questions, &responses, &ScoringConfig::long_form());

        assert_eq!(raw.dominance, 0.0);
        assert_eq!(raw.steadiness, -1.0);
    }

    #[test]
    fn equal_indices_partially_cancel() {
        let questions = vec![one_hot_question("a")];
        let responses = vec![Response::new(3, 3)];

        let raw = accumulate(&questions, &responses, &ScoringConfig::long_form());
        assert_eq!(raw.conscientiousness, 1.0);

        let raw = accumulate(
            &questions,
            &responses,
            &ScoringConfig {
                least_like_weight: 1.0,
                ..ScoringConfig::long_form()
            },
        );
        assert_eq!(raw.conscientiousness, 0.0);
    }
}
