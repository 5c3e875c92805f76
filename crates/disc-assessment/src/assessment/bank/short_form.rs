use super::{option, question, BankVariant, QuestionBank, ValidationPair};

pub(super) const VERSION: &str = "short-form/2.0.0";

pub(super) fn bank() -> QuestionBank {
    QuestionBank {
        variant: BankVariant::ShortForm,
        version: VERSION.to_string(),
        questions: vec![
            question(
                "s01",
                "At work I am most like someone who",
                [
                    option("Takes charge", [1.0, 0.0, 0.0, 0.0]),
                    option("Inspires others", [0.0, 1.0, 0.0, 0.0]),
                    option("Supports the team", [0.0, 0.0, 1.0, 0.0]),
                    option("Gets the details right", [0.0, 0.0, 0.0, 1.0]),
                ],
            ),
            question(
                "s02",
                "When a problem comes up I",
                [
                    option("Act on it immediately", [1.0, 0.0, 0.0, 0.0]),
                    option("Talk it over with others", [0.0, 1.0, 0.0, 0.0]),
                    option("Stay patient and steady", [0.0, 0.0, 1.0, 0.0]),
                    option("Investigate the root cause", [0.0, 0.0, 0.0, 1.0]),
                ],
            ),
            question(
                "s03",
                "My communication style is",
                [
                    option("Brief and decisive", [1.0, 0.0, 0.0, 0.0]),
                    option("Warm and expressive", [0.0, 1.0, 0.0, 0.0]),
                    option("Calm and considerate", [0.0, 0.0, 1.0, 0.0]),
                    option("Careful and exact", [0.0, 0.0, 0.0, 1.0]),
                ],
            ),
            question(
                "s04",
                "I do my best work when",
                [
                    option("I have authority to decide", [1.0, 0.0, 0.0, 0.0]),
                    option("I can collaborate freely", [0.0, 1.0, 0.0, 0.0]),
                    option("Expectations are stable", [0.0, 0.0, 1.0, 0.0]),
                    option("Standards are clear", [0.0, 0.0, 0.0, 1.0]),
                ],
            ),
            question(
                "s05",
                "Others count on me for",
                [
                    option("Momentum", [1.0, 0.0, 0.0, 0.0]),
                    option("Enthusiasm", [0.0, 1.0, 0.0, 0.0]),
                    option("Reliability", [0.0, 0.0, 1.0, 0.0]),
                    option("Quality", [0.0, 0.0, 0.0, 1.0]),
                ],
            ),
            question(
                "sv01",
                "If something goes wrong on a project I",
                [
                    option("Dig into why it happened", [0.0, 0.0, 0.0, 1.0]),
                    option("Keep calm and carry on", [0.0, 0.0, 1.0, 0.0]),
                    option("Jump in and fix it", [1.0, 0.0, 0.0, 0.0]),
                    option("Get people together to discuss it", [0.0, 1.0, 0.0, 0.0]),
                ],
            ),
            question(
                "s06",
                "I am motivated by",
                [
                    option("Challenge", [1.0, 0.0, 0.0, 0.0]),
                    option("Recognition", [0.0, 1.0, 0.0, 0.0]),
                    option("Security", [0.0, 0.0, 1.0, 0.0]),
                    option("Mastery", [0.0, 0.0, 0.0, 1.0]),
                ],
            ),
            question(
                "s07",
                "Under stress I can become",
                [
                    option("Impatient", [1.0, 0.0, 0.0, 0.0]),
                    option("Scattered", [0.0, 1.0, 0.0, 0.0]),
                    option("Withdrawn", [0.0, 0.0, 1.0, 0.0]),
                    option("Overly critical", [0.0, 0.0, 0.0, 1.0]),
                ],
            ),
            question(
                "ssd01",
                "Which statement fits you best?",
                [
                    option("I have never made a mistake at work", [0.0, 0.0, 0.5, 0.75]),
                    option("I speak up when I see a better way", [0.75, 0.0, 0.0, 0.0]),
                    option("I enjoy meeting new people", [0.0, 0.75, 0.0, 0.0]),
                    option("I prefer a familiar routine", [0.0, 0.0, 0.75, 0.0]),
                ],
            ),
            question(
                "s08",
                "In a group I usually",
                [
                    option("Lead", [1.0, 0.0, 0.0, 0.0]),
                    option("Entertain", [0.0, 1.0, 0.0, 0.0]),
                    option("Listen", [0.0, 0.0, 1.0, 0.0]),
                    option("Observe", [0.0, 0.0, 0.0, 1.0]),
                ],
            ),
            question(
                "s09",
                "My approach to deadlines is to",
                [
                    option("Beat them", [1.0, 0.0, 0.0, 0.0]),
                    option("Make the push fun", [0.0, 1.0, 0.0, 0.0]),
                    option("Plan well ahead", [0.0, 0.0, 1.0, 0.0]),
                    option("Meet them without cutting corners", [0.0, 0.0, 0.0, 1.0]),
                ],
            ),
            question(
                "sv02",
                "The team relies on me to bring",
                [
                    option("Consistency", [0.0, 0.0, 1.0, 0.0]),
                    option("Drive", [1.0, 0.0, 0.0, 0.0]),
                    option("High standards", [0.0, 0.0, 0.0, 1.0]),
                    option("Positive energy", [0.0, 1.0, 0.0, 0.0]),
                ],
            ),
            question(
                "s10",
                "I would describe my pace as",
                [
                    option("Fast", [1.0, 0.0, 0.0, 0.0]),
                    option("Lively", [0.0, 1.0, 0.0, 0.0]),
                    option("Even", [0.0, 0.0, 1.0, 0.0]),
                    option("Deliberate", [0.0, 0.0, 0.0, 1.0]),
                ],
            ),
            question(
                "s11",
                "I value most in a workplace",
                [
                    option("Autonomy", [1.0, 0.0, 0.0, 0.0]),
                    option("Team spirit", [0.0, 1.0, 0.0, 0.0]),
                    option("Harmony", [0.0, 0.0, 1.0, 0.0]),
                    option("Accuracy", [0.0, 0.0, 0.0, 1.0]),
                ],
            ),
            question(
                "sv03",
                "With a deadline coming up I",
                [
                    option("Make sure nothing is rushed", [0.0, 0.0, 0.0, 1.0]),
                    option("Keep everyone's spirits up", [0.0, 1.0, 0.0, 0.0]),
                    option("Aim to finish early", [1.0, 0.0, 0.0, 0.0]),
                    option("Work to a plan set well in advance", [0.0, 0.0, 1.0, 0.0]),
                ],
            ),
        ],
        validation_pairs: vec![
            ValidationPair::new("s02", "sv01"),
            ValidationPair::new("s05", "sv02"),
            ValidationPair::new("s09", "sv03"),
        ],
        social_desirability_probe: Some("ssd01".to_string()),
    }
}
