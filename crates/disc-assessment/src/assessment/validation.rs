use super::bank::QuestionBank;
use super::domain::{Response, OPTIONS_PER_QUESTION};

/// The single error kind surfaced at the scoring boundary for malformed input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAssessmentInput {
    #[error("no responses supplied")]
    NoResponses,
    #[error("{responses} responses supplied for a bank of {questions} questions")]
    TooManyResponses { responses: usize, questions: usize },
    #[error("response {position} has {field} index {index}; expected 0 to 3")]
    IndexOutOfRange {
        position: usize,
        field: &'static str,
        index: usize,
    },
}

/// Checks responses against the bank before scoring.
///
/// A response list shorter than the bank is accepted; only the answered prefix is scored.
pub fn validate_responses(
    bank: &QuestionBank,
    responses: &[Response],
) -> Result<(), InvalidAssessmentInput> {
    if responses.is_empty() {
        return Err(InvalidAssessmentInput::NoResponses);
    }

    if responses.len() > bank.len() {
        return Err(InvalidAssessmentInput::TooManyResponses {
            responses: responses.len(),
            questions: bank.len(),
        });
    }

    for (position, response) in responses.iter().enumerate() {
        for (field, index) in [
            ("most_like", response.most_like),
            ("least_like", response.least_like),
        ] {
            if index >= OPTIONS_PER_QUESTION {
                return Err(InvalidAssessmentInput::IndexOutOfRange {
                    position,
                    field,
                    index,
                });
            }
        }
    }

    Ok(())
}
