//! CSV import of respondent answers.
//!
//! Rows are positional: row `n` answers question `n` of the bank. An optional `question_id`
//! column is cross-checked against the bank so exports from a different bank revision are
//! caught before scoring.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::bank::QuestionBank;
use super::domain::Response;

#[derive(Debug, thiserror::Error)]
pub enum ResponseImportError {
    #[error("failed to read responses: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid response CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row} answers question '{found}' but the bank expects '{expected}'")]
    QuestionMismatch {
        row: usize,
        expected: String,
        found: String,
    },
}

#[derive(Debug, Deserialize)]
struct ResponseRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    question_id: Option<String>,
    most_like: usize,
    least_like: usize,
}

pub fn import_responses_from_path<P: AsRef<Path>>(
    path: P,
    bank: &QuestionBank,
) -> Result<Vec<Response>, ResponseImportError> {
    let file = std::fs::File::open(path)?;
    import_responses(file, bank)
}

pub fn import_responses<R: Read>(
    reader: R,
    bank: &QuestionBank,
) -> Result<Vec<Response>, ResponseImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut responses = Vec::new();

    for (position, record) in csv_reader.deserialize::<ResponseRow>().enumerate() {
        let row = record?;

        if let (Some(found), Some(question)) = (row.question_id, bank.questions().get(position)) {
            if found != question.id {
                return Err(ResponseImportError::QuestionMismatch {
                    row: position + 1,
                    expected: question.id.clone(),
                    found,
                });
            }
        }

        responses.push(Response::new(row.most_like, row.least_like));
    }

    Ok(responses)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
