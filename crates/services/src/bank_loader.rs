use log::info;

use quiz_core::{QuestionBank, QuestionDraft};

use crate::config::BankSource;
use crate::error::BankError;

/// The built-in question set, as shipped with the game.
pub const EMBEDDED_BANK: &str = include_str!("../assets/default_bank.json");

/// Load and validate a bank from the configured source.
///
/// # Errors
///
/// Returns `BankError::Io` when the file cannot be read and the errors of
/// [`parse_bank`] otherwise.
pub fn load_bank(source: &BankSource) -> Result<QuestionBank, BankError> {
    let bank = match source {
        BankSource::Embedded => parse_bank(EMBEDDED_BANK)?,
        BankSource::File(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| BankError::Io {
                path: path.clone(),
                source,
            })?;
            parse_bank(&raw)?
        }
    };

    info!("loaded {} questions from {source}", bank.len());
    Ok(bank)
}

/// Parse a JSON array of questions, validating each one.
///
/// # Errors
///
/// Returns `BankError::Json` for malformed JSON and `BankError::Question` with
/// the offending position when a question breaks the shape rules.
pub fn parse_bank(json: &str) -> Result<QuestionBank, BankError> {
    let drafts: Vec<QuestionDraft> = serde_json::from_str(json)?;
    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            draft
                .validate()
                .map_err(|source| BankError::Question { index, source })
        })
        .collect()
}
