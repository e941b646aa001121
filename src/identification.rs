use crate::secondary_validation::is_valid_national_id;
use crate::stats::{Stats, GLOBAL_STATS};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use thiserror::Error;

/// Foreign documents (passports, foreign IDs) shorter than this are rejected.
pub const FOREIGN_DOCUMENT_MIN_LENGTH: usize = 5;

const NATIONAL_ID_LENGTH: usize = 10;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IdentificationKind {
    /// Exactly 10 ASCII digits, checked with the national ID checksum.
    NationalId,
    /// Anything else, only a minimum length is required.
    ForeignDocument,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentificationError {
    #[error("The identification field is required")]
    Required,

    #[error("The 10 digit national ID is not valid")]
    InvalidNationalId,

    #[error("A foreign document must have at least {min} characters")]
    ForeignDocumentTooShort { min: usize },
}

pub fn classify_identification(input: &str) -> IdentificationKind {
    if input.len() == NATIONAL_ID_LENGTH && input.bytes().all(|b| b.is_ascii_digit()) {
        IdentificationKind::NationalId
    } else {
        IdentificationKind::ForeignDocument
    }
}

/// The length rule applied to anything that is not a national ID candidate.
pub fn is_acceptable_foreign_document(input: &str, min_length: usize) -> bool {
    input.chars().count() >= min_length
}

pub fn validate_identification(input: &str) -> Result<IdentificationKind, IdentificationError> {
    validate_identification_with_min_length(input, FOREIGN_DOCUMENT_MIN_LENGTH)
}

pub(crate) fn validate_identification_with_min_length(
    input: &str,
    foreign_min_length: usize,
) -> Result<IdentificationKind, IdentificationError> {
    check_identification(input, foreign_min_length, &GLOBAL_STATS)
}

fn check_identification(
    input: &str,
    foreign_min_length: usize,
    stats: &Stats,
) -> Result<IdentificationKind, IdentificationError> {
    if input.is_empty() {
        return Err(IdentificationError::Required);
    }
    let kind = classify_identification(input);
    stats.record_identification_check(kind);

    let result = match kind {
        IdentificationKind::NationalId if !is_valid_national_id(input) => {
            Err(IdentificationError::InvalidNationalId)
        }
        IdentificationKind::ForeignDocument
            if !is_acceptable_foreign_document(input, foreign_min_length) =>
        {
            Err(IdentificationError::ForeignDocumentTooShort {
                min: foreign_min_length,
            })
        }
        _ => Ok(kind),
    };
    if result.is_err() {
        stats.rejected_identifications.increment(1);
    }
    result
}
