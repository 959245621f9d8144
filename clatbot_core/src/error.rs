use thiserror::Error;

use crate::knowledge::{CollegeId, SectionId};

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the responder pipeline.
///
/// Unrecognized intents and unmatched FAQ queries are NOT errors; they
/// produce fixed fallback responses. Only knowledge-base lookups that
/// would otherwise fabricate data are allowed to fail hard.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no cutoff recorded for {college} in {year}")]
    MissingCutoffData { college: CollegeId, year: String },

    #[error("knowledge base has no entry for section '{0}'")]
    MissingSectionData(SectionId),

    #[error("knowledge base has no entry for college '{0}'")]
    MissingCollegeData(CollegeId),

    #[error("unknown section id: {0}")]
    UnknownSectionId(String),

    #[error("unknown college id: {0}")]
    UnknownCollegeId(String),

    #[error("invalid intent pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid knowledge base JSON: {0}")]
    Json(#[from] serde_json::Error),
}
