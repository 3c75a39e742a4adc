//! Export errors.

use super::error_code::{self, SurveyErrorCode};

/// Errors that can occur while exporting or re-importing report rows.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to serialize report: {0}")]
    Serialize(String),

    #[error("Failed to deserialize report: {0}")]
    Deserialize(String),

    #[error("Row {row} has no count column")]
    MissingCount { row: usize },

    #[error("Row {row} has invalid count {value:?}")]
    InvalidCount { row: usize, value: String },
}

impl SurveyErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        error_code::EXPORT_ERROR
    }
}
