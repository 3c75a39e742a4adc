//! Pipeline errors.

use super::error_code::SurveyErrorCode;
use super::{ConfigError, ExportError};

/// Errors surfaced by report generation.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

impl SurveyErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Export(e) => e.error_code(),
        }
    }
}
