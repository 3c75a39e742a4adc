//! Error handling for typesurvey.
//! One error enum per subsystem, `thiserror` only.
//!
//! The aggregation core itself never fails: degraded inputs (unparseable
//! colors, non-numeric weights, missing pseudo-state support) fall back to
//! defaults. Errors only arise at the configuration and export edges.

pub mod config_error;
pub mod error_code;
pub mod export_error;
pub mod pipeline_error;

pub use config_error::ConfigError;
pub use error_code::SurveyErrorCode;
pub use export_error::ExportError;
pub use pipeline_error::PipelineError;
