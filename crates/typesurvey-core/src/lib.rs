//! typesurvey-core: shared foundation for the typesurvey report engine.
//!
//! - Types: style snapshots, observations, interaction states, collections
//! - Errors: one `thiserror` enum per subsystem
//! - Config: TOML-based, layered resolution (overrides > env > project > defaults)
//! - Tracing: `tracing-subscriber` setup driven by `TYPESURVEY_LOG`

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::SurveyConfig;
pub use errors::{ConfigError, ExportError, PipelineError, SurveyErrorCode};
pub use types::{InteractionState, Observation, StyleSnapshot, TYPOGRAPHY_PROPERTIES};
