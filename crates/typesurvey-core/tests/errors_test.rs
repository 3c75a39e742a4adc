//! Tests for error codes and conversions.

use typesurvey_core::errors::{ConfigError, ExportError, PipelineError, SurveyErrorCode};

#[test]
fn test_pipeline_error_keeps_subsystem_code() {
    let config: PipelineError = ConfigError::FileNotFound {
        path: "typesurvey.toml".to_string(),
    }
    .into();
    let export: PipelineError = ExportError::MissingCount { row: 3 }.into();

    assert_eq!(config.error_code(), "CONFIG_ERROR");
    assert_eq!(export.error_code(), "EXPORT_ERROR");
    assert_eq!(
        export.display_string(),
        "[EXPORT_ERROR] Export error: Row 3 has no count column"
    );
}
