//! Stable error codes for host-facing error strings.

/// Every error enum maps to a structured code string so a host (panel glue,
/// CLI, bindings) can match on it without parsing messages.
pub trait SurveyErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted host string: `[ERROR_CODE] message`.
    fn display_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const EXPORT_ERROR: &str = "EXPORT_ERROR";
