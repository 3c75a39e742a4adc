//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "TYPESURVEY_LOG";

/// Initialize the typesurvey tracing/logging system.
///
/// Reads `TYPESURVEY_LOG` for per-module log levels, e.g.
/// `TYPESURVEY_LOG=typesurvey_analysis::aggregation=trace,typesurvey=info`.
/// Falls back to `typesurvey=info` if unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("typesurvey=info"));

        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();

        // A host may already own the global subscriber.
        if installed.is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}
