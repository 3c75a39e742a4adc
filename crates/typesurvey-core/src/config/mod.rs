//! Configuration system for typesurvey.
//! TOML-based, layered resolution: overrides > env > project > defaults.

pub mod classify_config;
pub mod sampling_config;
pub mod sorting_config;
pub mod survey_config;

pub use classify_config::{ClassifyConfig, DEFAULT_NEAR_GRAY_THRESHOLD};
pub use sampling_config::{SamplingConfig, DEFAULT_SAMPLE_TEXT_MAX_CHARS};
pub use sorting_config::{SortingConfig, DEFAULT_BOLD_WEIGHT, DEFAULT_HUE_TOLERANCE};
pub use survey_config::{ConfigOverrides, SurveyConfig};
