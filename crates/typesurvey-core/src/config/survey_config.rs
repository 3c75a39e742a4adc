//! Top-level typesurvey configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ClassifyConfig, SamplingConfig, SortingConfig};
use crate::errors::ConfigError;

/// Project config file name looked up in the root passed to [`SurveyConfig::load`].
pub const PROJECT_CONFIG_FILE: &str = "typesurvey.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`TYPESURVEY_*`)
/// 3. Project config (`typesurvey.toml` in the root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SurveyConfig {
    pub sampling: SamplingConfig,
    pub classify: ClassifyConfig,
    pub sorting: SortingConfig,
}

/// Override arguments a host can apply on top of file and env layers.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub sample_text_max_chars: Option<usize>,
    pub near_gray_threshold: Option<u16>,
    pub hue_tolerance: Option<u16>,
}

impl SurveyConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        } else {
            tracing::debug!(path = %project_config_path.display(), "no project config, using defaults");
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing and embedding).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &SurveyConfig) -> Result<(), ConfigError> {
        if config.sampling.sample_text_max_chars == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "sampling.sample_text_max_chars".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for (field, names) in [
            ("sampling.properties", &config.sampling.properties),
            ("sampling.trigger_properties", &config.sampling.trigger_properties),
        ] {
            if names.iter().any(|p| p.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "property names must not be blank".to_string(),
                });
            }
        }
        if let Some(threshold) = config.classify.near_gray_threshold {
            if threshold > 255 {
                return Err(ConfigError::ValidationFailed {
                    field: "classify.near_gray_threshold".to_string(),
                    message: "must be between 0 and 255".to_string(),
                });
            }
        }
        if let Some(tolerance) = config.sorting.hue_tolerance {
            if tolerance >= 360 {
                return Err(ConfigError::ValidationFailed {
                    field: "sorting.hue_tolerance".to_string(),
                    message: "must be less than 360".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut SurveyConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SurveyConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a value.
    fn merge(base: &mut SurveyConfig, other: &SurveyConfig) {
        // Sampling
        if other.sampling.sample_text_max_chars.is_some() {
            base.sampling.sample_text_max_chars = other.sampling.sample_text_max_chars;
        }
        if !other.sampling.properties.is_empty() {
            base.sampling.properties = other.sampling.properties.clone();
        }
        if !other.sampling.trigger_properties.is_empty() {
            base.sampling.trigger_properties = other.sampling.trigger_properties.clone();
        }

        // Classify
        if other.classify.near_gray_threshold.is_some() {
            base.classify.near_gray_threshold = other.classify.near_gray_threshold;
        }

        // Sorting
        if other.sorting.hue_tolerance.is_some() {
            base.sorting.hue_tolerance = other.sorting.hue_tolerance;
        }
        if other.sorting.bold_weight.is_some() {
            base.sorting.bold_weight = other.sorting.bold_weight;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TYPESURVEY_SAMPLE_TEXT_MAX_CHARS`, `TYPESURVEY_HUE_TOLERANCE`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut SurveyConfig) {
        if let Ok(val) = std::env::var("TYPESURVEY_SAMPLE_TEXT_MAX_CHARS") {
            match val.parse::<usize>() {
                Ok(v) => config.sampling.sample_text_max_chars = Some(v),
                Err(_) => tracing::warn!(value = %val, "ignoring TYPESURVEY_SAMPLE_TEXT_MAX_CHARS"),
            }
        }
        if let Ok(val) = std::env::var("TYPESURVEY_NEAR_GRAY_THRESHOLD") {
            match val.parse::<u16>() {
                Ok(v) => config.classify.near_gray_threshold = Some(v),
                Err(_) => tracing::warn!(value = %val, "ignoring TYPESURVEY_NEAR_GRAY_THRESHOLD"),
            }
        }
        if let Ok(val) = std::env::var("TYPESURVEY_HUE_TOLERANCE") {
            match val.parse::<u16>() {
                Ok(v) => config.sorting.hue_tolerance = Some(v),
                Err(_) => tracing::warn!(value = %val, "ignoring TYPESURVEY_HUE_TOLERANCE"),
            }
        }
    }

    /// Apply programmatic overrides (highest priority).
    fn apply_overrides(config: &mut SurveyConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.sample_text_max_chars {
            config.sampling.sample_text_max_chars = Some(v);
        }
        if let Some(v) = overrides.near_gray_threshold {
            config.classify.near_gray_threshold = Some(v);
        }
        if let Some(v) = overrides.hue_tolerance {
            config.sorting.hue_tolerance = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
