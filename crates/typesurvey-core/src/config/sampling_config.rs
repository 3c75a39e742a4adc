//! Sampling configuration.

use serde::{Deserialize, Serialize};

use crate::types::default_properties;

pub const DEFAULT_SAMPLE_TEXT_MAX_CHARS: usize = 256;

/// Configuration for candidate sampling.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SamplingConfig {
    /// Maximum sample-text characters before an ellipsis is appended. Default: 256.
    pub sample_text_max_chars: Option<usize>,
    /// Properties captured per element. Default: the typography property list.
    pub properties: Vec<String>,
    /// Properties compared against the baseline style to detect custom
    /// styling on non-heading tags. Default: `["font-size"]`.
    pub trigger_properties: Vec<String>,
}

impl SamplingConfig {
    /// Returns the effective sample-text limit, defaulting to 256.
    pub fn effective_sample_text_max_chars(&self) -> usize {
        self.sample_text_max_chars
            .unwrap_or(DEFAULT_SAMPLE_TEXT_MAX_CHARS)
    }

    /// Returns the effective property list.
    pub fn effective_properties(&self) -> Vec<String> {
        if self.properties.is_empty() {
            default_properties()
        } else {
            self.properties.clone()
        }
    }

    /// Returns the effective trigger properties.
    pub fn effective_trigger_properties(&self) -> Vec<String> {
        if self.trigger_properties.is_empty() {
            vec!["font-size".to_string()]
        } else {
            self.trigger_properties.clone()
        }
    }
}
