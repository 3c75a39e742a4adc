//! Perceptual classification configuration.

use serde::{Deserialize, Serialize};

/// Default maximum channel spread for a tinted color to still count as gray.
pub const DEFAULT_NEAR_GRAY_THRESHOLD: u16 = 20;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifyConfig {
    /// RGB channel spread below which a chromatic color is grouped with grays. Default: 20.
    pub near_gray_threshold: Option<u16>,
}

impl ClassifyConfig {
    pub fn effective_near_gray_threshold(&self) -> u16 {
        self.near_gray_threshold
            .unwrap_or(DEFAULT_NEAR_GRAY_THRESHOLD)
    }
}
