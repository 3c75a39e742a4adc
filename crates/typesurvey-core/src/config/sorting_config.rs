//! Report ordering configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_HUE_TOLERANCE: u16 = 35;
pub const DEFAULT_BOLD_WEIGHT: i64 = 700;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SortingConfig {
    /// Hue distance (degrees) at or below which colors are ordered by
    /// typographic weight instead of hue. Default: 35.
    pub hue_tolerance: Option<u16>,
    /// Numeric weight substituted for `font-weight: bold`. Default: 700.
    pub bold_weight: Option<i64>,
}

impl SortingConfig {
    pub fn effective_hue_tolerance(&self) -> u16 {
        self.hue_tolerance.unwrap_or(DEFAULT_HUE_TOLERANCE)
    }

    pub fn effective_bold_weight(&self) -> i64 {
        self.bold_weight.unwrap_or(DEFAULT_BOLD_WEIGHT)
    }
}
