//! Typographic-weight and hue comparators.

use std::cmp::Ordering;

use typesurvey_core::config::{SortingConfig, DEFAULT_BOLD_WEIGHT, DEFAULT_HUE_TOLERANCE};
use typesurvey_core::types::StyleSnapshot;

use crate::classify::ClassifiedOccurrence;

/// Parse the leading base-10 integer of a CSS value (`"12.5px"` → 12).
///
/// Leading whitespace and a single sign are accepted. Returns `None` when no
/// digits follow; callers treat that as "no value".
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let magnitude = rest[..digits_end].parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Orders report rows within a bucket.
#[derive(Debug, Clone, Copy)]
pub struct ReportComparator {
    hue_tolerance: u16,
    bold_weight: i64,
}

impl Default for ReportComparator {
    fn default() -> Self {
        Self::new(DEFAULT_HUE_TOLERANCE, DEFAULT_BOLD_WEIGHT)
    }
}

impl ReportComparator {
    pub fn new(hue_tolerance: u16, bold_weight: i64) -> Self {
        Self {
            hue_tolerance,
            bold_weight,
        }
    }

    pub fn from_config(config: &SortingConfig) -> Self {
        Self::new(config.effective_hue_tolerance(), config.effective_bold_weight())
    }

    /// Numeric font weight; `bold` maps to the configured bold weight.
    pub fn font_weight(&self, style: &StyleSnapshot) -> Option<i64> {
        match style.get("font-weight")? {
            "bold" => Some(self.bold_weight),
            other => parse_leading_int(other),
        }
    }

    pub fn font_size(&self, style: &StyleSnapshot) -> Option<i64> {
        style.get("font-size").and_then(parse_leading_int)
    }

    /// Descending font size, then descending font weight.
    ///
    /// Missing or non-numeric values order after every numeric value so the
    /// comparison stays total.
    pub fn compare_typography(&self, a: &StyleSnapshot, b: &StyleSnapshot) -> Ordering {
        self.font_size(b)
            .cmp(&self.font_size(a))
            .then_with(|| self.font_weight(b).cmp(&self.font_weight(a)))
    }

    /// Descending hue when hues differ by more than the tolerance, otherwise
    /// typographic order.
    ///
    /// Not transitive: hues 0, 30 and 60 can each fall back to typography
    /// pairwise while 0 and 60 compare by hue.
    pub fn compare_color(&self, a: &ClassifiedOccurrence, b: &ClassifiedOccurrence) -> Ordering {
        let diff = i32::from(b.hsl.hue) - i32::from(a.hsl.hue);
        if diff.unsigned_abs() > u32::from(self.hue_tolerance) {
            diff.cmp(&0)
        } else {
            self.compare_typography(a.occurrence.style(), b.occurrence.style())
        }
    }
}
