//! Export rows: one flat property → value map per occurrence.
//!
//! `count` and `sample-text` are merged in as extra keys. Rows round-trip
//! through JSON and can be turned back into aggregation seeds.

use std::collections::BTreeMap;

use typesurvey_core::errors::ExportError;
use typesurvey_core::types::{Observation, StyleSnapshot};

use super::table::{COUNT_COLUMN, SAMPLE_TEXT_COLUMN};
use crate::aggregation::AggregatedOccurrence;
use crate::classify::ClassifiedOccurrence;

pub type ExportRow = BTreeMap<String, String>;

/// Largest per-row `count` accepted when rebuilding occurrences.
pub const MAX_IMPORTED_COUNT: u64 = u32::MAX as u64;

pub fn to_export_rows(occurrences: &[ClassifiedOccurrence]) -> Vec<ExportRow> {
    occurrences
        .iter()
        .map(|classified| {
            let occurrence = &classified.occurrence;
            let mut row: ExportRow = occurrence
                .style()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            row.insert(COUNT_COLUMN.to_string(), occurrence.count.to_string());
            row.insert(
                SAMPLE_TEXT_COLUMN.to_string(),
                occurrence.sample_text().to_string(),
            );
            row
        })
        .collect()
}

pub fn to_json(rows: &[ExportRow]) -> Result<String, ExportError> {
    serde_json::to_string_pretty(rows).map_err(|e| ExportError::Serialize(e.to_string()))
}

pub fn from_json(json: &str) -> Result<Vec<ExportRow>, ExportError> {
    serde_json::from_str(json).map_err(|e| ExportError::Deserialize(e.to_string()))
}

/// Rebuild aggregated occurrences from export rows.
///
/// Rows carry no tag, so rebuilt occurrences have an empty tag. Every row
/// needs an integer `count` in `1..=MAX_IMPORTED_COUNT`; a missing
/// `sample-text` reads as empty.
pub fn from_export_rows(rows: Vec<ExportRow>) -> Result<Vec<AggregatedOccurrence>, ExportError> {
    rows.into_iter()
        .enumerate()
        .map(|(index, mut row)| {
            let raw_count = row
                .remove(COUNT_COLUMN)
                .ok_or(ExportError::MissingCount { row: index })?;
            let count = match raw_count.parse::<u64>() {
                Ok(count) if (1..=MAX_IMPORTED_COUNT).contains(&count) => count,
                _ => {
                    return Err(ExportError::InvalidCount {
                        row: index,
                        value: raw_count,
                    })
                }
            };
            let sample_text = row.remove(SAMPLE_TEXT_COLUMN).unwrap_or_default();
            let style: StyleSnapshot = row.into_iter().collect();

            let mut occurrence = AggregatedOccurrence::first(Observation::new("", sample_text, style));
            occurrence.count = count;
            Ok(occurrence)
        })
        .collect()
}
