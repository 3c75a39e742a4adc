//! Tabular view of a report for rendering collaborators.

use serde::Serialize;
use typesurvey_core::types::StyleSnapshot;

use super::types::SurveyReport;
use crate::classify::Bucket;

pub const COUNT_COLUMN: &str = "count";
pub const SAMPLE_TEXT_COLUMN: &str = "sample-text";

/// One row per occurrence; columns are `count`, each property, `sample-text`.
#[derive(Debug, Clone, Serialize)]
pub struct ReportTable {
    pub columns: Vec<String>,
    pub rows: Vec<ReportRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    /// Cell text aligned with [`ReportTable::columns`]; absent properties are empty.
    pub cells: Vec<String>,
    /// Inline style that renders the sample text as observed.
    pub sample_style: String,
    pub bucket: Bucket,
}

impl ReportTable {
    pub fn build(report: &SurveyReport, properties: &[String]) -> Self {
        let mut columns = Vec::with_capacity(properties.len() + 2);
        columns.push(COUNT_COLUMN.to_string());
        columns.extend(properties.iter().cloned());
        columns.push(SAMPLE_TEXT_COLUMN.to_string());

        let rows = report
            .occurrences
            .iter()
            .map(|classified| {
                let occurrence = &classified.occurrence;
                let style = occurrence.style();

                let mut cells = Vec::with_capacity(columns.len());
                cells.push(occurrence.count.to_string());
                cells.extend(
                    properties
                        .iter()
                        .map(|p| style.get(p).unwrap_or_default().to_string()),
                );
                cells.push(occurrence.sample_text().to_string());

                ReportRow {
                    cells,
                    sample_style: inline_style(style, properties),
                    bucket: classified.bucket,
                }
            })
            .collect();

        Self { columns, rows }
    }

    /// Cell at `column` of `row`, if both exist.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.cells.get(index).map(String::as_str)
    }
}

/// `name:value;` for each listed property present in `style`, in list order.
pub fn inline_style(style: &StyleSnapshot, properties: &[String]) -> String {
    properties
        .iter()
        .filter_map(|p| style.get(p).map(|v| format!("{p}:{v};")))
        .collect()
}
