//! Report output types.

use std::fmt;

use serde::Serialize;

use crate::aggregation::AggregatedOccurrence;
use crate::classify::{Bucket, ClassifiedOccurrence};
use crate::sampling::PanelKind;

/// Ordered, classified occurrences for one report generation.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyReport {
    /// Panel the report was sampled for; `None` when built from raw observations.
    pub panel: Option<PanelKind>,
    /// Display order: white, gray, black, then color.
    pub occurrences: Vec<ClassifiedOccurrence>,
    pub diagnostics: ReportDiagnostics,
}

impl SurveyReport {
    /// Occurrences of one bucket, in display order.
    pub fn bucket(&self, bucket: Bucket) -> impl Iterator<Item = &ClassifiedOccurrence> {
        self.occurrences.iter().filter(move |o| o.bucket == bucket)
    }

    /// Aggregated occurrences without color annotations, usable as a seed
    /// for a later pass.
    pub fn to_seed(&self) -> Vec<AggregatedOccurrence> {
        self.occurrences
            .iter()
            .map(|o| o.occurrence.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }
}

/// Counters describing one report generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportDiagnostics {
    /// Observations sampled in this pass.
    pub raw_observations: usize,
    /// Observations carried in through a seed.
    pub seeded_observations: u64,
    /// Distinct fingerprints in the report.
    pub unique_occurrences: usize,
    pub white: usize,
    pub gray: usize,
    pub black: usize,
    pub color: usize,
    /// 1 - (unique / observed).
    pub dedup_ratio: f64,
}

impl fmt::Display for ReportDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ReportDiagnostics {{ observations={}, seeded={}, unique={}, white={}, gray={}, black={}, color={}, dedup_ratio={:.1}% }}",
            self.raw_observations,
            self.seeded_observations,
            self.unique_occurrences,
            self.white,
            self.gray,
            self.black,
            self.color,
            self.dedup_ratio * 100.0,
        )
    }
}
