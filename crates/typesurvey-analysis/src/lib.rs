//! typesurvey-analysis: typography sampling and report ordering.
//!
//! Turns per-element computed-style observations into a deduplicated,
//! perceptually grouped, deterministically ordered report:
//! - Fingerprint: canonical style keys
//! - Color: RGB parsing and truncating RGB → HSL conversion
//! - Aggregation: dedup by fingerprint with counts and optional seeds
//! - Classify: white/gray/black/color buckets with a near-gray threshold
//! - Sorting: typographic weight and coarse hue ordering
//! - Pseudo-state: link expansion into active/focus/hover observations
//! - Sampling: heading and link candidate selection
//! - Report: pipeline, table model, export rows

pub mod aggregation;
pub mod classify;
pub mod color;
pub mod fingerprint;
pub mod pseudo_state;
pub mod report;
pub mod sampling;
pub mod sorting;

// Re-exports for convenience
pub use aggregation::{AggregatedOccurrence, AggregationResult, OccurrenceAggregator};
pub use classify::{Bucket, Buckets, ClassifiedOccurrence, PerceptualClassifier};
pub use color::{parse_rgb, rgb_to_hsl, Hsl, Rgb};
pub use fingerprint::{fingerprint, Fingerprint};
pub use pseudo_state::{PseudoStateController, PseudoStateExpander};
pub use report::{ReportDiagnostics, ReportPipeline, ReportTable, SurveyReport};
pub use sampling::{CandidateNode, HeadingDetector, PanelKind, Sampler};
pub use sorting::{ReportComparator, ReportSorter};
