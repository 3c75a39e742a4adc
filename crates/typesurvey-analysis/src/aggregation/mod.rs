//! Style occurrence aggregation.
//!
//! Collapses a stream of observations into one occurrence per distinct
//! style fingerprint, counting repeats.

pub mod aggregator;
pub mod types;

pub use aggregator::OccurrenceAggregator;
pub use types::{AggregatedOccurrence, AggregationResult};
