//! Aggregation output types.

use serde::{Deserialize, Serialize};
use typesurvey_core::types::{Observation, StyleSnapshot};

use crate::fingerprint::{fingerprint, Fingerprint};

/// One distinct style with the number of observations that produced it.
///
/// The embedded observation is the first one seen for the fingerprint;
/// later duplicates only raise `count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedOccurrence {
    #[serde(flatten)]
    pub observation: Observation,
    pub count: u64,
    pub fingerprint: Fingerprint,
}

impl AggregatedOccurrence {
    /// Start a new occurrence from its first observation.
    pub fn first(observation: Observation) -> Self {
        let fingerprint = fingerprint(&observation.style);
        Self {
            observation,
            count: 1,
            fingerprint,
        }
    }

    pub fn style(&self) -> &StyleSnapshot {
        &self.observation.style
    }

    pub fn tag(&self) -> &str {
        &self.observation.tag
    }

    pub fn sample_text(&self) -> &str {
        &self.observation.sample_text
    }
}

/// Result of one aggregation pass.
#[derive(Debug, Clone, Default)]
pub struct AggregationResult {
    /// One entry per distinct fingerprint, in first-seen order.
    pub occurrences: Vec<AggregatedOccurrence>,
    /// Observations fed to this pass.
    pub raw_count: usize,
    /// Observations carried in through the seed.
    pub seeded_count: u64,
}

impl AggregationResult {
    /// Sum of all occurrence counts. Always `raw_count + seeded_count`.
    pub fn total_count(&self) -> u64 {
        self.occurrences
            .iter()
            .fold(0u64, |total, o| total.saturating_add(o.count))
    }

    /// Dedup ratio: 1 - (unique / observed). Higher means more duplicates.
    pub fn dedup_ratio(&self) -> f64 {
        let observed = self.raw_count as f64 + self.seeded_count as f64;
        if observed == 0.0 {
            return 0.0;
        }
        1.0 - (self.occurrences.len() as f64 / observed)
    }
}
