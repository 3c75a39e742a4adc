//! Fingerprint-keyed deduplication.

use typesurvey_core::types::collections::FxHashMap;
use typesurvey_core::types::Observation;

use super::types::{AggregatedOccurrence, AggregationResult};
use crate::fingerprint::{fingerprint, Fingerprint};

/// Deduplicates observations by style fingerprint.
///
/// Each aggregator owns its map for a single report generation. Results of
/// an earlier pass only enter through [`OccurrenceAggregator::with_seed`].
#[derive(Debug, Default)]
pub struct OccurrenceAggregator {
    index: FxHashMap<Fingerprint, usize>,
    occurrences: Vec<AggregatedOccurrence>,
    raw_count: usize,
    seeded_count: u64,
}

impl OccurrenceAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a previously aggregated set.
    ///
    /// Seed fingerprints are recomputed from their styles, and seed entries
    /// that collide are merged by summing their counts. Counts saturate at
    /// `u64::MAX` instead of wrapping.
    pub fn with_seed(seed: impl IntoIterator<Item = AggregatedOccurrence>) -> Self {
        let mut aggregator = Self::new();
        for mut occurrence in seed {
            occurrence.fingerprint = fingerprint(occurrence.style());
            let count = occurrence.count.max(1);
            occurrence.count = count;
            aggregator.seeded_count = aggregator.seeded_count.saturating_add(count);

            match aggregator.index.get(&occurrence.fingerprint).copied() {
                Some(slot) => {
                    let existing = &mut aggregator.occurrences[slot];
                    existing.count = existing.count.saturating_add(count);
                }
                None => aggregator.insert(occurrence),
            }
        }
        tracing::debug!(
            seeded_occurrences = aggregator.occurrences.len(),
            seeded_observations = aggregator.seeded_count,
            "aggregator seeded"
        );
        aggregator
    }

    /// Record one observation.
    pub fn observe(&mut self, observation: Observation) {
        self.raw_count += 1;
        let key = fingerprint(&observation.style);

        if let Some(slot) = self.index.get(&key).copied() {
            let existing = &mut self.occurrences[slot];
            existing.count = existing.count.saturating_add(1);
            tracing::trace!(fingerprint = %key, count = existing.count, "repeat occurrence");
            return;
        }

        tracing::trace!(fingerprint = %key, tag = %observation.tag, "new occurrence");
        self.insert(AggregatedOccurrence {
            observation,
            count: 1,
            fingerprint: key,
        });
    }

    /// Number of distinct fingerprints so far.
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    /// Release the aggregated occurrences, in first-seen order.
    pub fn finish(self) -> AggregationResult {
        tracing::debug!(
            raw_observations = self.raw_count,
            unique_occurrences = self.occurrences.len(),
            "aggregation complete"
        );
        AggregationResult {
            occurrences: self.occurrences,
            raw_count: self.raw_count,
            seeded_count: self.seeded_count,
        }
    }

    /// Aggregate a finite sequence of observations in one call.
    pub fn aggregate(observations: impl IntoIterator<Item = Observation>) -> AggregationResult {
        let mut aggregator = Self::new();
        aggregator.extend(observations);
        aggregator.finish()
    }

    fn insert(&mut self, occurrence: AggregatedOccurrence) {
        self.index
            .insert(occurrence.fingerprint.clone(), self.occurrences.len());
        self.occurrences.push(occurrence);
    }
}

impl Extend<Observation> for OccurrenceAggregator {
    fn extend<I: IntoIterator<Item = Observation>>(&mut self, iter: I) {
        for observation in iter {
            self.observe(observation);
        }
    }
}
