//! Final report ordering.

use std::cmp::Ordering;

use typesurvey_core::config::SortingConfig;

use super::comparator::ReportComparator;
use crate::classify::{Bucket, Buckets, ClassifiedOccurrence};

/// Sorts each bucket and concatenates them as white, gray, black, color.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportSorter {
    comparator: ReportComparator,
}

impl ReportSorter {
    pub fn new(comparator: ReportComparator) -> Self {
        Self { comparator }
    }

    pub fn from_config(config: &SortingConfig) -> Self {
        Self::new(ReportComparator::from_config(config))
    }

    pub fn comparator(&self) -> &ReportComparator {
        &self.comparator
    }

    /// Sort one bucket in place with that bucket's comparator.
    pub fn sort_bucket(&self, bucket: Bucket, items: &mut [ClassifiedOccurrence]) {
        if bucket.is_chromatic() {
            // The hue comparator is not a total order; std sorts may panic on it.
            insertion_sort_by(items, |a, b| self.comparator.compare_color(a, b));
        } else {
            items.sort_by(|a, b| {
                self.comparator
                    .compare_typography(a.occurrence.style(), b.occurrence.style())
            });
        }
    }

    /// Produce the final display order.
    pub fn order(&self, mut buckets: Buckets) -> Vec<ClassifiedOccurrence> {
        for bucket in Bucket::DISPLAY_ORDER {
            self.sort_bucket(bucket, buckets.get_mut(bucket));
        }
        buckets.into_display_order()
    }
}

/// Stable insertion sort. Terminates and never panics for any comparator.
fn insertion_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}
