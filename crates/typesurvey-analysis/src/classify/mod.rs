//! Perceptual bucketing of aggregated occurrences.

pub mod classifier;
pub mod types;

pub use classifier::PerceptualClassifier;
pub use types::{Bucket, Buckets, ClassifiedOccurrence};
