//! Bucket labels and classified occurrences.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::aggregation::AggregatedOccurrence;
use crate::color::{Hsl, Rgb};

/// Perceptual group of an occurrence's text color.
///
/// Variants are declared in report display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    White,
    Gray,
    Black,
    Color,
}

impl Bucket {
    /// Buckets in the order they are concatenated into the report.
    pub const DISPLAY_ORDER: [Bucket; 4] = [Bucket::White, Bucket::Gray, Bucket::Black, Bucket::Color];

    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Gray => "gray",
            Self::Black => "black",
            Self::Color => "color",
        }
    }

    pub fn is_chromatic(self) -> bool {
        self == Self::Color
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An aggregated occurrence annotated with its derived color data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedOccurrence {
    #[serde(flatten)]
    pub occurrence: AggregatedOccurrence,
    /// Parsed text color; `None` when missing or unparseable (treated as white).
    pub rgb: Option<Rgb>,
    pub hsl: Hsl,
    pub bucket: Bucket,
}

/// Occurrences partitioned by bucket. Every occurrence lives in exactly one list.
#[derive(Debug, Clone, Default)]
pub struct Buckets {
    pub white: Vec<ClassifiedOccurrence>,
    pub gray: Vec<ClassifiedOccurrence>,
    pub black: Vec<ClassifiedOccurrence>,
    pub color: Vec<ClassifiedOccurrence>,
}

impl Buckets {
    pub fn push(&mut self, classified: ClassifiedOccurrence) {
        self.get_mut(classified.bucket).push(classified);
    }

    pub fn get(&self, bucket: Bucket) -> &[ClassifiedOccurrence] {
        match bucket {
            Bucket::White => &self.white,
            Bucket::Gray => &self.gray,
            Bucket::Black => &self.black,
            Bucket::Color => &self.color,
        }
    }

    pub fn get_mut(&mut self, bucket: Bucket) -> &mut Vec<ClassifiedOccurrence> {
        match bucket {
            Bucket::White => &mut self.white,
            Bucket::Gray => &mut self.gray,
            Bucket::Black => &mut self.black,
            Bucket::Color => &mut self.color,
        }
    }

    pub fn len(&self) -> usize {
        self.white.len() + self.gray.len() + self.black.len() + self.color.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Concatenate in display order: white, gray, black, color.
    pub fn into_display_order(self) -> Vec<ClassifiedOccurrence> {
        let mut ordered = Vec::with_capacity(self.len());
        ordered.extend(self.white);
        ordered.extend(self.gray);
        ordered.extend(self.black);
        ordered.extend(self.color);
        ordered
    }
}
