//! White/black/gray/color classification.

use typesurvey_core::config::{ClassifyConfig, DEFAULT_NEAR_GRAY_THRESHOLD};

use super::types::{Bucket, Buckets, ClassifiedOccurrence};
use crate::aggregation::AggregatedOccurrence;
use crate::color::{rgb_from_style, rgb_to_hsl, Hsl, Rgb};

/// Buckets occurrences by the HSL of their text color.
#[derive(Debug, Clone, Copy)]
pub struct PerceptualClassifier {
    near_gray_threshold: u16,
}

impl Default for PerceptualClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_NEAR_GRAY_THRESHOLD)
    }
}

impl PerceptualClassifier {
    pub fn new(near_gray_threshold: u16) -> Self {
        Self {
            near_gray_threshold,
        }
    }

    pub fn from_config(config: &ClassifyConfig) -> Self {
        Self::new(config.effective_near_gray_threshold())
    }

    /// Classify a color. A missing color is white.
    ///
    /// Chromatic candidates (nonzero hue or saturation) whose raw channel
    /// spread is under the threshold are gray. Fully achromatic colors are
    /// white at lightness 100, black at 0, gray otherwise.
    pub fn classify_rgb(&self, rgb: Option<Rgb>) -> (Hsl, Bucket) {
        let hsl = rgb_to_hsl(rgb);

        let bucket = if !hsl.is_achromatic() {
            let spread = u16::from(rgb.unwrap_or(Rgb::WHITE).spread());
            if spread < self.near_gray_threshold {
                Bucket::Gray
            } else {
                Bucket::Color
            }
        } else {
            match hsl.lightness {
                100 => Bucket::White,
                0 => Bucket::Black,
                _ => Bucket::Gray,
            }
        };

        (hsl, bucket)
    }

    pub fn classify(&self, occurrence: AggregatedOccurrence) -> ClassifiedOccurrence {
        let rgb = rgb_from_style(occurrence.style());
        let (hsl, bucket) = self.classify_rgb(rgb);
        tracing::trace!(fingerprint = %occurrence.fingerprint, %hsl, %bucket, "classified");
        ClassifiedOccurrence {
            occurrence,
            rgb,
            hsl,
            bucket,
        }
    }

    /// Partition occurrences into the four buckets, keeping input order within each.
    pub fn partition(&self, occurrences: impl IntoIterator<Item = AggregatedOccurrence>) -> Buckets {
        let mut buckets = Buckets::default();
        for occurrence in occurrences {
            buckets.push(self.classify(occurrence));
        }
        tracing::debug!(
            white = buckets.white.len(),
            gray = buckets.gray.len(),
            black = buckets.black.len(),
            color = buckets.color.len(),
            "partitioned occurrences"
        );
        buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_gray_threshold() {
        let classifier = PerceptualClassifier::default();
        assert_eq!(classifier.classify_rgb(Some(Rgb::new(120, 125, 122))).1, Bucket::Gray);
        assert_eq!(classifier.classify_rgb(Some(Rgb::new(200, 50, 50))).1, Bucket::Color);
    }

    #[test]
    fn test_achromatic_by_lightness() {
        let classifier = PerceptualClassifier::default();
        assert_eq!(classifier.classify_rgb(Some(Rgb::WHITE)).1, Bucket::White);
        assert_eq!(classifier.classify_rgb(Some(Rgb::BLACK)).1, Bucket::Black);
        assert_eq!(classifier.classify_rgb(Some(Rgb::new(51, 51, 51))).1, Bucket::Gray);
        assert_eq!(classifier.classify_rgb(None).1, Bucket::White);
    }
}
