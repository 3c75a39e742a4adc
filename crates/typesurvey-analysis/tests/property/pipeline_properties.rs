use proptest::prelude::*;
use typesurvey_analysis::{
    fingerprint, Bucket, OccurrenceAggregator, PerceptualClassifier, ReportPipeline,
};
use typesurvey_core::types::collections::FxHashSet;
use typesurvey_core::types::{Observation, StyleSnapshot};

fn observation() -> impl Strategy<Value = Observation> {
    (
        prop_oneof![
            (0u8..=255, 0u8..=255, 0u8..=255).prop_map(|(r, g, b)| format!("rgb({r}, {g}, {b})")),
            Just("transparent".to_string()),
        ],
        prop_oneof![
            (1u32..72).prop_map(|s| format!("{s}px")),
            Just("inherit".to_string()),
        ],
        prop_oneof![
            (1u32..10).prop_map(|w| (w * 100).to_string()),
            Just("bold".to_string()),
            Just("normal".to_string()),
        ],
    )
        .prop_map(|(color, size, weight)| {
            Observation::new(
                "P",
                "sample",
                StyleSnapshot::new()
                    .with("color", color)
                    .with("font-size", size)
                    .with("font-weight", weight),
            )
        })
}

proptest! {
    #[test]
    fn aggregation_conserves_observations(observations in prop::collection::vec(observation(), 0..60)) {
        let distinct: FxHashSet<_> = observations.iter().map(|o| fingerprint(&o.style)).collect();
        let n = observations.len();

        let result = OccurrenceAggregator::aggregate(observations);

        prop_assert_eq!(result.total_count(), n as u64);
        prop_assert_eq!(result.occurrences.len(), distinct.len());
        prop_assert!(result.occurrences.iter().all(|o| o.count >= 1));
    }

    #[test]
    fn buckets_partition_the_aggregated_set(observations in prop::collection::vec(observation(), 0..60)) {
        let aggregated = OccurrenceAggregator::aggregate(observations);
        let unique = aggregated.occurrences.len();
        let expected: FxHashSet<_> = aggregated.occurrences.iter().map(|o| o.fingerprint.clone()).collect();

        let buckets = PerceptualClassifier::default().partition(aggregated.occurrences);

        prop_assert_eq!(buckets.len(), unique);
        let mut seen = FxHashSet::default();
        for bucket in Bucket::DISPLAY_ORDER {
            for classified in buckets.get(bucket) {
                prop_assert_eq!(classified.bucket, bucket);
                prop_assert!(seen.insert(classified.occurrence.fingerprint.clone()));
            }
        }
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn report_is_deterministic_and_grouped(observations in prop::collection::vec(observation(), 0..60)) {
        let pipeline = ReportPipeline::with_defaults();
        let first = pipeline.run(observations.clone(), None);
        let second = pipeline.run(observations, None);

        let order = |report: &typesurvey_analysis::SurveyReport| {
            report.occurrences.iter().map(|o| o.occurrence.fingerprint.clone()).collect::<Vec<_>>()
        };
        prop_assert_eq!(order(&first), order(&second));

        let buckets: Vec<Bucket> = first.occurrences.iter().map(|o| o.bucket).collect();
        let mut sorted = buckets.clone();
        sorted.sort();
        prop_assert_eq!(buckets, sorted);
    }

    #[test]
    fn hsl_stays_in_range(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let hsl = typesurvey_analysis::rgb_to_hsl(Some(typesurvey_analysis::Rgb::new(r, g, b)));
        prop_assert!(hsl.hue < 360);
        prop_assert!(hsl.saturation <= 100);
        prop_assert!(hsl.lightness <= 100);
    }
}
