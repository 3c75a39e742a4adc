//! Top-level report pipeline.
//!
//! observations → aggregation → classification → ordering.
//! Panel runs sample candidate nodes first.

use std::path::Path;

use typesurvey_core::config::{ConfigOverrides, SurveyConfig};
use typesurvey_core::errors::PipelineError;
use typesurvey_core::types::{Observation, StyleSnapshot};

use super::types::{ReportDiagnostics, SurveyReport};
use crate::aggregation::{AggregatedOccurrence, OccurrenceAggregator};
use crate::classify::PerceptualClassifier;
use crate::pseudo_state::PseudoStateController;
use crate::sampling::{CandidateNode, PanelKind, Sampler};
use crate::sorting::ReportSorter;

/// Generates typography reports. Holds configuration only; every run owns
/// its own aggregation state.
#[derive(Debug, Clone)]
pub struct ReportPipeline {
    config: SurveyConfig,
    classifier: PerceptualClassifier,
    sorter: ReportSorter,
}

impl ReportPipeline {
    /// Create a new pipeline with the given configuration.
    pub fn new(config: SurveyConfig) -> Self {
        let classifier = PerceptualClassifier::from_config(&config.classify);
        let sorter = ReportSorter::from_config(&config.sorting);
        Self {
            config,
            classifier,
            sorter,
        }
    }

    /// Create a pipeline with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SurveyConfig::default())
    }

    /// Create a pipeline from layered configuration rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, PipelineError> {
        Ok(Self::new(SurveyConfig::load(root, overrides)?))
    }

    pub fn config(&self) -> &SurveyConfig {
        &self.config
    }

    /// Properties shown as report columns, in display order.
    pub fn properties(&self) -> Vec<String> {
        self.config.sampling.effective_properties()
    }

    /// Aggregate, classify and order already-collected observations.
    ///
    /// `seed` carries a previous pass's occurrences; without it, runs never
    /// merge.
    pub fn run(
        &self,
        observations: impl IntoIterator<Item = Observation>,
        seed: Option<Vec<AggregatedOccurrence>>,
    ) -> SurveyReport {
        let mut aggregator = match seed {
            Some(seed) => OccurrenceAggregator::with_seed(seed),
            None => OccurrenceAggregator::new(),
        };
        aggregator.extend(observations);
        let aggregated = aggregator.finish();
        let dedup_ratio = aggregated.dedup_ratio();

        let buckets = self.classifier.partition(aggregated.occurrences);
        let diagnostics = ReportDiagnostics {
            raw_observations: aggregated.raw_count,
            seeded_observations: aggregated.seeded_count,
            unique_occurrences: buckets.len(),
            white: buckets.white.len(),
            gray: buckets.gray.len(),
            black: buckets.black.len(),
            color: buckets.color.len(),
            dedup_ratio,
        };

        let occurrences = self.sorter.order(buckets);
        tracing::info!(%diagnostics, "report generated");

        SurveyReport {
            panel: None,
            occurrences,
            diagnostics,
        }
    }

    /// Sample `nodes` for `panel`, then run the report.
    ///
    /// `baseline` is the computed style of an unstyled probe element, used by
    /// heading detection. `controller` forces link interaction states.
    pub fn run_panel<N>(
        &self,
        panel: PanelKind,
        nodes: &[N],
        baseline: StyleSnapshot,
        controller: Option<&mut dyn PseudoStateController<N>>,
        seed: Option<Vec<AggregatedOccurrence>>,
    ) -> SurveyReport
    where
        N: CandidateNode,
    {
        let sampler = Sampler::new(&self.config.sampling, baseline);
        let observations = sampler.sample(panel, nodes, controller);
        let mut report = self.run(observations, seed);
        report.panel = Some(panel);
        report
    }
}
