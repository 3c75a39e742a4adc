//! Turns candidate nodes into observations for one panel.

use std::fmt;

use serde::{Deserialize, Serialize};
use typesurvey_core::config::SamplingConfig;
use typesurvey_core::types::{Observation, StyleSnapshot};

use super::heading::HeadingDetector;
use super::node::CandidateNode;
use crate::pseudo_state::{PseudoStateController, PseudoStateExpander};

/// The report panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    /// Headings and heading-like styled text.
    Headings,
    /// Links, sampled in every interaction state.
    Links,
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Headings => f.write_str("headings"),
            Self::Links => f.write_str("links"),
        }
    }
}

/// Filters candidates for a panel and captures their observations.
#[derive(Debug, Clone)]
pub struct Sampler {
    headings: HeadingDetector,
    expander: PseudoStateExpander,
}

impl Sampler {
    /// `baseline` is the computed style of an unstyled probe element in the
    /// sampled document.
    pub fn new(config: &SamplingConfig, baseline: StyleSnapshot) -> Self {
        Self {
            headings: HeadingDetector::new(config.effective_trigger_properties(), baseline),
            expander: PseudoStateExpander::from_config(config),
        }
    }

    /// Whether `node` belongs on `panel`. Nodes without text never do.
    pub fn accepts<N>(&self, panel: PanelKind, node: &N) -> bool
    where
        N: CandidateNode + ?Sized,
    {
        if node.text_content().is_empty() {
            return false;
        }
        match panel {
            PanelKind::Headings => self.headings.is_heading(node),
            PanelKind::Links => node.is_link(),
        }
    }

    /// Observations for every accepted node, in candidate order.
    ///
    /// `controller` is only consulted for links; pass `None` when the host
    /// cannot force interaction states.
    pub fn sample<N>(
        &self,
        panel: PanelKind,
        nodes: &[N],
        mut controller: Option<&mut dyn PseudoStateController<N>>,
    ) -> Vec<Observation>
    where
        N: CandidateNode,
    {
        let mut observations = Vec::new();
        let mut accepted = 0usize;

        for node in nodes {
            if !self.accepts(panel, node) {
                continue;
            }
            accepted += 1;
            match panel {
                PanelKind::Headings => observations.push(self.expander.observe(node)),
                PanelKind::Links => {
                    observations.extend(self.expander.expand(node, controller.as_deref_mut()))
                }
            }
        }

        tracing::debug!(
            %panel,
            candidates = nodes.len(),
            accepted,
            observations = observations.len(),
            "sampling complete"
        );
        observations
    }
}
