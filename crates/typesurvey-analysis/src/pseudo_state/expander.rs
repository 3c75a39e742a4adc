//! One link, several observations.

use typesurvey_core::config::SamplingConfig;
use typesurvey_core::types::collections::SmallVec4;
use typesurvey_core::types::{InteractionState, Observation};

use super::controller::PseudoStateController;
use crate::sampling::node::{observe_node, CandidateNode};
use crate::sampling::text::truncate_sample;

/// Expands link nodes into one observation per interaction state.
#[derive(Debug, Clone)]
pub struct PseudoStateExpander {
    properties: Vec<String>,
    sample_text_max_chars: usize,
}

impl PseudoStateExpander {
    pub fn new(properties: Vec<String>, sample_text_max_chars: usize) -> Self {
        Self {
            properties,
            sample_text_max_chars,
        }
    }

    pub fn from_config(config: &SamplingConfig) -> Self {
        Self::new(
            config.effective_properties(),
            config.effective_sample_text_max_chars(),
        )
    }

    /// Default-state observation of `node`, with no simulation.
    pub fn observe<N>(&self, node: &N) -> Observation
    where
        N: CandidateNode + ?Sized,
    {
        observe_node(node, &self.properties, self.sample_text_max_chars)
    }

    /// Observations for `node`.
    ///
    /// Links yield the default state followed by `active`, `focus` and
    /// `hover`, and are left in the `none` state afterwards. Other nodes, or
    /// links without a usable controller, yield only the default state.
    pub fn expand<N, C>(&self, node: &N, controller: Option<&mut C>) -> SmallVec4<Observation>
    where
        N: CandidateNode + ?Sized,
        C: PseudoStateController<N> + ?Sized,
    {
        let mut observations = SmallVec4::new();
        observations.push(self.observe(node));

        if !node.is_link() {
            return observations;
        }

        let controller = match controller {
            Some(controller) if controller.is_available(node) => controller,
            _ => {
                tracing::warn!(
                    tag = node.tag_name(),
                    "pseudo-state simulation unavailable, sampling default state only"
                );
                return observations;
            }
        };

        let sample_text = truncate_sample(node.text_content(), self.sample_text_max_chars);
        for state in InteractionState::SIMULATED {
            controller.set_state(node, state);
            let style = controller.computed_style(node, &self.properties);
            tracing::trace!(tag = node.tag_name(), %state, "sampled pseudo-state");
            observations.push(
                Observation::new(node.tag_name(), sample_text.clone(), style).with_state(state),
            );
        }
        controller.clear_state(node);

        observations
    }
}
