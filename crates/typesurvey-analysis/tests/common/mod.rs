//! Test doubles for the host collaborators.

#![allow(dead_code)]

use std::collections::HashMap;

use typesurvey_analysis::{CandidateNode, PseudoStateController};
use typesurvey_core::types::{InteractionState, Observation, StyleSnapshot};

/// In-memory candidate element with a style per interaction state.
#[derive(Debug, Clone)]
pub struct FakeNode {
    pub tag: String,
    pub text: String,
    pub leading: Option<String>,
    pub styles: HashMap<InteractionState, StyleSnapshot>,
}

impl FakeNode {
    pub fn new(tag: &str, text: &str, style: StyleSnapshot) -> Self {
        let mut styles = HashMap::new();
        styles.insert(InteractionState::NONE, style);
        Self {
            tag: tag.to_string(),
            text: text.to_string(),
            leading: Some(text.to_string()),
            styles,
        }
    }

    pub fn with_state_style(mut self, state: InteractionState, style: StyleSnapshot) -> Self {
        self.styles.insert(state, style);
        self
    }

    pub fn without_leading_text(mut self) -> Self {
        self.leading = None;
        self
    }

    /// Style under `state`, falling back to the default state.
    pub fn style_in(&self, state: InteractionState) -> &StyleSnapshot {
        self.styles
            .get(&state)
            .unwrap_or_else(|| &self.styles[&InteractionState::NONE])
    }
}

impl CandidateNode for FakeNode {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn text_content(&self) -> &str {
        &self.text
    }

    fn leading_text(&self) -> Option<&str> {
        self.leading.as_deref()
    }

    fn computed_style(&self, properties: &[String]) -> StyleSnapshot {
        self.style_in(InteractionState::NONE).restricted_to(properties)
    }
}

/// Records every forced state.
#[derive(Debug, Default)]
pub struct RecordingController {
    pub current: InteractionState,
    pub history: Vec<InteractionState>,
    pub unavailable: bool,
}

impl PseudoStateController<FakeNode> for RecordingController {
    fn is_available(&self, _node: &FakeNode) -> bool {
        !self.unavailable
    }

    fn set_state(&mut self, _node: &FakeNode, state: InteractionState) {
        self.current = state;
        self.history.push(state);
    }

    fn computed_style(&self, node: &FakeNode, properties: &[String]) -> StyleSnapshot {
        node.style_in(self.current).restricted_to(properties)
    }
}

pub fn style(size: &str, weight: &str, color: &str) -> StyleSnapshot {
    StyleSnapshot::new()
        .with("font-size", size)
        .with("font-weight", weight)
        .with("color", color)
}

pub fn observation(tag: &str, text: &str, style: StyleSnapshot) -> Observation {
    Observation::new(tag, text, style)
}
