//! Computed-style snapshots and per-element observations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::state::InteractionState;

/// Typography properties sampled from every candidate element, in display order.
pub const TYPOGRAPHY_PROPERTIES: [&str; 11] = [
    "font-family",
    "font-size",
    "font-weight",
    "font-variant",
    "font-style",
    "color",
    "text-transform",
    "text-decoration",
    "text-shadow",
    "letter-spacing",
    "word-spacing",
];

/// Owned copy of [`TYPOGRAPHY_PROPERTIES`].
pub fn default_properties() -> Vec<String> {
    TYPOGRAPHY_PROPERTIES.iter().map(|p| (*p).to_string()).collect()
}

/// Resolved values of the recognized CSS properties for one element.
///
/// Properties missing from the computed style are absent keys, never empty
/// strings. Keys iterate in ordinal order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSnapshot {
    properties: BTreeMap<String, String>,
}

impl StyleSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert used while capturing a snapshot.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Property/value pairs in ordinal key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keep only the properties named in `names`.
    pub fn restricted_to(&self, names: &[String]) -> Self {
        names
            .iter()
            .filter_map(|name| {
                self.properties
                    .get(name)
                    .map(|value| (name.clone(), value.clone()))
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// One style-sampling event: an element, or one simulated state of a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub tag: String,
    /// Whitespace-trimmed, truncated text content.
    pub sample_text: String,
    pub style: StyleSnapshot,
    /// Interaction state the style was read under.
    #[serde(default)]
    pub state: InteractionState,
}

impl Observation {
    pub fn new(tag: impl Into<String>, sample_text: impl Into<String>, style: StyleSnapshot) -> Self {
        Self {
            tag: tag.into(),
            sample_text: sample_text.into(),
            style,
            state: InteractionState::NONE,
        }
    }

    pub fn with_state(mut self, state: InteractionState) -> Self {
        self.state = state;
        self
    }
}
