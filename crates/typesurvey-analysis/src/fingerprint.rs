//! Canonical style fingerprints.
//!
//! Two snapshots with the same property/value pairs share a fingerprint no
//! matter how they were built, which is what aggregation keys on.

use std::fmt;

use serde::{Deserialize, Serialize};
use typesurvey_core::types::StyleSnapshot;

/// Canonical `name:value;name:value` key of a [`StyleSnapshot`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the fingerprint of a style snapshot.
///
/// Property names are ordered ordinally (case-sensitive). Snapshots iterate
/// their keys in that order already, so no extra sort is needed here.
/// An empty snapshot yields the empty fingerprint.
pub fn fingerprint(style: &StyleSnapshot) -> Fingerprint {
    let capacity = style
        .iter()
        .map(|(name, value)| name.len() + value.len() + 2)
        .sum::<usize>();
    let mut key = String::with_capacity(capacity);

    for (i, (name, value)) in style.iter().enumerate() {
        if i > 0 {
            key.push(';');
        }
        key.push_str(name);
        key.push(':');
        key.push_str(value);
    }

    Fingerprint(key)
}
