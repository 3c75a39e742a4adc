//! Heading detection.

use std::sync::LazyLock;

use regex::Regex;
use typesurvey_core::types::StyleSnapshot;

use super::node::CandidateNode;

static HEADING_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:h[1-6]|header)$").expect("heading pattern is valid"));

static SKIP_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:script|style)$").expect("skip pattern is valid"));

/// Decides whether a node reads as a heading.
///
/// Heading tags always qualify and `script`/`style` never do. Any other
/// element qualifies when it directly holds text and every trigger property
/// differs from the baseline style of an unstyled probe element. Computed
/// styles carry no inherited-vs-set flag, so the baseline comparison stands
/// in for "explicitly styled".
#[derive(Debug, Clone)]
pub struct HeadingDetector {
    trigger_properties: Vec<String>,
    baseline: StyleSnapshot,
}

impl HeadingDetector {
    pub fn new(trigger_properties: Vec<String>, baseline: StyleSnapshot) -> Self {
        Self {
            trigger_properties,
            baseline,
        }
    }

    pub fn is_heading<N>(&self, node: &N) -> bool
    where
        N: CandidateNode + ?Sized,
    {
        let tag = node.tag_name();
        if HEADING_TAG_RE.is_match(tag) {
            return true;
        }
        if SKIP_TAG_RE.is_match(tag) {
            return false;
        }

        // Only nodes that directly hold text, so a parent and its child are
        // not both picked up.
        let holds_text = node
            .leading_text()
            .is_some_and(|text| !text.trim().is_empty());
        if !holds_text {
            return false;
        }

        let style = node.computed_style(&self.trigger_properties);
        self.trigger_properties
            .iter()
            .all(|property| style.get(property) != self.baseline.get(property))
    }
}
