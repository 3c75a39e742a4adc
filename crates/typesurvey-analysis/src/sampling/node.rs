//! Host-provided view of a candidate element.

use typesurvey_core::types::{Observation, StyleSnapshot};

use super::text::truncate_sample;

/// An element the host offers for sampling.
pub trait CandidateNode {
    /// Tag name as reported by the document (`"H1"`, `"a"`, ...).
    fn tag_name(&self) -> &str;

    /// Full text content of the element.
    fn text_content(&self) -> &str;

    /// Text of the first child when that child is a text node.
    fn leading_text(&self) -> Option<&str>;

    /// Computed values for `properties`, omitting any the style lacks.
    fn computed_style(&self, properties: &[String]) -> StyleSnapshot;

    /// Whether this node is a link and gets pseudo-state expansion.
    fn is_link(&self) -> bool {
        self.tag_name().eq_ignore_ascii_case("a")
    }
}

/// Build the default-state observation of a node.
pub fn observe_node<N>(node: &N, properties: &[String], max_chars: usize) -> Observation
where
    N: CandidateNode + ?Sized,
{
    Observation::new(
        node.tag_name(),
        truncate_sample(node.text_content(), max_chars),
        node.computed_style(properties),
    )
}
