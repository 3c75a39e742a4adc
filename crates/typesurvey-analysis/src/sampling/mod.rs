//! Candidate sampling: which nodes become observations.
//!
//! DOM traversal stays with the host; this module only sees an already
//! ordered sequence of candidate nodes.

pub mod heading;
pub mod node;
pub mod sampler;
pub mod text;

pub use heading::HeadingDetector;
pub use node::CandidateNode;
pub use sampler::{PanelKind, Sampler};
pub use text::truncate_sample;
