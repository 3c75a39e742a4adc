//! Interaction-state simulation for link-like nodes.

pub mod controller;
pub mod expander;

pub use controller::PseudoStateController;
pub use expander::PseudoStateExpander;
