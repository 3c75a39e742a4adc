//! Core data types shared by every subsystem.

pub mod collections;
pub mod state;
pub mod style;

pub use state::InteractionState;
pub use style::{default_properties, Observation, StyleSnapshot, TYPOGRAPHY_PROPERTIES};
