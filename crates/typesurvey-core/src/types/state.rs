//! Interaction-state flags used when simulating `:active`, `:focus` and `:hover`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A set of simulated interaction-state flags.
///
/// Bit values match the content-state flags of the host: `active=1`,
/// `focus=2`, `hover=4`. `NONE` is the unsimulated default state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionState(u8);

impl InteractionState {
    pub const NONE: Self = Self(0);
    pub const ACTIVE: Self = Self(1);
    pub const FOCUS: Self = Self(2);
    pub const HOVER: Self = Self(4);

    /// Non-default states in the order they are simulated.
    pub const SIMULATED: [Self; 3] = [Self::ACTIVE, Self::FOCUS, Self::HOVER];

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Build from raw bits, dropping anything outside the known flags.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & 0b111)
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// CSS pseudo-class name for a single flag, `None` for the default state
    /// or for combined flags.
    pub fn pseudo_class(self) -> Option<&'static str> {
        match self {
            Self::ACTIVE => Some("active"),
            Self::FOCUS => Some("focus"),
            Self::HOVER => Some("hover"),
            _ => None,
        }
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("none");
        }
        let names: Vec<&str> = Self::SIMULATED
            .iter()
            .filter(|flag| self.contains(**flag))
            .filter_map(|flag| flag.pseudo_class())
            .collect();
        f.write_str(&names.join("+"))
    }
}
