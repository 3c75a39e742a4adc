//! Host capability for forcing interaction states.

use typesurvey_core::types::{InteractionState, StyleSnapshot};

/// Applies interaction-state flags to a node and re-reads its computed style.
///
/// Implemented by the host (devtools content-state API, a headless driver,
/// a test fake). `N` is the host's node type.
pub trait PseudoStateController<N: ?Sized> {
    /// Whether states can be forced on `node`. Unavailable controllers make
    /// the expander fall back to the default-state observation.
    fn is_available(&self, _node: &N) -> bool {
        true
    }

    /// Replace the node's forced state with `state`.
    fn set_state(&mut self, node: &N, state: InteractionState);

    /// Computed style of `node` under the currently forced state.
    fn computed_style(&self, node: &N, properties: &[String]) -> StyleSnapshot;

    /// Return the node to the unforced state.
    fn clear_state(&mut self, node: &N) {
        self.set_state(node, InteractionState::NONE);
    }
}
