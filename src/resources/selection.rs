//! Single-selection policy of the debugger demo.
//!
//! The indicator core allows any number of concurrent indicators; the demo
//! keeps at most one selected entity and moves the indicator along with it.

use bevy_ecs::prelude::*;

/// Currently inspected entity, if any.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct Selection {
    pub selected: Option<Entity>,
}

impl Selection {
    /// Entity that follows (`forward`) or precedes the current selection in
    /// `order`, wrapping around.
    ///
    /// With nothing selected, or with a selection no longer in `order`,
    /// returns the first (`forward`) or last entity. Empty `order` yields `None`.
    pub fn cycle(&self, order: &[Entity], forward: bool) -> Option<Entity> {
        if order.is_empty() {
            return None;
        }
        let len = order.len();
        let current = self
            .selected
            .and_then(|s| order.iter().position(|e| *e == s));
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };
        Some(order[next])
    }
}
