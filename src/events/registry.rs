//! Registry change notifications.
//!
//! Every effective mutation of the
//! [`EntityDebugRegistry`](crate::resources::debugregistry::EntityDebugRegistry)
//! is described by a [`RegistryChange`]. Consumers outside the ECS receive
//! it through [`EntityDebugRegistry::subscribe`](crate::resources::debugregistry::EntityDebugRegistry::subscribe);
//! consumers inside the `World` observe [`DebugRegistryChanged`], which the
//! `World`-level operations trigger synchronously.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<DebugRegistryChanged>| {
//!     log::info!("registry now at revision {}", trigger.event().revision);
//! });
//! ```

use bevy_ecs::prelude::*;

/// What changed in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryChange {
    /// A new entity entered the table.
    Registered(Entity),
    /// An entity left the table.
    Unregistered(Entity),
    /// An entity's snapshot was replaced in place.
    Refreshed(Entity),
    /// The table was emptied.
    Cleared,
    /// Entries for despawned entities were dropped; carries the count.
    Pruned(usize),
}

/// Event triggered on the `World` after each registry mutation.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugRegistryChanged {
    pub change: RegistryChange,
    /// Registry revision after the change.
    pub revision: u64,
}
