//! World-level entity debug registry operations.
//!
//! These functions take the snapshot of an entity from the [`World`], update
//! the [`EntityDebugRegistry`] resource and trigger a [`DebugRegistryChanged`]
//! event so observers see the change before the call returns.
//!
//! Duplicate registration and removal of unknown entities are silent no-ops
//! (logged at `debug` level): debug tooling must never destabilize the host.
//!
//! # Usage
//!
//! ```ignore
//! register_entity(&mut world, player, Some("Player"));
//! for snapshot in registered_entities(&world) {
//!     println!("{} at {:?}", snapshot.name(), snapshot.position());
//! }
//! unregister_entity(&mut world, player);
//! ```
//!
//! Inside regular systems, queue these through [`Commands`]:
//!
//! ```ignore
//! commands.queue(move |world: &mut World| {
//!     register_entity(world, entity, None);
//! });
//! ```

use bevy_ecs::entity_disabling::Disabled;
use bevy_ecs::prelude::*;
use bevy_ecs::query::Allow;
use log::debug;

use crate::events::registry::{DebugRegistryChanged, RegistryChange};
use crate::resources::debugregistry::EntityDebugRegistry;
use crate::snapshot::TransformSnapshot;

/// Snapshot `entity` and add it to the registry.
///
/// Returns `true` if a new entry was added. Already registered entities keep
/// their original snapshot; entities that do not exist are ignored.
pub fn register_entity(world: &mut World, entity: Entity, name: Option<&str>) -> bool {
    if world
        .get_resource::<EntityDebugRegistry>()
        .is_some_and(|r| r.contains(entity))
    {
        debug!("Entity {} already registered, ignoring", entity);
        return false;
    }
    let Some(snapshot) = TransformSnapshot::capture(world, entity, name) else {
        debug!("Entity {} does not exist, not registering", entity);
        return false;
    };
    let inserted = world
        .get_resource_or_insert_with(EntityDebugRegistry::default)
        .insert(snapshot);
    if inserted {
        notify(world, RegistryChange::Registered(entity));
    }
    inserted
}

/// Remove `entity` from the registry. Returns `false` if it was not tracked.
pub fn unregister_entity(world: &mut World, entity: Entity) -> bool {
    let removed = world
        .get_resource_mut::<EntityDebugRegistry>()
        .is_some_and(|mut r| r.remove(entity));
    if removed {
        notify(world, RegistryChange::Unregistered(entity));
    }
    removed
}

/// Empty the registry. Returns `false` if it was already empty.
pub fn clear_registry(world: &mut World) -> bool {
    let cleared = world
        .get_resource_mut::<EntityDebugRegistry>()
        .is_some_and(|mut r| r.clear());
    if cleared {
        notify(world, RegistryChange::Cleared);
    }
    cleared
}

/// Re-snapshot a registered entity in place.
///
/// The entry keeps its position in the table and the name it was registered
/// with. Returns `false` for untracked or despawned entities.
pub fn refresh_entity(world: &mut World, entity: Entity) -> bool {
    let Some(name) = world
        .get_resource::<EntityDebugRegistry>()
        .and_then(|r| r.get(entity))
        .map(|s| s.name().to_owned())
    else {
        debug!("Entity {} not registered, nothing to refresh", entity);
        return false;
    };
    let Some(snapshot) = TransformSnapshot::capture(world, entity, Some(name.as_str())) else {
        debug!("Entity {} no longer exists, keeping its last snapshot", entity);
        return false;
    };
    let replaced = world.resource_mut::<EntityDebugRegistry>().replace(snapshot);
    if replaced {
        notify(world, RegistryChange::Refreshed(entity));
    }
    replaced
}

/// Current registry contents in registration order.
pub fn registered_entities(world: &World) -> Vec<TransformSnapshot> {
    world
        .get_resource::<EntityDebugRegistry>()
        .map(|r| r.snapshot_all())
        .unwrap_or_default()
}

/// Drop registry entries whose entity has been despawned.
///
/// Optional: the registry tolerates dead ids, this only keeps the table tidy.
/// Disabled entities still exist and are kept.
pub fn prune_despawned_entries(
    registry: Option<ResMut<EntityDebugRegistry>>,
    live: Query<Entity, Allow<Disabled>>,
    mut commands: Commands,
) {
    let Some(mut registry) = registry else {
        return;
    };
    let removed = registry.retain(|s| live.contains(s.entity()));
    if removed > 0 {
        debug!("Pruned {} despawned entities from the debug registry", removed);
        commands.trigger(DebugRegistryChanged {
            change: RegistryChange::Pruned(removed),
            revision: registry.revision(),
        });
    }
}

fn notify(world: &mut World, change: RegistryChange) {
    let revision = world.resource::<EntityDebugRegistry>().revision();
    world.trigger(DebugRegistryChanged { change, revision });
}
