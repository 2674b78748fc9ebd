//! Selection handling for the debugger demo.
//!
//! [`selection_system`] turns the frame's [`InputState`] into registry and
//! indicator operations: arrow keys cycle through registered entities in
//! registration order, Backspace deselects, `R` re-snapshots the selected
//! entity and `C` clears the registry. The selected entity always carries the
//! only indicator the demo shows.
//!
//! [`follow_registry_changes`] keeps the selection consistent when an entity
//! leaves the registry by other means.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::indicator::DEFAULT_BASE_OFFSET;
use crate::events::registry::{DebugRegistryChanged, RegistryChange};
use crate::resources::appconfig::AppConfig;
use crate::resources::debugregistry::EntityDebugRegistry;
use crate::resources::input::InputState;
use crate::resources::selection::Selection;
use crate::systems::debugregistry::{clear_registry, refresh_entity, registered_entities};
use crate::systems::indicatorlifecycle::{attach_indicator, detach_indicator};

/// Apply this frame's selection input.
pub fn selection_system(world: &mut World) {
    let Some(input) = world.get_resource::<InputState>().cloned() else {
        return;
    };
    let selection = *world.get_resource_or_insert_with(Selection::default);

    let forward = input.select_next.just_pressed;
    if forward || input.select_previous.just_pressed {
        let order: Vec<Entity> = registered_entities(world)
            .iter()
            .map(|s| s.entity())
            .collect();
        if let Some(next) = selection.cycle(&order, forward) {
            select(world, Some(next));
        }
    }

    if input.deselect.just_pressed {
        select(world, None);
    }

    if input.refresh_selected.just_pressed {
        if let Some(selected) = world.resource::<Selection>().selected {
            refresh_entity(world, selected);
        }
    }

    if input.clear_registry.just_pressed {
        select(world, None);
        clear_registry(world);
    }
}

/// Move the selection (and its indicator) to `entity`.
///
/// Detaches the indicator from the previously selected entity. If the new
/// indicator cannot be attached the selection ends up empty.
pub fn select(world: &mut World, entity: Option<Entity>) {
    let previous = world
        .get_resource_or_insert_with(Selection::default)
        .selected;
    if previous == entity {
        return;
    }
    if let Some(previous) = previous {
        detach_indicator(world, previous);
    }

    let base_offset = world
        .get_resource::<AppConfig>()
        .map(|c| c.indicator_base_offset)
        .unwrap_or(DEFAULT_BASE_OFFSET);
    let selected = entity.and_then(|e| match attach_indicator(world, e, base_offset) {
        Ok(_) => Some(e),
        Err(err) => {
            warn!("Cannot select entity {}: {}", e, err);
            None
        }
    });

    if let Some(e) = selected {
        info!("Selected entity {}", e);
    }
    world.resource_mut::<Selection>().selected = selected;
}

/// Observer dropping the selection when its entity leaves the registry.
pub fn follow_registry_changes(
    trigger: On<DebugRegistryChanged>,
    selection: Option<Res<Selection>>,
    mut commands: Commands,
) {
    let Some(selected) = selection.and_then(|s| s.selected) else {
        return;
    };
    let lost = match trigger.event().change {
        RegistryChange::Unregistered(e) => e == selected,
        RegistryChange::Cleared | RegistryChange::Pruned(_) => true,
        RegistryChange::Registered(_) | RegistryChange::Refreshed(_) => false,
    };
    if lost {
        commands.queue(move |world: &mut World| {
            if world
                .get_resource::<EntityDebugRegistry>()
                .is_some_and(|r| r.contains(selected))
            {
                return;
            }
            select(world, None);
        });
    }
}
