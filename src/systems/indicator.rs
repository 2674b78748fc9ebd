//! Indicator animation systems.
//!
//! - [`indicator_animation_system`] advances every indicator's oscillation
//!   and moves its arrow to `base_offset + sin(phase * PI) * amplitude`
//!   along the target's local up axis.
//! - [`prune_stale_indicators`] frees indicators whose target has been
//!   despawned behind the lifecycle's back.
//!
//! Both read state from the [`IndicatorArena`] resource and are no-ops when
//! it is absent. Delta time comes from [`WorldTime`]; without it the
//! animation does not run.

use bevy_ecs::entity_disabling::Disabled;
use bevy_ecs::prelude::*;
use bevy_ecs::query::Allow;
use log::{debug, trace};

use crate::components::indicator::ArrowIndicator;
use crate::components::transform3d::Transform3D;
use crate::resources::indicatorarena::{IndicatorArena, IndicatorHandle};
use crate::resources::worldtime::WorldTime;

/// Advance all indicators by one tick and reposition their arrows.
///
/// An indicator whose arrow entity no longer exists still advances, but its
/// position write is skipped for this tick.
pub fn indicator_animation_system(
    world_time: Option<Res<WorldTime>>,
    arena: Option<ResMut<IndicatorArena>>,
    mut arrows: Query<&mut Transform3D, With<ArrowIndicator>>,
) {
    let (Some(world_time), Some(mut arena)) = (world_time, arena) else {
        return;
    };
    let dt = world_time.delta.max(0.0);
    for slot in arena.iter_mut() {
        slot.state.advance(dt);

        let Ok(mut transform) = arrows.get_mut(slot.arrow) else {
            trace!(
                "Indicator arrow {} for entity {} is gone, skipping",
                slot.arrow, slot.target
            );
            continue;
        };
        transform.position.y = slot.state.height();
    }
}

/// Free indicators whose target entity no longer exists.
///
/// Any arrow still alive for such an indicator is despawned as well.
/// Disabled targets still exist and keep their indicator.
pub fn prune_stale_indicators(
    arena: Option<ResMut<IndicatorArena>>,
    live: Query<Entity, Allow<Disabled>>,
    mut commands: Commands,
) {
    let Some(mut arena) = arena else {
        return;
    };
    let stale: Vec<IndicatorHandle> = arena
        .iter()
        .filter(|(_, slot)| !live.contains(slot.target))
        .map(|(handle, _)| handle)
        .collect();

    for handle in stale {
        if let Some(slot) = arena.remove(handle) {
            debug!("Target {} despawned, dropping its indicator", slot.target);
            if live.contains(slot.arrow) {
                commands.entity(slot.arrow).try_despawn();
            }
        }
    }
}
