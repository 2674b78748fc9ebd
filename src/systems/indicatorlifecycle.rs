//! Attach and detach bouncing arrow indicators.
//!
//! [`attach_indicator`] stores an [`IndicatorState`] in the
//! [`IndicatorArena`] and spawns the arrow geometry as a child of the target:
//!
//! ```text
//! target
//! └── arrow      ArrowIndicator, Transform3D (y = base_offset, rotated PI about X)
//!     ├── shaft  ArrowPart::Shaft, MeshShape::Cylinder
//!     └── tip    ArrowPart::Tip,   MeshShape::Cone
//! ```
//!
//! The rotation flips the arrow so the tip points down at the target. From
//! then on [`indicator_animation_system`](crate::systems::indicator::indicator_animation_system)
//! moves the arrow every frame. [`detach_indicator`] frees the slot and
//! despawns the arrow with its parts.

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use glam::{Quat, Vec3};
use log::{debug, trace};

use crate::components::globaltransform3d::GlobalTransform3D;
use crate::components::indicator::{
    ArrowIndicator, ArrowPart, DEFAULT_BASE_OFFSET, IndicatorState, SHAFT_HEIGHT, SHAFT_RADIUS,
    TIP_HEIGHT, TIP_RADIUS,
};
use crate::components::meshshape::MeshShape;
use crate::components::tint::Tint;
use crate::components::transform3d::Transform3D;
use crate::resources::indicatorarena::{IndicatorArena, IndicatorError, IndicatorHandle};

/// Attach an indicator resting `base_offset` above `target`.
///
/// # Errors
///
/// - [`IndicatorError::AlreadyAttached`] if `target` already has one. The
///   existing indicator is not modified; detach it first.
/// - [`IndicatorError::TargetNotFound`] if `target` does not exist.
pub fn attach_indicator(
    world: &mut World,
    target: Entity,
    base_offset: f32,
) -> Result<IndicatorHandle, IndicatorError> {
    if world.get_entity(target).is_err() {
        return Err(IndicatorError::TargetNotFound(target));
    }
    if world
        .get_resource::<IndicatorArena>()
        .and_then(|a| a.find(target))
        .is_some()
    {
        return Err(IndicatorError::AlreadyAttached(target));
    }

    let state = IndicatorState::new(base_offset);
    let arrow = spawn_arrow(world, target, &state);
    let handle = world
        .get_resource_or_insert_with(IndicatorArena::default)
        .insert(target, arrow, state)?;
    debug!("Attached indicator {:?} to entity {}", handle, target);
    Ok(handle)
}

/// [`attach_indicator`] with the default resting height.
pub fn attach_default_indicator(
    world: &mut World,
    target: Entity,
) -> Result<IndicatorHandle, IndicatorError> {
    attach_indicator(world, target, DEFAULT_BASE_OFFSET)
}

/// Remove the indicator attached to `target`, if any.
///
/// Returns `false` when there was nothing to detach.
pub fn detach_indicator(world: &mut World, target: Entity) -> bool {
    let Some(slot) = world
        .get_resource_mut::<IndicatorArena>()
        .and_then(|mut a| a.remove_target(target))
    else {
        trace!("No indicator attached to entity {}", target);
        return false;
    };
    match world.get_entity_mut(slot.arrow) {
        Ok(arrow) => arrow.despawn(),
        Err(_) => trace!("Arrow {} already gone", slot.arrow),
    }
    debug!("Detached indicator from entity {}", target);
    true
}

/// Handle of the indicator attached to `target`, if any.
pub fn indicator_handle(world: &World, target: Entity) -> Option<IndicatorHandle> {
    world
        .get_resource::<IndicatorArena>()
        .and_then(|a| a.find(target))
}

fn spawn_arrow(world: &mut World, target: Entity, state: &IndicatorState) -> Entity {
    let tint = Tint::BLUE;
    let arrow_transform = Transform3D::from_xyz(0.0, state.height(), 0.0)
        .with_rotation(Quat::from_rotation_x(std::f32::consts::PI));

    let arrow = world
        .spawn((
            ArrowIndicator { target },
            arrow_transform,
            GlobalTransform3D::default(),
            ChildOf(target),
        ))
        .id();

    world.spawn((
        ArrowPart::Shaft,
        MeshShape::Cylinder {
            height: SHAFT_HEIGHT,
            radius: SHAFT_RADIUS,
        },
        tint,
        Transform3D {
            position: Vec3::new(0.0, SHAFT_HEIGHT / 2.0, 0.0),
            ..Default::default()
        },
        GlobalTransform3D::default(),
        ChildOf(arrow),
    ));
    world.spawn((
        ArrowPart::Tip,
        MeshShape::Cone {
            height: TIP_HEIGHT,
            radius: TIP_RADIUS,
        },
        tint,
        Transform3D::from_xyz(0.0, SHAFT_HEIGHT + TIP_HEIGHT / 2.0, 0.0),
        GlobalTransform3D::default(),
        ChildOf(arrow),
    ));

    arrow
}
