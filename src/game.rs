//! Demo scene for the entity debugger.
//!
//! Spawns a ring of primitive shapes, each named and registered with the
//! debug registry, and declares which components the registry lists.

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::info;

use crate::components::entityname::EntityName;
use crate::components::globaltransform3d::GlobalTransform3D;
use crate::components::indicator::ArrowIndicator;
use crate::components::meshshape::MeshShape;
use crate::components::tint::Tint;
use crate::components::transform3d::Transform3D;
use crate::debugext::EntityDebugExt;
use crate::resources::componentdescriptors::register_descriptor;

const RING_RADIUS: f32 = 0.8;
const SHAPE_SIZE: f32 = 0.2;

/// Declare the components shown in snapshot component lists.
pub fn register_component_descriptors(world: &mut World) {
    register_descriptor::<EntityName>(world, "EntityName");
    register_descriptor::<Transform3D>(world, "Transform3D");
    register_descriptor::<GlobalTransform3D>(world, "GlobalTransform3D");
    register_descriptor::<MeshShape>(world, "MeshShape");
    register_descriptor::<Tint>(world, "Tint");
    register_descriptor::<ArrowIndicator>(world, "ArrowIndicator");
}

/// Shape used for the `i`-th demo entity.
fn shape_for(i: usize) -> MeshShape {
    match i % 3 {
        0 => MeshShape::Cube { size: SHAPE_SIZE },
        1 => MeshShape::Sphere {
            radius: SHAPE_SIZE * 0.5,
        },
        _ => MeshShape::Cylinder {
            height: SHAPE_SIZE,
            radius: SHAPE_SIZE * 0.4,
        },
    }
}

/// Spawn `count` shapes on a ring around the origin and register them.
///
/// Returns the spawned entities in registration order.
pub fn setup_scene(world: &mut World, count: usize) -> Vec<Entity> {
    let mut spawned = Vec::with_capacity(count);
    for i in 0..count {
        let angle = i as f32 / count.max(1) as f32 * std::f32::consts::TAU;
        let position = Vec3::new(angle.cos() * RING_RADIUS, 0.0, angle.sin() * RING_RADIUS);
        let scale = 0.8 + fastrand::f32() * 0.4;
        let shape = shape_for(i);
        let name = format!("{} {}", shape.kind(), i);

        let mut entity = world.spawn((
            EntityName::new(name.clone()),
            Transform3D {
                position,
                scale: Vec3::splat(scale),
                ..Default::default()
            },
            GlobalTransform3D::default(),
            shape,
            Tint::new(
                fastrand::u8(40..=220),
                fastrand::u8(40..=220),
                fastrand::u8(40..=220),
                255,
            ),
        ));
        entity.register_for_debugging(Some(name.as_str()));
        spawned.push(entity.id());
    }
    info!("Spawned {} demo entities", spawned.len());
    spawned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::debugregistry::registered_entities;

    #[test]
    fn test_setup_scene_registers_in_order() {
        let mut world = World::new();
        register_component_descriptors(&mut world);
        let spawned = setup_scene(&mut world, 4);

        let snapshots = registered_entities(&world);
        assert_eq!(snapshots.len(), 4);
        for (entity, snapshot) in spawned.iter().zip(snapshots.iter()) {
            assert_eq!(snapshot.entity(), *entity);
            assert!(snapshot.components().iter().any(|c| c == "MeshShape"));
        }
        assert_eq!(snapshots[0].name(), "cube 0");
        assert_eq!(snapshots[1].name(), "sphere 1");
    }

    #[test]
    fn test_setup_scene_empty() {
        let mut world = World::new();
        assert!(setup_scene(&mut world, 0).is_empty());
        assert!(registered_entities(&world).is_empty());
    }
}
