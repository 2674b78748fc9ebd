//! Local 3D transform of an entity.
//!
//! When the entity has a [`ChildOf`](bevy_ecs::hierarchy::ChildOf) parent,
//! every field is relative to that parent. World-space values are produced
//! by [`propagate_transforms`](crate::systems::propagate_transforms::propagate_transforms)
//! into [`GlobalTransform3D`](super::globaltransform3d::GlobalTransform3D).

use bevy_ecs::prelude::Component;
use glam::{Quat, Vec3};

/// Position, orientation and scale relative to the parent (or the world for roots).
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Transform3D {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform3D {
    pub fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}
