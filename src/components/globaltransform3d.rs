//! Computed world-space transform for entities in a hierarchy.
//!
//! The [`propagate_transforms`](crate::systems::propagate_transforms::propagate_transforms)
//! system composes each entity's [`Transform3D`](super::transform3d::Transform3D)
//! with its ancestors and stores the result here. Renderers read this
//! component, never the local one.

use bevy_ecs::prelude::*;
use glam::{Quat, Vec3};

use super::transform3d::Transform3D;

/// Computed world-space transform.
///
/// For root entities (no parent) it mirrors the local [`Transform3D`].
/// For children it holds the composed result of the full ancestor chain.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct GlobalTransform3D {
    /// World-space position.
    pub position: Vec3,
    /// World-space orientation.
    pub rotation: Quat,
    /// World-space scale.
    pub scale: Vec3,
}

impl GlobalTransform3D {
    /// Compose a child's local transform onto this (parent) transform.
    ///
    /// The child offset is scaled by the parent scale, then rotated by the
    /// parent rotation. Non-uniform parent scale combined with a rotated
    /// child is not sheared.
    pub fn mul_transform(&self, local: &Transform3D) -> GlobalTransform3D {
        GlobalTransform3D {
            position: self.position + self.rotation * (self.scale * local.position),
            rotation: (self.rotation * local.rotation).normalize(),
            scale: self.scale * local.scale,
        }
    }

    /// This entity's local up axis in world space.
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

impl From<Transform3D> for GlobalTransform3D {
    fn from(t: Transform3D) -> Self {
        Self {
            position: t.position,
            rotation: t.rotation,
            scale: t.scale,
        }
    }
}

impl Default for GlobalTransform3D {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}
