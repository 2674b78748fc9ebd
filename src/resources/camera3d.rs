//! Shared 3D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera3D`] so the render pass and any
//! camera controller agree on a single view.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera3D, Vector3};

/// ECS resource that holds the active 3D camera parameters.
#[derive(Resource)]
pub struct Camera3DRes(pub Camera3D);

impl Default for Camera3DRes {
    /// Perspective camera looking at the origin from above and in front.
    fn default() -> Self {
        Self(Camera3D::perspective(
            Vector3 { x: 0.0, y: 1.6, z: 2.4 },
            Vector3 { x: 0.0, y: 0.2, z: 0.0 },
            Vector3 { x: 0.0, y: 1.0, z: 0.0 },
            45.0,
        ))
    }
}
