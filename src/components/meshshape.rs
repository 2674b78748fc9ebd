//! Primitive mesh shapes understood by the renderer.
//!
//! Shapes are centered on the entity's position. Cylinders and cones extend
//! along the entity's local Y axis; a cone's apex is at `+height / 2`.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub enum MeshShape {
    /// Upright cylinder.
    Cylinder { height: f32, radius: f32 },
    /// Upright cone, base radius at the bottom.
    Cone { height: f32, radius: f32 },
    /// Axis-aligned cube with edge length `size`.
    Cube { size: f32 },
    Sphere { radius: f32 },
}

impl MeshShape {
    /// Short type name used by debug views.
    pub fn kind(&self) -> &'static str {
        match self {
            MeshShape::Cylinder { .. } => "cylinder",
            MeshShape::Cone { .. } => "cone",
            MeshShape::Cube { .. } => "cube",
            MeshShape::Sphere { .. } => "sphere",
        }
    }
}
