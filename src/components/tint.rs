//! Flat color material for mesh shapes.
//!
//! The [`Tint`] component is the only material the renderer knows: every
//! [`MeshShape`](super::meshshape::MeshShape) is drawn filled with this
//! color and outlined with a darker shade of it. Conversion to a Raylib
//! color happens in the render pass.

use bevy_ecs::prelude::Component;

/// Solid RGBA color used to draw a mesh shape.
#[derive(Component, Clone, Debug, Copy, PartialEq, Eq)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Tint {
    pub const WHITE: Tint = Tint::new(255, 255, 255, 255);
    pub const BLUE: Tint = Tint::new(0, 121, 241, 255);

    /// Create a new Tint with the specified RGBA values.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Scale the RGB channels by `factor` (clamped to [0, 1]), keeping alpha.
    ///
    /// Used for wireframe outlines drawn over the filled shape.
    pub fn darken(&self, factor: f32) -> Tint {
        let f = factor.clamp(0.0, 1.0);
        Tint::new(
            (self.r as f32 * f) as u8,
            (self.g as f32 * f) as u8,
            (self.b as f32 * f) as u8,
            self.a,
        )
    }
}

impl Default for Tint {
    fn default() -> Self {
        Tint::WHITE
    }
}
