//! ECS components for entities.
//!
//! Submodules overview:
//! - [`entityname`] – human-readable name used by debug views
//! - [`globaltransform3d`] – computed world-space transform
//! - [`indicator`] – bouncing arrow state and marker components
//! - [`meshshape`] – primitive shape drawn by the renderer
//! - [`tint`] – flat color for mesh shapes
//! - [`transform3d`] – local position, rotation and scale

pub mod entityname;
pub mod globaltransform3d;
pub mod indicator;
pub mod meshshape;
pub mod tint;
pub mod transform3d;
