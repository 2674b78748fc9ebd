//! Overlay toggle resource.
//!
//! While present, the render pass draws the debug registry table and the
//! details of the selected entity on top of the scene.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the registry overlay is drawn.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
