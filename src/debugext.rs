//! Builder-style registration on spawned entities.
//!
//! ```ignore
//! world
//!     .spawn((EntityName::new("Crate"), Transform3D::default()))
//!     .register_for_debugging(Some("Crate"));
//! ```

use bevy_ecs::prelude::*;

use crate::systems::debugregistry::{register_entity, unregister_entity};

/// Debug registry shortcuts for [`EntityWorldMut`].
pub trait EntityDebugExt {
    /// Register this entity with the debug registry.
    fn register_for_debugging(&mut self, name: Option<&str>) -> &mut Self;
    /// Remove this entity from the debug registry.
    fn unregister_from_debugging(&mut self) -> &mut Self;
}

impl EntityDebugExt for EntityWorldMut<'_> {
    fn register_for_debugging(&mut self, name: Option<&str>) -> &mut Self {
        let entity = self.id();
        self.world_scope(|world| {
            register_entity(world, entity, name);
        });
        self
    }

    fn unregister_from_debugging(&mut self) -> &mut Self {
        let entity = self.id();
        self.world_scope(|world| {
            unregister_entity(world, entity);
        });
        self
    }
}
