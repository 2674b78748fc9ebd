//! Point-in-time copy of an entity's debug-relevant state.
//!
//! A [`TransformSnapshot`] is taken when an entity is registered with the
//! [`EntityDebugRegistry`](crate::resources::debugregistry::EntityDebugRegistry)
//! and never changes afterwards. To see newer values, take a new snapshot
//! (see [`refresh_entity`](crate::systems::debugregistry::refresh_entity)).

use bevy_ecs::prelude::*;
use glam::Vec3;
use serde::{Serialize, Serializer};

use crate::components::entityname::EntityName;
use crate::components::transform3d::Transform3D;
use crate::resources::componentdescriptors::ComponentDescriptors;

/// Immutable snapshot of an entity's name, transform and component list.
///
/// The `entity` id is a non-owning handle: holding a snapshot never keeps
/// the entity alive, and the id may refer to a despawned entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformSnapshot {
    #[serde(serialize_with = "serialize_entity")]
    entity: Entity,
    name: String,
    position: Vec3,
    scale: Vec3,
    components: Vec<String>,
}

impl TransformSnapshot {
    pub fn new(
        entity: Entity,
        name: impl Into<String>,
        position: Vec3,
        scale: Vec3,
        components: Vec<String>,
    ) -> Self {
        Self {
            entity,
            name: name.into(),
            position,
            scale,
            components,
        }
    }

    /// Snapshot `entity` as it currently is in `world`.
    ///
    /// The name is `name` if given, else the entity's [`EntityName`], else
    /// `"Entity {id}"`. Position and scale come from the local
    /// [`Transform3D`] (identity when missing). Components are listed through
    /// the [`ComponentDescriptors`] resource, empty when it is absent.
    ///
    /// Returns `None` if the entity does not exist.
    pub fn capture(world: &World, entity: Entity, name: Option<&str>) -> Option<Self> {
        let entity_ref = world.get_entity(entity).ok()?;

        let transform = entity_ref
            .get::<Transform3D>()
            .copied()
            .unwrap_or_default();
        let name = match name {
            Some(n) => n.to_owned(),
            None => entity_ref
                .get::<EntityName>()
                .map(|n| n.as_str().to_owned())
                .unwrap_or_else(|| format!("Entity {}", entity)),
        };
        let components = world
            .get_resource::<ComponentDescriptors>()
            .map(|d| d.describe(&entity_ref))
            .unwrap_or_default();

        Some(Self {
            entity,
            name,
            position: transform.position,
            scale: transform.scale,
            components,
        })
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }
}

fn serialize_entity<S: Serializer>(entity: &Entity, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(entity.to_bits())
}
