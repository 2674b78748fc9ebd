//! Explicit component capability table.
//!
//! Debug views list the components attached to an entity. Instead of
//! inspecting type names at runtime, each inspectable component type is
//! registered once with a descriptor string. Listing an entity's components
//! then means asking which registered descriptors it carries.
//!
//! Unregistered component types are invisible to debug views.
//!
//! # Usage
//!
//! ```ignore
//! register_descriptor::<Transform3D>(&mut world, "Transform3D");
//! register_descriptor::<MeshShape>(&mut world, "MeshShape");
//! ```

use bevy_ecs::component::ComponentId;
use bevy_ecs::prelude::*;
use bevy_ecs::world::EntityRef;

/// Descriptor strings keyed by component id, in registration order.
#[derive(Resource, Debug, Default, Clone)]
pub struct ComponentDescriptors {
    entries: Vec<(ComponentId, String)>,
}

impl ComponentDescriptors {
    /// Set the descriptor for `id`, replacing any previous one in place.
    pub fn insert(&mut self, id: ComponentId, descriptor: impl Into<String>) {
        let descriptor = descriptor.into();
        if let Some(entry) = self.entries.iter_mut().find(|(cid, _)| *cid == id) {
            entry.1 = descriptor;
        } else {
            self.entries.push((id, descriptor));
        }
    }

    /// Descriptor registered for `id`, if any.
    pub fn get(&self, id: ComponentId) -> Option<&str> {
        self.entries
            .iter()
            .find(|(cid, _)| *cid == id)
            .map(|(_, d)| d.as_str())
    }

    /// Descriptors of every registered component the entity carries.
    pub fn describe(&self, entity: &EntityRef) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(id, _)| entity.contains_id(*id))
            .map(|(_, d)| d.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Register `C` under `descriptor`, creating the resource if missing.
pub fn register_descriptor<C: Component>(world: &mut World, descriptor: impl Into<String>) {
    let id = world.register_component::<C>();
    world
        .get_resource_or_insert_with(ComponentDescriptors::default)
        .insert(id, descriptor);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Component)]
    struct Health(#[allow(dead_code)] i32);

    #[derive(Component)]
    struct Armor;

    #[derive(Component)]
    struct Hidden;

    #[test]
    fn test_describe_lists_registered_components_in_order() {
        let mut world = World::new();
        register_descriptor::<Armor>(&mut world, "Armor");
        register_descriptor::<Health>(&mut world, "Health");

        let e = world.spawn((Health(10), Armor, Hidden)).id();
        let descriptors = world.resource::<ComponentDescriptors>();
        let listed = descriptors.describe(&world.entity(e));
        assert_eq!(listed, vec!["Armor".to_string(), "Health".to_string()]);
    }

    #[test]
    fn test_describe_skips_missing_components() {
        let mut world = World::new();
        register_descriptor::<Health>(&mut world, "Health");
        register_descriptor::<Armor>(&mut world, "Armor");

        let e = world.spawn(Health(1)).id();
        let listed = world
            .resource::<ComponentDescriptors>()
            .describe(&world.entity(e));
        assert_eq!(listed, vec!["Health".to_string()]);
    }

    #[test]
    fn test_reregister_replaces_descriptor() {
        let mut world = World::new();
        register_descriptor::<Health>(&mut world, "Health");
        register_descriptor::<Health>(&mut world, "HP");

        let descriptors = world.resource::<ComponentDescriptors>();
        assert_eq!(descriptors.len(), 1);
        let id = world.component_id::<Health>().unwrap();
        assert_eq!(descriptors.get(id), Some("HP"));
    }
}
