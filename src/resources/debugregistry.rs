//! Entity debug registry resource.
//!
//! The [`EntityDebugRegistry`] is the table debug views read from: one
//! [`TransformSnapshot`] per tracked entity, in the order entities were first
//! registered. It is inserted once into the [`World`] at startup and handed
//! to consumers through the ECS like any other resource.
//!
//! # Ownership
//!
//! Entries hold plain [`Entity`] ids. The registry never keeps an entity
//! alive and despawning a tracked entity leaves its entry in place until it
//! is unregistered (or pruned by
//! [`prune_despawned_entries`](crate::systems::debugregistry::prune_despawned_entries)).
//!
//! # Notifications
//!
//! Every mutation that actually changes the table bumps [`revision`] and
//! sends a [`RegistryChange`] to all channel subscribers before returning.
//! No-ops (duplicate insert, unknown remove) send nothing. The `World`-level
//! wrappers in [`crate::systems::debugregistry`] additionally trigger a
//! [`DebugRegistryChanged`](crate::events::registry::DebugRegistryChanged)
//! event for observers.
//!
//! [`revision`]: EntityDebugRegistry::revision

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::debug;
use rustc_hash::FxHashSet;

use crate::events::registry::RegistryChange;
use crate::snapshot::TransformSnapshot;

/// Insertion-ordered table of entity snapshots with unique entity ids.
#[derive(Resource, Debug, Default)]
pub struct EntityDebugRegistry {
    entries: Vec<TransformSnapshot>,
    index: FxHashSet<Entity>,
    revision: u64,
    subscribers: Vec<Sender<RegistryChange>>,
}

impl EntityDebugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `snapshot` unless its entity is already tracked.
    ///
    /// Returns `false` (and keeps the existing entry untouched) on duplicates.
    pub fn insert(&mut self, snapshot: TransformSnapshot) -> bool {
        let entity = snapshot.entity();
        if !self.index.insert(entity) {
            debug!("Entity {} already registered, ignoring", entity);
            return false;
        }
        self.entries.push(snapshot);
        self.changed(RegistryChange::Registered(entity));
        true
    }

    /// Remove the entry for `entity`. Returns `false` if it was not tracked.
    pub fn remove(&mut self, entity: Entity) -> bool {
        if !self.index.remove(&entity) {
            debug!("Entity {} not registered, nothing to remove", entity);
            return false;
        }
        self.entries.retain(|s| s.entity() != entity);
        self.changed(RegistryChange::Unregistered(entity));
        true
    }

    /// Replace the snapshot of an already tracked entity, keeping its slot
    /// in the order. Returns `false` if the entity is not tracked.
    pub fn replace(&mut self, snapshot: TransformSnapshot) -> bool {
        let entity = snapshot.entity();
        let Some(slot) = self.entries.iter_mut().find(|s| s.entity() == entity) else {
            return false;
        };
        *slot = snapshot;
        self.changed(RegistryChange::Refreshed(entity));
        true
    }

    /// Drop every entry. Returns `false` if the table was already empty.
    pub fn clear(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.entries.clear();
        self.index.clear();
        self.changed(RegistryChange::Cleared);
        true
    }

    /// Keep only the entries for which `keep` returns `true`.
    ///
    /// Returns the number of entries removed; a single
    /// [`RegistryChange::Pruned`] is sent when that number is non-zero.
    pub fn retain(&mut self, mut keep: impl FnMut(&TransformSnapshot) -> bool) -> usize {
        let before = self.entries.len();
        let index = &mut self.index;
        self.entries.retain(|s| {
            let k = keep(s);
            if !k {
                index.remove(&s.entity());
            }
            k
        });
        let removed = before - self.entries.len();
        if removed > 0 {
            self.changed(RegistryChange::Pruned(removed));
        }
        removed
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.index.contains(&entity)
    }

    pub fn get(&self, entity: Entity) -> Option<&TransformSnapshot> {
        if !self.contains(entity) {
            return None;
        }
        self.entries.iter().find(|s| s.entity() == entity)
    }

    /// Borrow the table in insertion order.
    pub fn entries(&self) -> &[TransformSnapshot] {
        &self.entries
    }

    /// Copy of the table in insertion order.
    pub fn snapshot_all(&self) -> Vec<TransformSnapshot> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Monotonic counter bumped on every effective mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Subscribe to table changes.
    ///
    /// The receiver gets one [`RegistryChange`] per effective mutation, in
    /// order. Dropping the receiver unsubscribes on the next mutation.
    pub fn subscribe(&mut self) -> Receiver<RegistryChange> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn changed(&mut self, change: RegistryChange) {
        self.revision += 1;
        self.subscribers.retain(|tx| tx.send(change).is_ok());
    }
}
