//! Owned storage for active indicators.
//!
//! Indicator states do not live on the target entity: they are kept in a
//! slot array owned by this resource and updated in place by index. A slot
//! remembers its target and the arrow entity spawned for it.
//!
//! Slots are addressed by [`IndicatorHandle`]. Freeing a slot bumps its
//! generation, so a handle kept past [`IndicatorArena::remove`] no longer
//! resolves even after the index is reused.

use bevy_ecs::prelude::*;
use thiserror::Error;

use crate::components::indicator::IndicatorState;

/// Generation-checked reference to an arena slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndicatorHandle {
    index: u32,
    generation: u32,
}

impl IndicatorHandle {
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Errors surfaced by the indicator lifecycle.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorError {
    /// The target already has an active indicator; detach it first.
    #[error("entity {0} already has an indicator attached")]
    AlreadyAttached(Entity),
    /// The target does not exist in the world.
    #[error("entity {0} does not exist")]
    TargetNotFound(Entity),
}

/// One active indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorSlot {
    /// Entity the indicator points at.
    pub target: Entity,
    /// Arrow root entity (child of `target`).
    pub arrow: Entity,
    pub state: IndicatorState,
}

#[derive(Debug, Clone)]
struct Entry {
    generation: u32,
    slot: Option<IndicatorSlot>,
}

/// Slot array of indicator states with free-list reuse.
#[derive(Resource, Debug, Default)]
pub struct IndicatorArena {
    entries: Vec<Entry>,
    free: Vec<u32>,
    len: usize,
}

impl IndicatorArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new indicator for `target`.
    ///
    /// Fails with [`IndicatorError::AlreadyAttached`] if `target` already has
    /// one; the existing slot is left untouched.
    pub fn insert(
        &mut self,
        target: Entity,
        arrow: Entity,
        state: IndicatorState,
    ) -> Result<IndicatorHandle, IndicatorError> {
        if self.find(target).is_some() {
            return Err(IndicatorError::AlreadyAttached(target));
        }
        let slot = IndicatorSlot {
            target,
            arrow,
            state,
        };
        let index = match self.free.pop() {
            Some(index) => {
                self.entries[index as usize].slot = Some(slot);
                index
            }
            None => {
                self.entries.push(Entry {
                    generation: 0,
                    slot: Some(slot),
                });
                (self.entries.len() - 1) as u32
            }
        };
        self.len += 1;
        Ok(IndicatorHandle {
            index,
            generation: self.entries[index as usize].generation,
        })
    }

    /// Handle of the indicator attached to `target`, if any.
    pub fn find(&self, target: Entity) -> Option<IndicatorHandle> {
        self.entries.iter().enumerate().find_map(|(i, e)| {
            e.slot
                .as_ref()
                .filter(|s| s.target == target)
                .map(|_| IndicatorHandle {
                    index: i as u32,
                    generation: e.generation,
                })
        })
    }

    pub fn get(&self, handle: IndicatorHandle) -> Option<&IndicatorSlot> {
        self.entries
            .get(handle.index as usize)
            .filter(|e| e.generation == handle.generation)
            .and_then(|e| e.slot.as_ref())
    }

    pub fn get_mut(&mut self, handle: IndicatorHandle) -> Option<&mut IndicatorSlot> {
        self.entries
            .get_mut(handle.index as usize)
            .filter(|e| e.generation == handle.generation)
            .and_then(|e| e.slot.as_mut())
    }

    /// Oscillation state behind `handle`.
    pub fn state(&self, handle: IndicatorHandle) -> Option<&IndicatorState> {
        self.get(handle).map(|s| &s.state)
    }

    /// Free the slot behind `handle`, returning its content.
    pub fn remove(&mut self, handle: IndicatorHandle) -> Option<IndicatorSlot> {
        let entry = self.entries.get_mut(handle.index as usize)?;
        if entry.generation != handle.generation {
            return None;
        }
        let slot = entry.slot.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.len -= 1;
        Some(slot)
    }

    /// Free the slot attached to `target`, if any.
    pub fn remove_target(&mut self, target: Entity) -> Option<IndicatorSlot> {
        let handle = self.find(target)?;
        self.remove(handle)
    }

    /// Iterate active slots mutably, in index order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut IndicatorSlot> {
        self.entries.iter_mut().filter_map(|e| e.slot.as_mut())
    }

    /// Iterate active slots with their handles, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (IndicatorHandle, &IndicatorSlot)> {
        self.entries.iter().enumerate().filter_map(|(i, e)| {
            e.slot.as_ref().map(|s| {
                (
                    IndicatorHandle {
                        index: i as u32,
                        generation: e.generation,
                    },
                    s,
                )
            })
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(world: &mut World) -> (Entity, Entity) {
        (world.spawn_empty().id(), world.spawn_empty().id())
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut world = World::new();
        let (target, arrow) = entities(&mut world);
        let mut arena = IndicatorArena::new();

        let handle = arena.insert(target, arrow, IndicatorState::new(0.4)).unwrap();
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.find(target), Some(handle));
        let slot = arena.get(handle).unwrap();
        assert_eq!(slot.target, target);
        assert_eq!(slot.arrow, arrow);
    }

    #[test]
    fn test_second_insert_for_target_fails_and_keeps_first() {
        let mut world = World::new();
        let (target, arrow) = entities(&mut world);
        let mut arena = IndicatorArena::new();

        let handle = arena.insert(target, arrow, IndicatorState::new(0.4)).unwrap();
        let err = arena
            .insert(target, arrow, IndicatorState::new(1.0))
            .unwrap_err();
        assert_eq!(err, IndicatorError::AlreadyAttached(target));
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.state(handle).unwrap().base_offset, 0.4);
    }

    #[test]
    fn test_stale_handle_after_reuse() {
        let mut world = World::new();
        let (a, arrow_a) = entities(&mut world);
        let (b, arrow_b) = entities(&mut world);
        let mut arena = IndicatorArena::new();

        let old = arena.insert(a, arrow_a, IndicatorState::default()).unwrap();
        assert!(arena.remove(old).is_some());
        let new = arena.insert(b, arrow_b, IndicatorState::default()).unwrap();

        assert_eq!(old.index(), new.index());
        assert_ne!(old.generation(), new.generation());
        assert!(arena.get(old).is_none());
        assert!(arena.remove(old).is_none());
        assert_eq!(arena.get(new).unwrap().target, b);
    }

    #[test]
    fn test_remove_target() {
        let mut world = World::new();
        let (target, arrow) = entities(&mut world);
        let mut arena = IndicatorArena::new();
        arena.insert(target, arrow, IndicatorState::default()).unwrap();

        let slot = arena.remove_target(target).unwrap();
        assert_eq!(slot.arrow, arrow);
        assert!(arena.is_empty());
        assert!(arena.remove_target(target).is_none());
    }

    #[test]
    fn test_multiple_targets_are_independent() {
        let mut world = World::new();
        let (a, arrow_a) = entities(&mut world);
        let (b, arrow_b) = entities(&mut world);
        let mut arena = IndicatorArena::new();
        arena.insert(a, arrow_a, IndicatorState::default()).unwrap();
        arena.insert(b, arrow_b, IndicatorState::default()).unwrap();

        for slot in arena.iter_mut() {
            if slot.target == a {
                slot.state.advance(0.5);
            }
        }
        let ha = arena.find(a).unwrap();
        let hb = arena.find(b).unwrap();
        assert!(arena.state(ha).unwrap().phase > 0.0);
        assert_eq!(arena.state(hb).unwrap().phase, 0.0);
        assert_eq!(arena.iter().count(), 2);
    }

    #[test]
    fn test_error_messages() {
        let mut world = World::new();
        let e = world.spawn_empty().id();
        let msg = IndicatorError::AlreadyAttached(e).to_string();
        assert!(msg.contains("already has an indicator"));
        let msg = IndicatorError::TargetNotFound(e).to_string();
        assert!(msg.contains("does not exist"));
    }
}
