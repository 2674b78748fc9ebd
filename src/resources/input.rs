//! Per-frame keyboard input resource.
//!
//! Captures the keys the debugger demo reacts to and exposes them to systems
//! via the [`InputState`] resource. Arrow keys cycle the selection, Backspace
//! deselects, `R` refreshes the selected snapshot, `C` clears the registry
//! and F11 toggles the registry overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// Resource capturing the per-frame keyboard state relevant to the debugger.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub select_next: BoolState,
    pub select_previous: BoolState,
    pub deselect: BoolState,
    pub refresh_selected: BoolState,
    pub clear_registry: BoolState,
    pub mode_debug: BoolState,
}

impl InputState {
    /// Mutable access to every binding, for polling loops.
    pub fn bindings_mut(&mut self) -> [&mut BoolState; 6] {
        [
            &mut self.select_next,
            &mut self.select_previous,
            &mut self.deselect,
            &mut self.refresh_selected,
            &mut self.clear_registry,
            &mut self.mode_debug,
        ]
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            select_next: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            select_previous: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            deselect: BoolState::bound_to(KeyboardKey::KEY_BACKSPACE),
            refresh_selected: BoolState::bound_to(KeyboardKey::KEY_R),
            clear_registry: BoolState::bound_to(KeyboardKey::KEY_C),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.select_next.key_binding, KeyboardKey::KEY_RIGHT);
        assert_eq!(input.select_previous.key_binding, KeyboardKey::KEY_LEFT);
        assert_eq!(input.deselect.key_binding, KeyboardKey::KEY_BACKSPACE);
        assert_eq!(input.refresh_selected.key_binding, KeyboardKey::KEY_R);
        assert_eq!(input.clear_registry.key_binding, KeyboardKey::KEY_C);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
    }

    #[test]
    fn test_inputstate_default_all_inactive() {
        let mut input = InputState::default();
        for b in input.bindings_mut() {
            assert!(!b.active);
            assert!(!b.just_pressed);
        }
    }
}
