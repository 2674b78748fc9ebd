//! Input systems.
//!
//! [`update_input_state`] reads the keyboard from Raylib each frame and
//! writes the results into [`crate::resources::input::InputState`]. The
//! overlay toggle is emitted straight away as a
//! [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    for binding in input.bindings_mut() {
        binding.active = rl.is_key_down(binding.key_binding);
        binding.just_pressed = rl.is_key_pressed(binding.key_binding);
        binding.just_released = rl.is_key_released(binding.key_binding);
    }

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
