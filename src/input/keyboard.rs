use macroquad::prelude::is_key_down;

use crate::input::bindings::KeyBindings;
use crate::input::key_state::KeyState;
use crate::model::{NOTE_COUNT, Note};

/// Keyboard input handler using macroquad.
pub struct KeyboardInput;

impl KeyboardInput {
    /// Create a new keyboard input handler.
    pub fn new() -> Self {
        Self
    }

    /// Update note states based on the current keyboard state.
    /// Returns the notes that had state changes this frame (note, pressed).
    pub fn update(
        &self,
        bindings: &KeyBindings,
        states: &mut [KeyState; NOTE_COUNT],
    ) -> Vec<(Note, bool)> {
        let mut changes = Vec::new();

        for binding in bindings.entries() {
            let is_pressed = is_key_down(binding.key);
            let state = &mut states[binding.note.index()];

            if is_pressed && !state.pressed {
                state.on_press();
                changes.push((binding.note, true));
            } else if !is_pressed && state.pressed {
                state.on_release();
                changes.push((binding.note, false));
            }
        }

        changes
    }
}

impl Default for KeyboardInput {
    fn default() -> Self {
        Self::new()
    }
}
