//! Keyboard input handling.
//!
//! This module provides:
//! - [`KeyBindings`]: the fixed physical-key to note table
//! - [`KeyState`]: per-note press state with frame-edge flags
//! - [`KeyboardInput`]: macroquad keyboard polling

mod bindings;
mod key_state;
mod keyboard;

pub use bindings::{Binding, KeyBindings};
pub use key_state::KeyState;
pub use keyboard::KeyboardInput;
