//! Keyboard rendering.
//!
//! This module provides:
//! - [`KeyboardLayout`]: key geometry and mouse hit testing
//! - [`KeyboardView`]: immediate-mode drawing with macroquad

mod layout;
mod view;

pub use layout::{KeyRect, KeyboardLayout};
pub use view::KeyboardView;
