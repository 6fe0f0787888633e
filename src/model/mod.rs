//! Core data model.
//!
//! This module provides:
//! - [`Note`]: the 12-pitch single-octave enumeration
//! - [`KeyVisual`]: press/idle visual state of an on-screen key

mod key_visual;
mod note;

pub use key_visual::KeyVisual;
pub use note::{NOTE_COUNT, Note};
