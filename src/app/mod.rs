//! Application layer.
//!
//! This module provides:
//! - [`NoteDispatcher`]: press/release to playback and visual-state dispatch
//! - [`PianoApp`]: per-frame wiring of input, dispatch, and drawing

mod dispatcher;
mod piano;

pub use dispatcher::NoteDispatcher;
pub use piano::PianoApp;
