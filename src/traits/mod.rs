//! Trait seams between subsystems.

pub mod audio;
