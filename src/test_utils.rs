//! Test utilities shared by unit and integration tests.

use std::path::Path;

use anyhow::Result;

use crate::traits::audio::{AudioBackend, SoundId};

/// Mock audio backend recording play requests.
#[derive(Default)]
pub struct MockAudio {
    next_id: u64,
    /// Raw SoundId values in play order.
    pub played: Vec<u64>,
}

impl MockAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play_count(&self) -> usize {
        self.played.len()
    }
}

impl AudioBackend for MockAudio {
    fn load_sound(&mut self, _path: &Path) -> Result<SoundId> {
        self.next_id += 1;
        Ok(SoundId(self.next_id))
    }

    fn play(&mut self, id: SoundId) -> Result<()> {
        self.played.push(id.0);
        Ok(())
    }

    fn set_volume(&mut self, _volume: f32) -> Result<()> {
        Ok(())
    }
}
