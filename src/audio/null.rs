use std::path::Path;

use anyhow::Result;

use crate::traits::audio::{AudioBackend, SoundId};

/// Backend used when no audio device is available.
/// Loads succeed and plays are no-ops, so the keyboard stays usable
/// visually.
pub struct NullAudio {
    next_id: u64,
}

impl NullAudio {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }
}

impl Default for NullAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioBackend for NullAudio {
    fn load_sound(&mut self, _path: &Path) -> Result<SoundId> {
        let id = self.next_id;
        self.next_id += 1;
        Ok(SoundId(id))
    }

    fn play(&mut self, _id: SoundId) -> Result<()> {
        Ok(())
    }

    fn set_volume(&mut self, _volume: f32) -> Result<()> {
        Ok(())
    }
}
