use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use kira::AudioManager as KiraAudioManager;
use kira::sound::static_sound::StaticSoundData;
use kira::{AudioManagerSettings, Decibels, Tween};

use crate::traits::audio::{AudioBackend, SoundId};

/// Audio driver backed by kira for low-latency one-shot playback.
///
/// Playback is fire-and-forget: handles returned by kira are dropped
/// immediately, so each play spawns an independent instance that runs to
/// completion on kira's mixer thread.
pub struct AudioDriver {
    manager: KiraAudioManager,
    /// Loaded sound data keyed by SoundId.
    sounds: HashMap<u64, StaticSoundData>,
    /// Next sound ID to assign.
    next_id: u64,
}

impl AudioDriver {
    /// Create a new audio driver on the default output device.
    pub fn new() -> Result<Self> {
        let manager = KiraAudioManager::new(AudioManagerSettings::default())
            .context("Failed to create audio manager")?;
        Ok(Self {
            manager,
            sounds: HashMap::new(),
            next_id: 1,
        })
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl AudioBackend for AudioDriver {
    fn load_sound(&mut self, path: &Path) -> Result<SoundId> {
        let data = StaticSoundData::from_file(path)
            .map_err(|e| anyhow!("Failed to load sound {}: {e}", path.display()))?;
        let id = self.alloc_id();
        self.sounds.insert(id, data);
        Ok(SoundId(id))
    }

    fn play(&mut self, id: SoundId) -> Result<()> {
        let data = self
            .sounds
            .get(&id.0)
            .ok_or_else(|| anyhow!("Sound not found: {:?}", id))?
            .clone();
        self.manager
            .play(data)
            .map_err(|e| anyhow!("Failed to play sound: {e}"))?;
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) -> Result<()> {
        let db = if volume <= 0.0 {
            Decibels::SILENCE
        } else {
            Decibels(20.0 * volume.clamp(0.0, 1.0).log10())
        };
        self.manager.main_track().set_volume(db, Tween::default());
        Ok(())
    }
}
