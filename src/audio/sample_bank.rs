use std::path::Path;

use anyhow::Result;
use log::{info, warn};

use crate::model::{NOTE_COUNT, Note};
use crate::traits::audio::{AudioBackend, SoundId};

/// Maps each note to its loaded sample.
/// Wraps an AudioBackend; notes whose sample file is missing or unreadable
/// degrade to silent no-ops.
pub struct SampleBank<A: AudioBackend> {
    backend: A,
    samples: [Option<SoundId>; NOTE_COUNT],
}

impl<A: AudioBackend> SampleBank<A> {
    /// Create a new SampleBank wrapping the given backend.
    pub fn new(backend: A) -> Self {
        Self {
            backend,
            samples: [None; NOTE_COUNT],
        }
    }

    /// Load the sample for every note from `dir` by the fixed naming
    /// convention ("C.wav", "C#.wav", ...). Missing or unreadable files are
    /// non-fatal; the note simply has no playable sample afterwards.
    /// Returns the number of samples loaded.
    pub fn load_all(&mut self, dir: &Path) -> usize {
        let mut loaded = 0;
        for note in Note::ALL {
            let path = dir.join(note.sample_file_name());
            if !path.exists() {
                warn!("No sample for {note}: {} not found", path.display());
                continue;
            }
            match self.backend.load_sound(&path) {
                Ok(id) => {
                    self.samples[note.index()] = Some(id);
                    loaded += 1;
                }
                Err(e) => warn!("Failed to load sample for {note}: {e}"),
            }
        }
        info!("Loaded {loaded}/{NOTE_COUNT} samples from {}", dir.display());
        loaded
    }

    /// Whether a sample was loaded for the note.
    pub fn has_sample(&self, note: Note) -> bool {
        self.samples[note.index()].is_some()
    }

    /// Fire one-shot playback of the note's sample.
    /// No-op for notes without a loaded sample.
    pub fn play(&mut self, note: Note) -> Result<()> {
        match self.samples[note.index()] {
            Some(id) => self.backend.play(id),
            None => Ok(()),
        }
    }

    /// Set master volume (0.0..=1.0) on the backend.
    pub fn set_volume(&mut self, volume: f32) -> Result<()> {
        self.backend.set_volume(volume)
    }

    /// Get a reference to the underlying backend.
    pub fn backend(&self) -> &A {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use crate::test_utils::MockAudio;

    fn sample_dir(notes: &[Note]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for note in notes {
            fs::write(dir.path().join(note.sample_file_name()), b"RIFF").unwrap();
        }
        dir
    }

    #[test]
    fn loads_every_present_sample() {
        let dir = sample_dir(&Note::ALL);
        let mut bank = SampleBank::new(MockAudio::new());
        assert_eq!(bank.load_all(dir.path()), NOTE_COUNT);
        for note in Note::ALL {
            assert!(bank.has_sample(note));
        }
    }

    #[test]
    fn missing_files_degrade_silently() {
        let dir = sample_dir(&[Note::C, Note::E]);
        let mut bank = SampleBank::new(MockAudio::new());
        assert_eq!(bank.load_all(dir.path()), 2);
        assert!(bank.has_sample(Note::C));
        assert!(!bank.has_sample(Note::D));

        bank.play(Note::D).unwrap();
        assert!(bank.backend().played.is_empty());
    }

    #[test]
    fn play_routes_to_the_notes_sample() {
        let dir = sample_dir(&[Note::C, Note::Cs]);
        let mut bank = SampleBank::new(MockAudio::new());
        bank.load_all(dir.path());

        bank.play(Note::C).unwrap();
        bank.play(Note::Cs).unwrap();
        bank.play(Note::C).unwrap();
        assert_eq!(bank.backend().play_count(), 3);
        assert_eq!(bank.backend().played[0], bank.backend().played[2]);
        assert_ne!(bank.backend().played[0], bank.backend().played[1]);
    }
}
