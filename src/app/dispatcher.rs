use log::warn;

use crate::audio::SampleBank;
use crate::model::{KeyVisual, NOTE_COUNT, Note};
use crate::traits::audio::AudioBackend;

/// Translates resolved note presses and releases into playback and visual
/// state changes. Notes are independent; there is no state beyond the
/// two-variant visual per key.
pub struct NoteDispatcher<A: AudioBackend> {
    samples: SampleBank<A>,
    visuals: [KeyVisual; NOTE_COUNT],
}

impl<A: AudioBackend> NoteDispatcher<A> {
    /// Create a dispatcher over an already-loaded sample bank.
    pub fn new(samples: SampleBank<A>) -> Self {
        Self {
            samples,
            visuals: [KeyVisual::Idle; NOTE_COUNT],
        }
    }

    /// Handle a press: fire-and-forget playback of the note's sample and
    /// highlight its key. Notes without a loaded sample change visual only.
    pub fn on_press(&mut self, note: Note) {
        if let Err(e) = self.samples.play(note) {
            warn!("Playback failed for {note}: {e}");
        }
        self.visuals[note.index()] = KeyVisual::Pressed;
    }

    /// Handle a release: revert the key's visual. Playback is one-shot and
    /// unaffected. No-op for notes that were never pressed.
    pub fn on_release(&mut self, note: Note) {
        self.visuals[note.index()] = KeyVisual::Idle;
    }

    /// Current visual state of a note's key.
    pub fn visual(&self, note: Note) -> KeyVisual {
        self.visuals[note.index()]
    }

    /// Visual states for all notes, indexed by Note::index().
    pub fn visuals(&self) -> &[KeyVisual; NOTE_COUNT] {
        &self.visuals
    }

    /// Get a reference to the sample bank.
    pub fn samples(&self) -> &SampleBank<A> {
        &self.samples
    }
}
