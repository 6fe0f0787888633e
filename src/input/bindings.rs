use macroquad::prelude::KeyCode;

use crate::model::{NOTE_COUNT, Note};

/// One physical-key to note association.
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub key: KeyCode,
    /// Character drawn on the on-screen key.
    pub label: char,
    pub note: Note,
}

/// The fixed keyboard mapping, shared by press and release handling.
/// Home row plays the white keys, the QWERTY row above plays the black keys.
pub struct KeyBindings {
    entries: [Binding; NOTE_COUNT],
}

impl KeyBindings {
    pub fn new() -> Self {
        let b = |key, label, note| Binding { key, label, note };
        Self {
            entries: [
                b(KeyCode::A, 'A', Note::C),
                b(KeyCode::S, 'S', Note::D),
                b(KeyCode::D, 'D', Note::E),
                b(KeyCode::F, 'F', Note::F),
                b(KeyCode::G, 'G', Note::G),
                b(KeyCode::H, 'H', Note::A),
                b(KeyCode::J, 'J', Note::B),
                b(KeyCode::W, 'W', Note::Cs),
                b(KeyCode::E, 'E', Note::Ds),
                b(KeyCode::T, 'T', Note::Fs),
                b(KeyCode::Y, 'Y', Note::Gs),
                b(KeyCode::U, 'U', Note::As),
            ],
        }
    }

    /// Resolve a physical key to its note. Unbound keys return None.
    pub fn note_for(&self, key: KeyCode) -> Option<Note> {
        self.entries.iter().find(|b| b.key == key).map(|b| b.note)
    }

    /// Label of the physical key bound to a note.
    pub fn label_for(&self, note: Note) -> Option<char> {
        self.entries
            .iter()
            .find(|b| b.note == note)
            .map(|b| b.label)
    }

    pub fn entries(&self) -> &[Binding; NOTE_COUNT] {
        &self.entries
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}
