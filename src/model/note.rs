use std::fmt;

/// Number of notes in one octave.
pub const NOTE_COUNT: usize = 12;

/// One of the 12 pitches in a single octave, identified by letter name and
/// optional sharp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Note {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

impl Note {
    /// All notes in chromatic order.
    pub const ALL: [Note; NOTE_COUNT] = [
        Note::C,
        Note::Cs,
        Note::D,
        Note::Ds,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
        Note::A,
        Note::As,
        Note::B,
    ];

    /// White keys in left-to-right keyboard order.
    pub const WHITE: [Note; 7] = [
        Note::C,
        Note::D,
        Note::E,
        Note::F,
        Note::G,
        Note::A,
        Note::B,
    ];

    /// Black keys in left-to-right keyboard order.
    pub const BLACK: [Note; 5] = [Note::Cs, Note::Ds, Note::Fs, Note::Gs, Note::As];

    /// Chromatic index (0 = C .. 11 = B).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Note for a chromatic index, if in range.
    pub fn from_index(index: usize) -> Option<Note> {
        Self::ALL.get(index).copied()
    }

    /// Display name ("C", "C#", ...).
    pub fn name(self) -> &'static str {
        match self {
            Note::C => "C",
            Note::Cs => "C#",
            Note::D => "D",
            Note::Ds => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::Fs => "F#",
            Note::G => "G",
            Note::Gs => "G#",
            Note::A => "A",
            Note::As => "A#",
            Note::B => "B",
        }
    }

    /// Whether this note is played on a white key.
    pub fn is_white(self) -> bool {
        matches!(self.index(), 0 | 2 | 4 | 5 | 7 | 9 | 11)
    }

    /// File name of the note's sample under the sample directory.
    pub fn sample_file_name(self) -> String {
        format!("{}.wav", self.name())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
