use anyhow::Result;

/// Handle for referencing loaded sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundId(pub u64);

/// Abstraction over audio backends.
/// Implementations: AudioDriver (kira), NullAudio (no device), mocks in tests.
pub trait AudioBackend {
    fn load_sound(&mut self, path: &std::path::Path) -> Result<SoundId>;

    /// Start one-shot playback of a loaded sound and return immediately.
    /// Overlapping plays of the same sound stack as independent instances.
    fn play(&mut self, id: SoundId) -> Result<()>;

    /// Set master volume (0.0..=1.0).
    fn set_volume(&mut self, volume: f32) -> Result<()>;
}
