//! Audio subsystem using kira.
//!
//! This module provides:
//! - [`AudioDriver`]: One-shot sample playback with kira
//! - [`NullAudio`]: Fallback backend when no audio device is available
//! - [`SampleBank`]: Note to loaded-sample mapping with degradation for
//!   missing files

mod driver;
mod null;
mod sample_bank;

pub use driver::AudioDriver;
pub use null::NullAudio;
pub use sample_bank::SampleBank;
