use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use serde::Deserialize;

/// User settings for the widget
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Master volume (0.0..=1.0)
    pub volume: f32,
    /// Directory holding the per-note WAV samples
    pub sample_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            volume: 0.5,
            sample_dir: PathBuf::from("sounds"),
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults when the file is
    /// absent or malformed.
    pub fn load() -> Self {
        Self::settings_path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    fn settings_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("com", "pianino", "pianino") {
            Ok(proj_dirs.config_dir().join("settings.json"))
        } else {
            Ok(PathBuf::from(".pianino-settings.json"))
        }
    }
}
