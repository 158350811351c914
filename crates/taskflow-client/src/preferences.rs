/*
[INPUT]:  Preferences JSON file path, theme toggles from the view
[OUTPUT]: Persisted dark-mode flag
[POS]:    Persistence layer - local key-value preferences
[UPDATE]: When adding persisted preferences
*/

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Temporary file error: {0}")]
    TempFile(#[from] tempfile::PersistError),

    #[error("Preferences file is corrupt: {0}")]
    Corrupt(String),
}

type Result<T> = std::result::Result<T, PreferencesError>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct PreferenceData {
    #[serde(rename = "darkMode", default)]
    dark_mode: bool,
}

#[derive(Debug, Clone)]
pub struct Preferences {
    path: PathBuf,
    data: PreferenceData,
}

impl Preferences {
    /// `<data dir>/taskflow/preferences.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("taskflow").join("preferences.json"))
    }

    /// Read preferences; a missing file yields defaults
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                data: PreferenceData::default(),
            });
        }

        let contents = std::fs::read_to_string(&path)?;
        let data = serde_json::from_str(&contents)
            .map_err(|err| PreferencesError::Corrupt(err.to_string()))?;
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dark_mode(&self) -> bool {
        self.data.dark_mode
    }

    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<()> {
        self.data.dark_mode = enabled;
        self.save()
    }

    /// Flip the theme and return the new value
    pub fn toggle_dark_mode(&mut self) -> Result<bool> {
        let enabled = !self.data.dark_mode;
        self.set_dark_mode(enabled)?;
        Ok(enabled)
    }

    /// Write via a temp file in the same directory, then rename over the target
    fn save(&self) -> Result<()> {
        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut temp_file = NamedTempFile::new_in(parent)?;
        let json = serde_json::to_string_pretty(&self.data)?;
        temp_file.write_all(json.as_bytes())?;
        temp_file.flush()?;
        temp_file.persist(&self.path)?;

        tracing::debug!(path = %self.path.display(), dark_mode = self.data.dark_mode, "preferences saved");
        Ok(())
    }
}
