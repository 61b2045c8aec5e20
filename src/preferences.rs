//! Persisted language preference collaborator

use crate::error::{I18nError, I18nResult};
use crate::locale::LanguageTag;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Persistence for the chosen language across restarts.
///
/// The manager reads a saved preference at startup and writes one on every
/// language switch; the storage format belongs to the implementation.
pub trait PreferenceStore: Send + Sync {
    /// The previously saved language, if any.
    fn load_saved_language(&self) -> Option<LanguageTag>;

    /// Persist the chosen language.
    fn save_language(&self, tag: &LanguageTag) -> I18nResult<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct PreferenceFile {
    language: String,
}

/// Stores the preference as a single TOML file: `language = "…"`.
///
/// A missing or unreadable file means "no saved preference", not an error.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the preference file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load_saved_language(&self) -> Option<LanguageTag> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => {
                debug!(path = ?self.path, "no saved language preference");
                return None;
            }
        };

        match toml::from_str::<PreferenceFile>(&content) {
            Ok(file) => Some(LanguageTag::new(file.language)),
            Err(e) => {
                warn!(path = ?self.path, error = %e, "ignoring malformed preference file");
                None
            }
        }
    }

    fn save_language(&self, tag: &LanguageTag) -> I18nResult<()> {
        let file = PreferenceFile {
            language: tag.as_str().to_string(),
        };
        let content = toml::to_string(&file)?;

        fs::write(&self.path, content).map_err(|source| I18nError::PreferenceSave {
            path: self.path.to_string_lossy().to_string(),
            source,
        })?;

        debug!(path = ?self.path, %tag, "saved language preference");
        Ok(())
    }
}
