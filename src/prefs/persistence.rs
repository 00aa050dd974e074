//! Preference persistence module
//!
//! Stores the theme and accent color as two independent optional keys in
//! a TOML file under the user config directory. Either key may be absent
//! or hold an unrecognized value; both cases fall back to the default for
//! that key alone.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::Preferences;
use crate::{FolioError, Result, APP_NAME, PREFS_FILE};

/// Preference file storage
#[derive(Debug)]
pub struct PreferenceStorage {
    prefs_path: PathBuf,
}

/// On-disk layout: two independent scalar entries holding the literal
/// enum member names
#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceFile {
    theme: Option<String>,
    accent: Option<String>,
}

impl PreferenceStorage {
    /// Create storage over the standard preferences file location
    pub fn new() -> Result<Self> {
        let prefs_path = Self::prefs_file_path()?;
        Ok(Self { prefs_path })
    }

    /// Create storage over an explicit file path (used by tests)
    pub fn with_path(prefs_path: PathBuf) -> Self {
        Self { prefs_path }
    }

    /// Get the standard preferences file path
    /// Uses $CONFIG_HOME/folio/preferences.toml or the platform equivalent
    pub fn prefs_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            FolioError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(PREFS_FILE))
    }

    /// Load persisted preferences. A missing file, a malformed file, or a
    /// malformed entry never fails; each key independently falls back to
    /// its default.
    pub fn load(&self) -> Preferences {
        let file = fs::read_to_string(&self.prefs_path)
            .ok()
            .and_then(|content| toml::from_str::<PreferenceFile>(&content).ok())
            .unwrap_or_default();

        Preferences {
            theme: file
                .theme
                .and_then(|value| value.parse().ok())
                .unwrap_or_default(),
            accent: file
                .accent
                .and_then(|value| value.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// Write both entries synchronously
    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.prefs_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                FolioError::PersistenceError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let file = PreferenceFile {
            theme: Some(prefs.theme.as_str().to_string()),
            accent: Some(prefs.accent.as_str().to_string()),
        };

        let content = toml::to_string_pretty(&file).map_err(|e| {
            FolioError::PersistenceError(format!("Failed to serialize preferences: {}", e))
        })?;

        fs::write(&self.prefs_path, content).map_err(|e| {
            FolioError::PersistenceError(format!(
                "Failed to write preferences file {}: {}",
                self.prefs_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the preferences file path for external access
    pub fn path(&self) -> &PathBuf {
        &self.prefs_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{AccentColor, Theme};
    use tempfile::TempDir;

    fn storage_in(dir: &TempDir) -> PreferenceStorage {
        PreferenceStorage::with_path(dir.path().join("preferences.toml"))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let prefs = storage_in(&dir).load();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.accent, AccentColor::Cyan);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        let prefs = Preferences {
            theme: Theme::Light,
            accent: AccentColor::Purple,
        };
        storage.save(&prefs).unwrap();
        assert_eq!(storage.load(), prefs);
    }

    #[test]
    fn test_entries_are_independent() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        // Only one of the two keys present
        fs::write(storage.path(), "accent = \"blue\"\n").unwrap();
        let prefs = storage.load();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.accent, AccentColor::Blue);

        fs::write(storage.path(), "theme = \"light\"\n").unwrap();
        let prefs = storage.load();
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.accent, AccentColor::Cyan);
    }

    #[test]
    fn test_malformed_value_falls_back_per_key() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        fs::write(storage.path(), "theme = \"solarized\"\naccent = \"purple\"\n").unwrap();
        let prefs = storage.load();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.accent, AccentColor::Purple);
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        fs::write(storage.path(), "not valid toml [[[").unwrap();
        assert_eq!(storage.load(), Preferences::default());
    }

    #[test]
    fn test_saved_file_holds_literal_names() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        storage
            .save(&Preferences {
                theme: Theme::Dark,
                accent: AccentColor::Blue,
            })
            .unwrap();

        let content = fs::read_to_string(storage.path()).unwrap();
        assert!(content.contains("theme = \"dark\""));
        assert!(content.contains("accent = \"blue\""));
    }

    #[test]
    fn test_prefs_file_path() {
        let path = PreferenceStorage::prefs_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("folio"));
        assert!(path.to_string_lossy().contains("preferences.toml"));
    }
}
