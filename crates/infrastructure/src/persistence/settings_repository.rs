//! User settings persistence.
//!
//! Stores the search-form preferences in the platform-specific config
//! directory:
//! - Linux/macOS: ~/.config/curio/settings.json
//! - Windows: %APPDATA%/curio/settings.json

use std::path::PathBuf;

use curio_domain::UserSettings;
use tokio::fs;

use crate::serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// Could not determine config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Repository for user settings persistence.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    config_dir: Option<PathBuf>,
}

impl SettingsRepository {
    /// Creates a repository rooted at the platform config directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: dirs::config_dir().map(|p| p.join("curio")),
        }
    }

    /// Creates a repository rooted at an explicit directory.
    #[must_use]
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self {
            config_dir: Some(config_dir),
        }
    }

    fn settings_path(&self) -> Option<PathBuf> {
        self.config_dir.as_ref().map(|p| p.join("settings.json"))
    }

    /// Loads settings from disk.
    ///
    /// Returns default settings if no file exists yet or the config
    /// directory cannot be determined.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    pub async fn load(&self) -> Result<UserSettings, SettingsError> {
        let Some(path) = self.settings_path() else {
            return Ok(UserSettings::default());
        };

        if !path.exists() {
            return Ok(UserSettings::default());
        }

        let content = fs::read(&path).await?;
        let settings = from_json_bytes(&content)?;
        Ok(settings)
    }

    /// Saves settings to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory is unavailable or the file
    /// cannot be written.
    pub async fn save(&self, settings: &UserSettings) -> Result<(), SettingsError> {
        let Some(config_dir) = self.config_dir.as_ref() else {
            return Err(SettingsError::NoConfigDir);
        };
        let Some(path) = self.settings_path() else {
            return Err(SettingsError::NoConfigDir);
        };

        fs::create_dir_all(config_dir).await?;

        let content = to_json_stable_bytes(settings)?;
        fs::write(&path, content).await?;

        Ok(())
    }
}

impl Default for SettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use curio_domain::SortOrder;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let repo = SettingsRepository::with_config_dir(dir.path().join("curio"));

        let settings = repo.load().await.unwrap();
        assert_eq!(settings, UserSettings::default());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let repo = SettingsRepository::with_config_dir(dir.path().join("curio"));

        let settings = UserSettings {
            classification: "Netsuke".to_string(),
            has_images: false,
            sort_order: SortOrder::Descending,
        };
        repo.save(&settings).await.unwrap();

        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let config_dir = dir.path().join("curio");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("settings.json"), b"{broken").unwrap();

        let repo = SettingsRepository::with_config_dir(config_dir);
        let result = repo.load().await;
        assert!(matches!(result, Err(SettingsError::Serialization(_))));
    }
}
