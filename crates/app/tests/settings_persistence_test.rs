//! Integration tests for settings persistence.
//!
//! These verify that the search-form preferences written on one run come
//! back identically on the next, using the real file-based repository.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use curio_domain::{SortOrder, UserSettings};
use curio_infrastructure::SettingsRepository;
use tempfile::tempdir;

#[tokio::test]
async fn first_run_loads_defaults() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let repo = SettingsRepository::with_config_dir(temp_dir.path().join("curio"));

    let settings = repo.load().await.expect("Failed to load settings");
    assert_eq!(settings, UserSettings::default());
}

#[tokio::test]
async fn settings_survive_a_restart() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_dir = temp_dir.path().join("curio");

    let settings = UserSettings {
        classification: "Glass-Stained".to_string(),
        has_images: false,
        sort_order: SortOrder::Descending,
    };

    // First run writes the settings.
    let repo = SettingsRepository::with_config_dir(config_dir.clone());
    repo.save(&settings).await.expect("Failed to save settings");
    assert!(config_dir.join("settings.json").exists());

    // A fresh repository instance sees the same values.
    let repo = SettingsRepository::with_config_dir(config_dir);
    let loaded = repo.load().await.expect("Failed to load settings");
    assert_eq!(loaded, settings);
}

#[tokio::test]
async fn saving_twice_keeps_the_latest_values() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let repo = SettingsRepository::with_config_dir(temp_dir.path().join("curio"));

    let mut settings = UserSettings::default();
    repo.save(&settings).await.expect("Failed to save settings");

    settings.classification = "Netsuke".to_string();
    settings.sort_order = SortOrder::Descending;
    repo.save(&settings).await.expect("Failed to save settings");

    let loaded = repo.load().await.expect("Failed to load settings");
    assert_eq!(loaded, settings);
}
