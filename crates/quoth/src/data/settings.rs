//! Application settings management
//!
//! User preferences persisted across sessions.

use crate::config::sync::{DEFAULT_INTERVAL_SECS, DEFAULT_SERVER};
use crate::data::storage;
use crate::error::Result;
use crate::select::ALL_CATEGORIES;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings data file name
pub const SETTINGS_FILE: &str = "settings.json";

/// Settings file format version for migrations
const SETTINGS_VERSION: u32 = 1;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// File format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Last selected category filter ("all" selects everything)
    #[serde(default = "default_category")]
    pub selected_category: String,

    /// Base URL of the sync server
    #[serde(default = "default_server")]
    pub sync_server: String,

    /// Seconds between periodic sync cycles
    #[serde(default = "default_interval")]
    pub sync_interval_secs: u64,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

fn default_server() -> String {
    DEFAULT_SERVER.to_string()
}

fn default_interval() -> u64 {
    DEFAULT_INTERVAL_SECS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            selected_category: default_category(),
            sync_server: default_server(),
            sync_interval_secs: default_interval(),
        }
    }
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a specific path
    ///
    /// Absence or parse failure falls back to defaults; the failure is
    /// logged, never surfaced.
    pub fn load_from(path: &Path) -> Self {
        match storage::load_from::<Settings>(path) {
            Ok(Some(settings)) => settings,
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("failed to load settings, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Save settings to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        storage::save_to(path, self)
    }

    /// Set the persisted category filter
    pub fn set_selected_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::fs;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path() -> std::path::PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("quoth_settings_test_{}.json", id))
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.selected_category, "all");
        assert_eq!(settings.sync_server, DEFAULT_SERVER);
        assert_eq!(settings.sync_interval_secs, 20);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load_from(&temp_path());
        assert_eq!(settings.selected_category, "all");
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let path = temp_path();
        fs::write(&path, "not json").unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.selected_category, "all");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_selected_category_persists() {
        let path = temp_path();

        {
            let mut settings = Settings::new();
            settings.set_selected_category("Wisdom");
            settings.save_to(&path).unwrap();
        }

        {
            let settings = Settings::load_from(&path);
            assert_eq!(settings.selected_category, "Wisdom");
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_path();
        fs::write(&path, r#"{"selected_category": "Motivation"}"#).unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.selected_category, "Motivation");
        assert_eq!(settings.version, SETTINGS_VERSION);
        assert_eq!(settings.sync_server, DEFAULT_SERVER);

        let _ = fs::remove_file(&path);
    }
}
