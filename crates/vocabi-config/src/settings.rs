use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use vocabi_types::{AppearanceMode, FontSpec};

fn default_language() -> String {
    "english".to_string()
}

/// User settings persisted to `settings.json`.
///
/// The file is always rewritten in full; nothing is merged with what is on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub selected_font: FontSpec,
    /// Last target language typed by the user, e.g. `english` or `fr`
    #[serde(default = "default_language")]
    pub language: String,
    pub appearance_mode: AppearanceMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            selected_font: FontSpec::default(),
            language: default_language(),
            appearance_mode: AppearanceMode::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid settings file: {0}")]
    Json(#[from] serde_json::Error),
}

impl Settings {
    /// Read settings from `path`
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Load settings, writing defaults first if the file does not exist.
    ///
    /// A corrupt file is left untouched and defaults are used for this session.
    pub fn load_or_create(path: &Path) -> Self {
        if !path.exists() {
            let settings = Self::default();
            match settings.save(path) {
                Ok(()) => tracing::info!("Created default settings at {}", path.display()),
                Err(e) => tracing::warn!("Failed to create {}: {e}", path.display()),
            }
            return settings;
        }

        match Self::load(path) {
            Ok(settings) => {
                tracing::debug!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = Settings::load_or_create(&path);

        assert_eq!(settings, Settings::default());
        assert!(path.exists());
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }

    #[test]
    fn defaults_match_first_run_values() {
        let settings = Settings::default();
        assert_eq!(settings.selected_font.to_string(), "Fixedsys 12");
        assert_eq!(settings.language, "english");
        assert_eq!(settings.appearance_mode, AppearanceMode::Dark);
    }

    #[test]
    fn reads_older_file_without_appearance_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"selected_font": "Consolas,14", "language": "french"}"#).unwrap();

        let settings = Settings::load_or_create(&path);

        assert_eq!(settings.selected_font, FontSpec::new("Consolas", 14).unwrap());
        assert_eq!(settings.language, "french");
        assert_eq!(settings.appearance_mode, AppearanceMode::Dark);
    }

    #[test]
    fn save_rewrites_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"language": "german", "stale_key": 1}"#).unwrap();

        let settings = Settings {
            selected_font: FontSpec::new("Arial", 12).unwrap(),
            language: "spanish".to_string(),
            appearance_mode: AppearanceMode::Light,
        };
        settings.save(&path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["selected_font"], "Arial 12");
        assert_eq!(raw["language"], "spanish");
        assert_eq!(raw["appearance_mode"], "Light");
        assert!(raw.get("stale_key").is_none());
    }

    #[test]
    fn corrupt_file_falls_back_without_overwriting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let settings = Settings::load_or_create(&path);

        assert_eq!(settings, Settings::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        Settings::default().save(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn repeated_save_and_load_keeps_font() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"selected_font": "Arial,14", "language": "english"}"#).unwrap();

        let first = Settings::load_or_create(&path);
        for _ in 0..3 {
            Settings::load(&path).unwrap().save(&path).unwrap();
        }

        let reloaded = Settings::load(&path).unwrap();
        assert_eq!(reloaded.selected_font, FontSpec::new("Arial", 14).unwrap());
        assert_eq!(reloaded, first);
    }
}
