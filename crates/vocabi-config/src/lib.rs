use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::translator::TranslatorConfig;
use self::ui::UiConfig;

pub mod dictionary;
pub mod settings;
pub mod translator;
pub mod ui;

pub use settings::{Settings, SettingsError};

#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub translator: TranslatorConfig,
    pub ui: UiConfig,

    /// Where user settings are persisted
    pub settings_path: PathBuf,
}

impl Config {
    pub fn new() -> Self {
        let settings_path = env::var("VOCABI_SETTINGS")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("settings.json"));

        Config {
            dictionary: DictionaryConfig::new(),
            translator: TranslatorConfig::new(),
            ui: UiConfig::default(),

            settings_path,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            translator: TranslatorConfig::default(),
            ui: UiConfig::default(),
            settings_path: PathBuf::from("settings.json"),
        }
    }
}
