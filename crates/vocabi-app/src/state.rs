use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use vocabi_config::{Config, Settings};
use vocabi_core::DictionaryLookup;
use vocabi_lang_english::{DeepLTranslator, FreeDictionaryClient};
use vocabi_translator::Translator;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub settings: Arc<RwLock<Settings>>,
    pub dictionary: Arc<dyn DictionaryLookup>,
    pub translator: Option<Arc<dyn Translator>>,
}

impl AppState {
    pub fn new(
        config: Config,
        settings: Settings,
        dictionary: Arc<dyn DictionaryLookup>,
        translator: Option<Arc<dyn Translator>>,
    ) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            settings: Arc::new(RwLock::new(settings)),
            dictionary,
            translator,
        }
    }

    /// Build the HTTP providers described by `config`
    pub fn from_config(config: Config, settings: Settings) -> anyhow::Result<Self> {
        let dictionary = FreeDictionaryClient::new(
            config.dictionary.api_url.clone(),
            config.dictionary.source_lang.clone(),
            Duration::from_secs(config.dictionary.timeout_secs),
        )?;

        let translator: Option<Arc<dyn Translator>> =
            if config.translator.enabled && !config.translator.api_key.is_empty() {
                Some(Arc::new(DeepLTranslator::new(
                    config.translator.api_key.clone(),
                    config.translator.api_url.clone(),
                )))
            } else {
                tracing::info!("Translator disabled, only source-language output is available");
                None
            };

        Ok(Self::new(config, settings, Arc::new(dictionary), translator))
    }

    /// Rewrite the settings file from the in-memory settings
    pub async fn save_settings(&self) {
        let path = self.config.read().await.settings_path.clone();
        let settings = self.settings.read().await;
        match settings.save(&path) {
            Ok(()) => tracing::debug!("Saved settings to {}", path.display()),
            Err(e) => tracing::warn!("Failed to save settings to {}: {e}", path.display()),
        }
    }
}
