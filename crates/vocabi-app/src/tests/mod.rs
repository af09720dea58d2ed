use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use vocabi_config::{Config, Settings};
use vocabi_core::{DictionaryLookup, DictionaryMetadata, LookupError, LookupResult};
use vocabi_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

use crate::state::AppState;

mod terminal;

/// In-memory dictionary keyed by query
pub struct StubDictionary {
    entries: HashMap<String, Result<LookupResult, LookupError>>,
}

impl StubDictionary {
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            "run".to_string(),
            Ok(LookupResult {
                word: "run".to_string(),
                definitions: vec!["move fast".to_string(), "operate".to_string()],
            }),
        );
        entries.insert(
            "echo".to_string(),
            Ok(LookupResult {
                word: "echo".to_string(),
                definitions: vec!["Couldn't find that meaning!".to_string()],
            }),
        );
        entries.insert("zzzznotaword".to_string(), Err(LookupError::Empty));
        entries.insert(
            "offline".to_string(),
            Err(LookupError::Network("connection refused".to_string())),
        );
        Self { entries }
    }
}

#[async_trait::async_trait]
impl DictionaryLookup for StubDictionary {
    async fn lookup(&self, query: &str) -> Result<LookupResult, LookupError> {
        self.entries
            .get(query.trim())
            .cloned()
            .unwrap_or_else(|| Err(LookupError::NotFound {
                query: query.to_string(),
                message: "No Definitions Found".to_string(),
            }))
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "stub".to_string(),
            language: "en".to_string(),
            endpoint: "memory".to_string(),
        }
    }
}

/// Prefixes text with the target code; German translation of "operate" fails
pub struct TagTranslator;

#[async_trait::async_trait]
impl Translator for TagTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        if text.contains("operate") && to == "de" {
            return Err(TranslateError::ApiError("HTTP 500".to_string()));
        }
        Ok(Translation {
            text: format!("[{to}] {text}"),
            from,
            to,
            provider: "tag".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "tag".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

pub fn test_state(settings_path: &Path, translator: Option<Arc<dyn Translator>>) -> Arc<AppState> {
    let config = Config {
        settings_path: settings_path.to_path_buf(),
        ..Config::default()
    };
    Arc::new(AppState::new(
        config,
        Settings::default(),
        Arc::new(StubDictionary::new()),
        translator,
    ))
}
