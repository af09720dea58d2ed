use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries".to_string()
}

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Base URL; requests go to `{api_url}/{source_lang}/{query}`
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let api_url = env::var("VOCABI_API_URL").unwrap_or_else(|_| default_api_url());

        let source_lang = env::var("VOCABI_SOURCE_LANG").unwrap_or_else(|_| default_source_lang());

        let timeout_secs = env::var("VOCABI_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_secs);

        Self {
            api_url,
            source_lang,
            timeout_secs,
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            source_lang: default_source_lang(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
