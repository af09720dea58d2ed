use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api-free.deepl.com/v2/translate".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Enabled whenever an API key is present
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl TranslatorConfig {
    pub fn new() -> Self {
        let api_key = env::var("DEEPL_API_KEY").unwrap_or_default();
        let api_url = env::var("DEEPL_API_URL").unwrap_or_else(|_| default_api_url());

        Self {
            enabled: !api_key.is_empty(),
            api_key,
            api_url,
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: String::new(),
            api_url: default_api_url(),
        }
    }
}
