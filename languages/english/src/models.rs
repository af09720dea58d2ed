//! Response shapes of `api.dictionaryapi.dev`.
//!
//! Only the fields the extractor walks are declared; every declared field is
//! required, so a response missing one fails to parse as a whole.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ApiEntry {
    pub word: String,
    pub meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
pub struct ApiMeaning {
    pub definitions: Vec<ApiDefinition>,
}

#[derive(Debug, Deserialize)]
pub struct ApiDefinition {
    pub definition: String,
}

/// Body sent with a 404
#[derive(Debug, Deserialize)]
pub struct ApiNotFound {
    pub title: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiNotFound {
    pub fn describe(&self) -> String {
        match &self.message {
            Some(message) => format!("{}: {}", self.title, message),
            None => self.title.clone(),
        }
    }
}
