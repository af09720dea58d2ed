use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use vocabi_core::preprocess::{DefaultPreprocessor, Preprocessor};
use vocabi_core::{DictionaryLookup, DictionaryMetadata, LookupError, LookupResult};

use crate::extract::extract_definitions;
use crate::models::ApiNotFound;

/// Client for the Free Dictionary API (`api.dictionaryapi.dev`)
#[derive(Clone)]
pub struct FreeDictionaryClient {
    client: reqwest::Client,
    api_url: String,
    language: String,
}

impl FreeDictionaryClient {
    pub fn new(
        api_url: String,
        language: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_url,
            language,
        })
    }

    /// `{api_url}/{language}/{query}` with the query as one encoded path segment
    pub fn entry_url(&self, query: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.api_url).map_err(|e| {
            LookupError::Network(format!("invalid API URL '{}': {e}", self.api_url))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                LookupError::Network(format!("API URL '{}' cannot take a path", self.api_url))
            })?
            .pop_if_empty()
            .push(&self.language)
            .push(query);

        Ok(url)
    }
}

#[async_trait]
impl DictionaryLookup for FreeDictionaryClient {
    async fn lookup(&self, query: &str) -> Result<LookupResult, LookupError> {
        let query = DefaultPreprocessor.process(query);
        if query.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let url = self.entry_url(&query)?;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        if status == StatusCode::NOT_FOUND {
            let message = serde_json::from_str::<ApiNotFound>(&body)
                .map(|not_found| not_found.describe())
                .unwrap_or_else(|_| "No Definitions Found".to_string());
            return Err(LookupError::NotFound { query, message });
        }

        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let result = extract_definitions(&body)?;
        tracing::debug!("'{}': {} definitions", query, result.len());
        Ok(result)
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "Free Dictionary API".to_string(),
            language: self.language.clone(),
            endpoint: self.api_url.clone(),
        }
    }
}
