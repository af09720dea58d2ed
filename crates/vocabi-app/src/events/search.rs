use kanal::AsyncSender;
use vocabi_core::LookupError;
use vocabi_translator::translate_all;
use vocabi_types::{AppEvent, DisplayResult};

use crate::state::AppState;

pub async fn handle_search(
    state: &AppState,
    query: String,
    language: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    remember_language(state, &language).await;

    match lookup_and_translate(state, &query, &language).await {
        Ok(result) => {
            tracing::debug!("Sending {} definitions", result.definitions.len());
            app_to_ui_tx.send(AppEvent::ShowResults(result)).await?;
        }
        Err(e) => {
            app_to_ui_tx
                .send(AppEvent::ShowLookupError {
                    query,
                    detail: e.to_string(),
                })
                .await?;
        }
    }

    Ok(())
}

/// Persist the language box the way it was when the search ran
pub async fn remember_language(state: &AppState, language: &str) {
    {
        let mut settings = state.settings.write().await;
        if settings.language == language {
            return;
        }
        settings.language = language.to_string();
    }
    state.save_settings().await;
}

/// Look up `query` and translate its definitions into `language`.
///
/// A translation failure is not an error here: the translated prefix is kept
/// and the failure is reported in [`DisplayResult::translation_failure`].
pub async fn lookup_and_translate(
    state: &AppState,
    query: &str,
    language: &str,
) -> Result<DisplayResult, LookupError> {
    let result = match state.dictionary.lookup(query).await {
        Ok(result) => result,
        Err(e) if e.is_missing_word() => {
            tracing::info!("No definitions for '{}': {}", query, e);
            return Err(e);
        }
        Err(e) => {
            tracing::warn!("Lookup of '{}' failed: {}", query, e);
            return Err(e);
        }
    };

    let source = state.config.read().await.dictionary.source_lang.clone();
    let batch = translate_all(
        state.translator.as_deref(),
        &result.definitions,
        &source,
        language,
    )
    .await;
    if !batch.is_complete() {
        tracing::debug!(
            "Translation of '{}' kept {} of {} definitions",
            query,
            batch.translated.len(),
            result.definitions.len()
        );
    }

    Ok(DisplayResult {
        word: result.word,
        definitions: batch.translated,
        translation_failure: batch.failure.map(|e| e.to_string()),
    })
}
