use crate::{TranslateError, Translator, resolve_language};

/// Outcome of translating a list of definitions in order
#[derive(Debug, Default)]
pub struct TranslationBatch {
    /// Translations that succeeded before the first failure
    pub translated: Vec<String>,
    pub failure: Option<TranslateError>,
}

impl TranslationBatch {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// Translate `texts` one by one into `target`.
///
/// Stops at the first failure; later texts are dropped. When `target` resolves
/// to `source` the texts are returned as-is and no provider is called.
pub async fn translate_all(
    translator: Option<&dyn Translator>,
    texts: &[String],
    source: &str,
    target: &str,
) -> TranslationBatch {
    let target = match resolve_language(target) {
        Ok(code) => code,
        Err(e) => {
            return TranslationBatch {
                translated: Vec::new(),
                failure: Some(e),
            };
        }
    };

    if target.eq_ignore_ascii_case(source) {
        return TranslationBatch {
            translated: texts.to_vec(),
            failure: None,
        };
    }

    let Some(translator) = translator else {
        return TranslationBatch {
            translated: Vec::new(),
            failure: Some(TranslateError::NotConfigured),
        };
    };

    let mut batch = TranslationBatch::default();
    for (idx, text) in texts.iter().enumerate() {
        match translator
            .translate(text, source.to_string(), target.clone())
            .await
        {
            Ok(translation) => batch.translated.push(translation.text),
            Err(e) => {
                tracing::warn!(
                    "Translation to '{}' failed at {}/{}: {}",
                    target,
                    idx + 1,
                    texts.len(),
                    e
                );
                batch.failure = Some(e);
                break;
            }
        }
    }

    batch
}
