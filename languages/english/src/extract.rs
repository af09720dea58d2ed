use vocabi_core::{LookupError, LookupResult};

use crate::models::ApiEntry;

/// Flatten a dictionary response body into its definitions.
///
/// Definitions keep response order: entry, then meaning, then definition.
/// Any schema mismatch fails the whole body; nothing partial is returned.
pub fn extract_definitions(body: &str) -> Result<LookupResult, LookupError> {
    let entries: Vec<ApiEntry> =
        serde_json::from_str(body).map_err(|e| LookupError::Parse(e.to_string()))?;

    let Some(word) = entries.first().map(|entry| entry.word.clone()) else {
        return Err(LookupError::Empty);
    };

    let definitions: Vec<String> = entries
        .into_iter()
        .flat_map(|entry| entry.meanings)
        .flat_map(|meaning| meaning.definitions)
        .map(|definition| definition.definition)
        .collect();

    let result = LookupResult { word, definitions };
    if result.is_empty() {
        return Err(LookupError::Empty);
    }

    Ok(result)
}
