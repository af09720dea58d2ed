use crate::error::LookupError;

/// Remote dictionary lookup
#[async_trait::async_trait]
pub trait DictionaryLookup: Send + Sync {
    /// Fetch every definition of `query`, in response order.
    ///
    /// Fails as a whole: a result is never a partial list.
    async fn lookup(&self, query: &str) -> Result<LookupResult, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    /// Headword of the first entry
    pub word: String,
    /// Entry order, then meaning order, then definition order. Duplicates are kept.
    pub definitions: Vec<String>,
}

impl LookupResult {
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub language: String,
    pub endpoint: String,
}
