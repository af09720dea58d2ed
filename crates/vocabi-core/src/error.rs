/// Why a lookup produced no definitions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Empty query")]
    EmptyQuery,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error("No definitions found for '{query}': {message}")]
    NotFound { query: String, message: String },

    #[error("Malformed response: {0}")]
    Parse(String),

    #[error("Dictionary returned no entries")]
    Empty,
}

impl LookupError {
    /// Whether the word itself is unknown, as opposed to a transport or format failure
    pub fn is_missing_word(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Empty)
    }
}
