use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_FONT_SIZE: u16 = 12;

/// Font family plus point size.
///
/// Accepts both stored formats, `"Fixedsys 12"` and `"Fixedsys,12"`.
/// A family without a trailing size gets [`DEFAULT_FONT_SIZE`].
/// Always serialized as `"<family> <size>"`. Families never contain a comma,
/// so the written form parses back to the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FontSpec {
    pub family: String,
    pub size: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FontSpecError {
    #[error("font name is empty")]
    EmptyFamily,

    #[error("font name must not contain a comma: '{0}'")]
    CommaInFamily(String),

    #[error("font size must be greater than zero")]
    ZeroSize,

    #[error("font size out of range: {0}")]
    InvalidSize(String),
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: u16) -> Result<Self, FontSpecError> {
        let family = family.into().trim().to_string();
        if family.is_empty() {
            return Err(FontSpecError::EmptyFamily);
        }
        if family.contains(',') {
            return Err(FontSpecError::CommaInFamily(family));
        }
        if size == 0 {
            return Err(FontSpecError::ZeroSize);
        }
        Ok(Self { family, size })
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "Fixedsys".to_string(),
            size: DEFAULT_FONT_SIZE,
        }
    }
}

impl FromStr for FontSpec {
    type Err = FontSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let splits = [s.rsplit_once(','), s.rsplit_once(char::is_whitespace)];
        for (family, tail) in splits.into_iter().flatten() {
            if let Some(size) = trailing_size(tail) {
                return Self::new(family, size?);
            }
        }

        Self::new(s, DEFAULT_FONT_SIZE)
    }
}

/// `None` unless `tail` is all digits
fn trailing_size(tail: &str) -> Option<Result<u16, FontSpecError>> {
    let tail = tail.trim();
    if tail.is_empty() || !tail.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(
        tail.parse()
            .map_err(|_| FontSpecError::InvalidSize(tail.to_string())),
    )
}

impl TryFrom<String> for FontSpec {
    type Error = FontSpecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FontSpec> for String {
    fn from(font: FontSpec) -> Self {
        font.to_string()
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.size)
    }
}
