use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::font::FontSpec;

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// Look up `query` and translate the definitions into `language`
    Search {
        query: String,
        language: String,
    },
    ChangeFont(String),
    ChangeTheme(AppearanceMode),
    /// Copy the current results panel text to the clipboard
    CopyMeaning(String),
    ShowResults(DisplayResult),
    ShowLookupError {
        query: String,
        detail: String,
    },
    ApplyFont(FontSpec),
    ApplyTheme(AppearanceMode),
    /// Inline message appended to the results panel
    ShowNotice(String),
    BackendReady,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayResult {
    pub word: String,
    pub definitions: Vec<String>,
    /// Set when translation aborted; `definitions` then holds the translated prefix
    pub translation_failure: Option<String>,
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Close,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppearanceMode {
    #[default]
    Dark,
    Light,
    System,
}

impl AppearanceMode {
    pub const ALL: [AppearanceMode; 3] = [Self::Dark, Self::Light, Self::System];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
            Self::System => "System",
        }
    }
}

impl fmt::Display for AppearanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppearanceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown appearance mode '{s}', expected Dark, Light or System"))
    }
}
