use crate::{LanguageCode, TranslateError};

const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("arabic", "ar"),
    ("bulgarian", "bg"),
    ("chinese", "zh"),
    ("czech", "cs"),
    ("danish", "da"),
    ("dutch", "nl"),
    ("english", "en"),
    ("estonian", "et"),
    ("finnish", "fi"),
    ("french", "fr"),
    ("german", "de"),
    ("greek", "el"),
    ("hungarian", "hu"),
    ("indonesian", "id"),
    ("italian", "it"),
    ("japanese", "ja"),
    ("korean", "ko"),
    ("latvian", "lv"),
    ("lithuanian", "lt"),
    ("norwegian", "nb"),
    ("polish", "pl"),
    ("portuguese", "pt"),
    ("romanian", "ro"),
    ("russian", "ru"),
    ("slovak", "sk"),
    ("slovenian", "sl"),
    ("spanish", "es"),
    ("swedish", "sv"),
    ("turkish", "tr"),
    ("ukrainian", "uk"),
];

/// Resolve a language name (`"French"`) or code (`"fr"`) to a lowercase code
pub fn resolve_language(input: &str) -> Result<LanguageCode, TranslateError> {
    let lowered = input.trim().to_lowercase();

    if let Some((_, code)) = LANGUAGE_NAMES.iter().find(|(name, _)| *name == lowered) {
        return Ok(code.to_string());
    }

    let is_code =
        (2..=3).contains(&lowered.len()) && lowered.chars().all(|c| c.is_ascii_alphabetic());
    if is_code {
        return Ok(lowered);
    }

    Err(TranslateError::UnsupportedLanguage(input.trim().to_string()))
}
