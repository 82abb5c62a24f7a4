use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// The corpus builder tags every translated column with the language code of
/// its stage, so codes coming from configuration are validated here before a
/// run starts.
/// Validate that a language code is a valid ISO 639-1 (2-letter) or
/// ISO 639-3 (3-letter) code
pub fn validate_language_code(code: &str) -> Result<()> {
    let normalized_code = code.trim().to_lowercase();

    if normalized_code.len() == 2 {
        if Language::from_639_1(&normalized_code).is_some() {
            return Ok(());
        }
    } else if normalized_code.len() == 3 && Language::from_639_3(&normalized_code).is_some() {
        return Ok(());
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Get the English name for a language code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    let language = if normalized_code.len() == 2 {
        Language::from_639_1(&normalized_code)
    } else if normalized_code.len() == 3 {
        Language::from_639_3(&normalized_code)
    } else {
        None
    };

    language
        .map(|lang| lang.to_name().to_string())
        .ok_or_else(|| anyhow!("Unknown language code: {}", code))
}

/// Check whether two language codes refer to the same language,
/// regardless of 2-letter vs 3-letter form
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    let resolve = |code: &str| -> Option<Language> {
        let normalized = code.trim().to_lowercase();
        match normalized.len() {
            2 => Language::from_639_1(&normalized),
            3 => Language::from_639_3(&normalized),
            _ => None,
        }
    };

    match (resolve(code1), resolve(code2)) {
        (Some(lang1), Some(lang2)) => lang1 == lang2,
        _ => false,
    }
}
