use log::warn;

use crate::providers::TranslationBackend;

// @module: Per-line translation with structure preservation

/// Result of translating one block of text through a single backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTranslation {
    /// Recombined output text, same line count and order as the input
    pub text: String,

    /// Number of lines that failed translation and kept their original text
    pub failed_lines: usize,
}

/// Translate a block of text line by line, preserving structure.
///
/// Every line is handled independently:
/// - the count of leading whitespace characters is reconstructed as that many
///   spaces in front of the translated content;
/// - blank lines (after trimming) become empty output lines and are never
///   sent to the backend;
/// - trailing empty segments from a trailing newline are preserved.
///
/// The output always has exactly as many lines as the input.
///
/// A backend failure on one line does not abort the block: the line keeps
/// its original stripped text, the failure is logged, and translation
/// continues with the next line. Callers aggregate `failed_lines` into the
/// run summary.
pub async fn translate_line_preserving(
    text: &str,
    backend: &dyn TranslationBackend,
) -> LineTranslation {
    let mut translated_lines = Vec::new();
    let mut failed_lines = 0;

    for line in text.split('\n') {
        let stripped = line.trim();

        if stripped.is_empty() {
            // Blank lines keep no indentation, by observed behavior
            translated_lines.push(String::new());
            continue;
        }

        // Character count, not byte count: indentation may be non-ASCII whitespace
        let indent = line.chars().take_while(|c| c.is_whitespace()).count();

        let content = match backend.translate(stripped).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!(
                    "Translation failed ({} -> {}), keeping original line: {}",
                    backend.source_language(),
                    backend.target_language(),
                    e
                );
                failed_lines += 1;
                stripped.to_string()
            }
        };

        translated_lines.push(format!("{}{}", " ".repeat(indent), content));
    }

    LineTranslation {
        text: translated_lines.join("\n"),
        failed_lines,
    }
}
