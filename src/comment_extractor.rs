use std::fmt;
use std::path::{Path, PathBuf};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ExtractionError;
use crate::file_utils::FileManager;

// @module: Comment extraction from source text

// @const: Line comment regex - marker up to end of line, at least one character
static SINGLE_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"#(.+)").unwrap()
});

// @const: Block comment regex - non-greedy span between matching triple quotes
static MULTI_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)"""(.*?)"""|'''(.*?)'''"#).unwrap()
});

/// Classification of an extracted comment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// Line-delimited comment (`# ...`)
    SingleLine,
    /// Block-delimited comment (`"""..."""` or `'''...'''`)
    MultiLine,
}

impl CommentKind {
    // @returns: Label used in the kind-tracked output schema
    pub fn label(&self) -> &'static str {
        match self {
            Self::SingleLine => "Single-line",
            Self::MultiLine => "Multi-line",
        }
    }
}

impl fmt::Display for CommentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// @struct: One extracted comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    // @field: Captured text, stored un-stripped; trimming happens at consumption time
    pub raw_text: String,

    // @field: Which pattern matched
    pub kind: CommentKind,
}

impl CommentRecord {
    pub fn new(raw_text: impl Into<String>, kind: CommentKind) -> Self {
        CommentRecord {
            raw_text: raw_text.into(),
            kind,
        }
    }

    /// The comment text with leading and trailing whitespace removed
    pub fn trimmed(&self) -> &str {
        self.raw_text.trim()
    }
}

/// A unit of raw source text and its originating path.
///
/// Immutable once read; discarded after its comments are extracted.
#[derive(Debug)]
pub struct SourceUnit {
    /// Originating file path
    pub path: PathBuf,

    /// Full file contents
    pub text: String,
}

impl SourceUnit {
    /// Read a source unit from disk.
    ///
    /// Decode failures skip the whole unit; no partial results are produced.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ExtractionError> {
        let path = path.as_ref();
        let text = FileManager::read_source_unit(path)?;
        Ok(SourceUnit {
            path: path.to_path_buf(),
            text,
        })
    }
}

// @struct: Regex-based comment extractor
pub struct CommentExtractor {
    // @field: Keep records whose trimmed text is empty
    keep_empty_comments: bool,
}

impl CommentExtractor {
    pub fn new(keep_empty_comments: bool) -> Self {
        CommentExtractor { keep_empty_comments }
    }

    /// Extract all comments from a block of source text.
    ///
    /// Single-line and multi-line comments are scanned in two independent
    /// passes: the result holds every SingleLine record in document order
    /// followed by every MultiLine record in document order. Cross-kind
    /// document order is NOT preserved; downstream consumers of the dataset
    /// rely on this concatenated ordering, so it is kept as-is.
    pub fn extract(&self, text: &str) -> Vec<CommentRecord> {
        let mut records = Vec::new();

        for captures in SINGLE_LINE_REGEX.captures_iter(text) {
            if let Some(matched) = captures.get(1) {
                records.push(CommentRecord::new(matched.as_str(), CommentKind::SingleLine));
            }
        }

        for captures in MULTI_LINE_REGEX.captures_iter(text) {
            // One alternation arm per delimiter style; exactly one matches
            let matched = captures.get(1).or_else(|| captures.get(2));
            if let Some(matched) = matched {
                records.push(CommentRecord::new(matched.as_str(), CommentKind::MultiLine));
            }
        }

        if !self.keep_empty_comments {
            records.retain(|record| !record.trimmed().is_empty());
        }
        records
    }

    /// Extract all comments from a source unit
    pub fn extract_unit(&self, unit: &SourceUnit) -> Vec<CommentRecord> {
        self.extract(&unit.text)
    }
}

impl Default for CommentExtractor {
    fn default() -> Self {
        CommentExtractor::new(false)
    }
}
