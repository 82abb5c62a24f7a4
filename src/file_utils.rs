use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::ExtractionError;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    /// Find files with a specific extension in a directory, recursively.
    ///
    /// The extension match is case-insensitive and accepts the filter with or
    /// without a leading dot. Entries are returned in walk order so the
    /// dataset rows come out in a stable visitation order.
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = extension.trim_start_matches('.').to_string();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true).sort_by_file_name() {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(&normalized_ext) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }

    /// Read a candidate source unit as UTF-8 text.
    ///
    /// Decode failures are reported as [`ExtractionError::UnreadableSource`]
    /// so callers can skip the whole unit without aborting the run.
    pub fn read_source_unit<P: AsRef<Path>>(path: P) -> Result<String, ExtractionError> {
        let path = path.as_ref();
        fs::read_to_string(path).map_err(|e| ExtractionError::UnreadableSource {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
