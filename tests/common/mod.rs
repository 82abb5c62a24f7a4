/*!
 * Common test utilities for the comtrans test suite
 */

use std::path::PathBuf;
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

use comtrans::providers::TranslationBackend;
use comtrans::providers::mock::MockBackend;
use comtrans::translation::TranslationPipeline;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample Python source file with known comments for testing
pub fn create_test_source(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = r#"# first comment
x = 1  # second comment
"""block
comment"""
y = 2
"#;
    create_test_file(dir, filename, content)
}

/// A two-stage pipeline of mock backends: zh->en identity, en->ru uppercase
pub fn identity_uppercase_pipeline() -> TranslationPipeline {
    let stages: Vec<Box<dyn TranslationBackend>> = vec![
        Box::new(MockBackend::identity("zh", "en")),
        Box::new(MockBackend::uppercase("en", "ru")),
    ];
    TranslationPipeline::new(stages).expect("mock pipeline should be valid")
}

/// A two-stage pipeline that tags text with the language pair at each stage
pub fn tagged_pipeline() -> TranslationPipeline {
    let stages: Vec<Box<dyn TranslationBackend>> = vec![
        Box::new(MockBackend::tagged("zh", "en")),
        Box::new(MockBackend::tagged("en", "ru")),
    ];
    TranslationPipeline::new(stages).expect("mock pipeline should be valid")
}

/// Read a CSV file written by the dataset sink, stripping the BOM,
/// and return (header, rows) as string vectors
pub fn read_dataset(path: &PathBuf) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let content = fs::read_to_string(path)?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let header = reader
        .headers()?
        .iter()
        .map(|field| field.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    Ok((header, rows))
}
