/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use comtrans::file_utils::FileManager;
use crate::common;

/// Test that find_files walks nested directories and filters by extension
#[test]
fn test_find_files_withNestedTree_shouldReturnOnlyMatches() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_file(&dir, "a.py", "# a\n")?;
    common::create_test_file(&dir, "notes.txt", "text\n")?;
    std::fs::create_dir(dir.join("nested"))?;
    common::create_test_file(&dir.join("nested"), "b.py", "# b\n")?;

    let found = FileManager::find_files(&dir, "py")?;

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|path| {
        path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("py"))
    }));

    Ok(())
}

/// Test that the extension filter accepts a leading dot
#[test]
fn test_find_files_withDottedExtension_shouldNormalize() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "a.py", "# a\n")?;

    let found = FileManager::find_files(&dir, ".py")?;
    assert_eq!(found.len(), 1);

    Ok(())
}

/// Test that extension matching is case-insensitive
#[test]
fn test_find_files_withUppercaseExtension_shouldMatch() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "legacy.PY", "# legacy\n")?;

    let found = FileManager::find_files(&dir, "py")?;
    assert_eq!(found.len(), 1);

    Ok(())
}

/// Test that an empty directory yields no files
#[test]
fn test_find_files_withEmptyDir_shouldReturnNothing() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let found = FileManager::find_files(temp_dir.path(), "py")?;

    assert!(found.is_empty());

    Ok(())
}

/// Test that read_source_unit returns file content for valid UTF-8
#[test]
fn test_read_source_unit_withValidFile_shouldReturnContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content = "# 你好\nx = 1\n";
    let path = common::create_test_file(&temp_dir.path().to_path_buf(), "a.py", content)?;

    let read = FileManager::read_source_unit(&path)?;
    assert_eq!(read, content);

    Ok(())
}

/// Test that read_source_unit reports undecodable files as unreadable sources
#[test]
fn test_read_source_unit_withInvalidUtf8_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("binary.py");
    std::fs::write(&path, [0xFF, 0xFE, 0x00, 0x41])?;

    let result = FileManager::read_source_unit(&path);
    assert!(result.is_err());

    Ok(())
}
