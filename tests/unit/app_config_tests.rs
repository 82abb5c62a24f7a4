/*!
 * Tests for application configuration
 */

use comtrans::app_config::{Config, SchemaVariant, StageConfig};
use anyhow::Result;

/// Test that the default configuration is the observed zh -> en -> ru chain
#[test]
fn test_default_shouldBeChineseEnglishRussian() {
    let config = Config::default();

    assert_eq!(config.pipeline.len(), 2);
    assert_eq!(config.source_language(), "zh");
    assert_eq!(config.final_language(), "ru");
    assert_eq!(config.extraction.file_extension, "py");
    assert!(!config.extraction.keep_empty_comments);
    assert_eq!(config.output.schema, SchemaVariant::KindTracked);
}

/// Test that the default configuration validates
#[test]
fn test_validate_withDefaultConfig_shouldSucceed() -> Result<()> {
    Config::default().validate()
}

/// Test that an empty pipeline is rejected
#[test]
fn test_validate_withEmptyPipeline_shouldFail() {
    let mut config = Config::default();
    config.pipeline.clear();

    assert!(config.validate().is_err());
}

/// Test that unchained stages are rejected
#[test]
fn test_validate_withUnchainedStages_shouldFail() {
    let mut config = Config::default();
    config.pipeline = vec![StageConfig::new("zh", "en"), StageConfig::new("fr", "ru")];

    assert!(config.validate().is_err());
}

/// Test that an invalid language code is rejected
#[test]
fn test_validate_withInvalidLanguageCode_shouldFail() {
    let mut config = Config::default();
    config.pipeline = vec![StageConfig::new("zz", "en")];

    assert!(config.validate().is_err());
}

/// Test that an empty extension filter is rejected
#[test]
fn test_validate_withEmptyExtension_shouldFail() {
    let mut config = Config::default();
    config.extraction.file_extension = "  ".to_string();

    assert!(config.validate().is_err());
}

/// Test that the OPUS-MT model name is derived when none is configured
#[test]
fn test_model_or_default_withEmptyModel_shouldDeriveOpusMtName() {
    let stage = StageConfig::new("zh", "en");
    assert_eq!(stage.model_or_default(), "Helsinki-NLP/opus-mt-zh-en");
}

/// Test that a configured model overrides the derived name
#[test]
fn test_model_or_default_withExplicitModel_shouldUseIt() {
    let mut stage = StageConfig::new("zh", "en");
    stage.model = "my-finetuned-model".to_string();

    assert_eq!(stage.model_or_default(), "my-finetuned-model");
}

/// Test that the configuration round-trips through JSON
#[test]
fn test_serde_withDefaultConfig_shouldRoundTrip() -> Result<()> {
    let config = Config::default();
    let json = serde_json::to_string_pretty(&config)?;
    let parsed: Config = serde_json::from_str(&json)?;

    assert_eq!(parsed.pipeline, config.pipeline);
    assert_eq!(parsed.output.schema, config.output.schema);

    Ok(())
}

/// Test that a minimal JSON config picks up defaults
#[test]
fn test_serde_withMinimalJson_shouldApplyDefaults() -> Result<()> {
    let parsed: Config = serde_json::from_str("{}")?;

    assert_eq!(parsed.pipeline.len(), 2);
    assert_eq!(parsed.extraction.file_extension, "py");

    Ok(())
}
