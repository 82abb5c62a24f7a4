use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Ordered translation stages; each stage feeds the next
    #[serde(default = "default_pipeline")]
    pub pipeline: Vec<StageConfig>,

    /// Comment extraction settings
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Dataset output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Configuration for one translation stage
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StageConfig {
    /// Source language code (ISO)
    pub from: String,

    /// Target language code (ISO)
    pub to: String,

    /// Inference server endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier; empty means derive the OPUS-MT name from the pair
    #[serde(default = "String::new")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl StageConfig {
    /// Create a stage for a language pair with default endpoint and model
    pub fn new(from: &str, to: &str) -> Self {
        StageConfig {
            from: from.to_string(),
            to: to.to_string(),
            endpoint: default_endpoint(),
            model: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// The model to request from the server.
    ///
    /// When no model is configured, the conventional OPUS-MT naming scheme
    /// for the pair is used (e.g. "Helsinki-NLP/opus-mt-zh-en").
    pub fn model_or_default(&self) -> String {
        if self.model.is_empty() {
            format!("Helsinki-NLP/opus-mt-{}-{}", self.from, self.to)
        } else {
            self.model.clone()
        }
    }
}

/// Configuration for comment extraction
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExtractionConfig {
    /// File extension filter for directory mode (without the dot)
    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    /// Retain comments whose trimmed text is empty as zero-length records.
    /// The legacy behavior (false) discards them.
    #[serde(default)]
    pub keep_empty_comments: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            file_extension: default_file_extension(),
            keep_empty_comments: false,
        }
    }
}

/// Output schema variant.
///
/// The two layouts match the two observed downstream consumers; the column
/// order within each variant is fixed and must not be reordered.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVariant {
    /// `file_path, code, comment_<src>, comment_<stage1>, comment_<stage2>, ...`
    Flat,
    /// `file_path, code, code_comment_type, comment_<src>, comment_<last>, comment_<mid...>`
    #[default]
    KindTracked,
}

impl SchemaVariant {
    // @returns: Lowercase schema identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Flat => "flat".to_string(),
            Self::KindTracked => "kindtracked".to_string(),
        }
    }
}

impl std::fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for SchemaVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "kindtracked" | "kind-tracked" | "kind_tracked" => Ok(Self::KindTracked),
            _ => Err(anyhow!("Invalid schema variant: {}", s)),
        }
    }
}

/// Configuration for the dataset sink
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    /// Output schema variant
    #[serde(default)]
    pub schema: SchemaVariant,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            schema: SchemaVariant::default(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_endpoint() -> String {
    // Conventional port for a local opus-mt-server instance
    "http://localhost:8989".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_file_extension() -> String {
    "py".to_string()
}

fn default_pipeline() -> Vec<StageConfig> {
    vec![StageConfig::new("zh", "en"), StageConfig::new("en", "ru")]
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.pipeline.is_empty() {
            return Err(anyhow!("At least one translation stage is required"));
        }

        // Validate all language codes
        for stage in &self.pipeline {
            crate::language_utils::validate_language_code(&stage.from)?;
            crate::language_utils::validate_language_code(&stage.to)?;
        }

        // Stages must chain: each stage consumes what the previous one produced
        for pair in self.pipeline.windows(2) {
            if pair[0].to != pair[1].from {
                return Err(anyhow!(
                    "Pipeline stages do not chain: {} -> {} followed by {} -> {}",
                    pair[0].from, pair[0].to, pair[1].from, pair[1].to
                ));
            }
        }

        if self.extraction.file_extension.trim().is_empty() {
            return Err(anyhow!("File extension filter must not be empty"));
        }

        Ok(())
    }

    /// Source language of the whole chain
    pub fn source_language(&self) -> &str {
        &self.pipeline[0].from
    }

    /// Target language of the final stage
    pub fn final_language(&self) -> &str {
        &self.pipeline[self.pipeline.len() - 1].to
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            pipeline: default_pipeline(),
            extraction: ExtractionConfig::default(),
            output: OutputConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
