/*!
 * # comtrans - comment translation corpus builder
 *
 * A Rust library for building parallel-text datasets from source-code
 * comments via chained machine translation.
 *
 * ## Features
 *
 * - Extract single-line and block comments from Python source files
 * - Translate each comment through a fixed chain of translation stages
 *   (default: Chinese -> English -> Russian)
 * - Preserve per-line indentation and blank-line structure across translation
 * - Emit one CSV row per comment, UTF-8 with BOM for spreadsheet compatibility
 * - Pluggable translation backends over a declared language pair
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `comment_extractor`: Comment scanning and classification
 * - `translation`: Chained, line-preserving translation:
 *   - `translation::line_preserving`: Per-line translation with structure preservation
 *   - `translation::pipeline`: Ordered stage chaining
 * - `dataset_writer`: CSV dataset sink
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `providers`: Translation backend clients:
 *   - `providers::marian`: OPUS-MT/Marian inference server client
 *   - `providers::mock`: In-process backend for tests
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod comment_extractor;
pub mod dataset_writer;
pub mod translation;
pub mod app_controller;
pub mod language_utils;
pub mod providers;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::{Config, SchemaVariant, StageConfig};
pub use comment_extractor::{CommentExtractor, CommentKind, CommentRecord, SourceUnit};
pub use dataset_writer::DatasetSink;
pub use translation::{TranslationPipeline, translate_line_preserving};
pub use app_controller::{Controller, RunSummary};
pub use providers::TranslationBackend;
pub use errors::{AppError, BackendError, ExtractionError, SinkError};
