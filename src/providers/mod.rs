/*!
 * Translation backend implementations.
 *
 * This module contains client implementations for the text-to-text
 * translation services the pipeline can be wired to:
 * - Marian: HTTP client for an OPUS-MT/Marian-style inference server
 * - Mock: in-process backend used by the test suite
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::BackendError;

/// Common trait for all translation backends.
///
/// A backend is one directional translation capability over a declared
/// language pair. The pipeline treats it as an opaque text-to-text function;
/// tokenization, batching-of-one and truncation of overlong input are the
/// backend's problem. Backends are constructed once at startup and injected,
/// never held as global state.
#[async_trait]
pub trait TranslationBackend: Send + Sync + Debug {
    /// Language code the backend translates from
    fn source_language(&self) -> &str;

    /// Language code the backend translates to
    fn target_language(&self) -> &str;

    /// Translate a piece of text.
    ///
    /// # Arguments
    /// * `text` - The text to translate, in the backend's source language
    ///
    /// # Returns
    /// * `Result<String, BackendError>` - The translated text or an error
    async fn translate(&self, text: &str) -> Result<String, BackendError>;

    /// Test the connection to the backend
    ///
    /// # Returns
    /// * `Result<(), BackendError>` - Ok if the backend is reachable, or an error
    async fn test_connection(&self) -> Result<(), BackendError>;
}

pub mod marian;
pub mod mock;
