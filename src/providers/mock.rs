/*!
 * Mock translation backend for testing.
 *
 * This module provides mock backends that simulate different behaviors:
 * - `MockBackend::identity()` - Returns the input unchanged
 * - `MockBackend::uppercase()` - Returns the input uppercased
 * - `MockBackend::tagged()` - Prefixes the input with a language-pair tag
 * - `MockBackend::failing()` - Always fails with an error
 * - `MockBackend::intermittent(n)` - Fails every nth request
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::BackendError;
use crate::providers::TranslationBackend;

/// Behavior mode for the mock backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Return the input text unchanged
    Identity,
    /// Return the input text uppercased
    Uppercase,
    /// Prefix the input with "[src->dst]"
    Tagged,
    /// Always fail with a request error
    Failing,
    /// Fail every nth request, succeed otherwise
    Intermittent { fail_every: usize },
}

/// Mock backend for testing translation behavior without a live server
#[derive(Debug)]
pub struct MockBackend {
    /// Language code this backend pretends to translate from
    source_language: String,
    /// Language code this backend pretends to translate to
    target_language: String,
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter for intermittent failures
    request_count: Arc<AtomicUsize>,
    /// Custom response generator (optional, overrides behavior on success)
    custom_response: Option<fn(&str) -> String>,
}

impl MockBackend {
    /// Create a new mock backend with the specified behavior
    pub fn new(source_language: &str, target_language: &str, behavior: MockBehavior) -> Self {
        Self {
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
        }
    }

    /// Create a mock that echoes its input
    pub fn identity(source_language: &str, target_language: &str) -> Self {
        Self::new(source_language, target_language, MockBehavior::Identity)
    }

    /// Create a mock that uppercases its input
    pub fn uppercase(source_language: &str, target_language: &str) -> Self {
        Self::new(source_language, target_language, MockBehavior::Uppercase)
    }

    /// Create a mock that prefixes its input with the language pair
    pub fn tagged(source_language: &str, target_language: &str) -> Self {
        Self::new(source_language, target_language, MockBehavior::Tagged)
    }

    /// Create a mock that always errors
    pub fn failing(source_language: &str, target_language: &str) -> Self {
        Self::new(source_language, target_language, MockBehavior::Failing)
    }

    /// Create a mock that fails every nth request
    pub fn intermittent(source_language: &str, target_language: &str, fail_every: usize) -> Self {
        Self::new(source_language, target_language, MockBehavior::Intermittent { fail_every })
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of translate calls made so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    fn source_language(&self) -> &str {
        &self.source_language
    }

    fn target_language(&self) -> &str {
        &self.target_language
    }

    async fn translate(&self, text: &str) -> Result<String, BackendError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst) + 1;

        match self.behavior {
            MockBehavior::Failing => {
                return Err(BackendError::RequestFailed("Mock backend failure".to_string()));
            }
            MockBehavior::Intermittent { fail_every } if fail_every > 0 && count % fail_every == 0 => {
                return Err(BackendError::RequestFailed(format!(
                    "Mock intermittent failure on request {}", count
                )));
            }
            _ => {}
        }

        if let Some(generator) = self.custom_response {
            return Ok(generator(text));
        }

        let translated = match self.behavior {
            MockBehavior::Uppercase => text.to_uppercase(),
            MockBehavior::Tagged => format!("[{}->{}] {}", self.source_language, self.target_language, text),
            _ => text.to_string(),
        };

        Ok(translated)
    }

    async fn test_connection(&self) -> Result<(), BackendError> {
        match self.behavior {
            MockBehavior::Failing => Err(BackendError::ConnectionError("Mock backend is down".to_string())),
            _ => Ok(()),
        }
    }
}
