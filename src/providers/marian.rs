use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use log::debug;

use crate::errors::BackendError;
use crate::providers::TranslationBackend;

/// Client for an OPUS-MT/Marian-style translation inference server.
///
/// The server is expected to expose a `/translate` endpoint that accepts a
/// JSON body with the text and model name and responds with the translated
/// text. One client instance serves exactly one language pair; the chained
/// pipeline holds one client per stage.
#[derive(Debug)]
pub struct Marian {
    /// Base URL of the inference server
    base_url: String,
    /// Model identifier loaded on the server (e.g. "Helsinki-NLP/opus-mt-zh-en")
    model: String,
    /// Language code this client translates from
    source_language: String,
    /// Language code this client translates to
    target_language: String,
    /// HTTP client for making requests
    client: Client,
}

/// Translation request for the inference server
#[derive(Debug, Serialize)]
pub struct TranslationRequest {
    /// Model name to use for translation
    model: String,
    /// Text to translate
    text: String,
}

/// Translation response from the inference server
#[derive(Debug, Deserialize)]
pub struct TranslationResponse {
    /// Translated text
    pub translation: String,
}

impl Marian {
    /// Create a new client for one language pair
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| BackendError::ConnectionError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Marian {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
            client,
        })
    }

    /// The model identifier this client sends to the server
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl TranslationBackend for Marian {
    fn source_language(&self) -> &str {
        &self.source_language
    }

    fn target_language(&self) -> &str {
        &self.target_language
    }

    async fn translate(&self, text: &str) -> Result<String, BackendError> {
        let request = TranslationRequest {
            model: self.model.clone(),
            text: text.to_string(),
        };

        debug!("Translating {} chars via {} ({} -> {})",
            text.len(), self.model, self.source_language, self.target_language);

        let response = self.client
            .post(self.endpoint("translate"))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    BackendError::ConnectionError(e.to_string())
                } else {
                    BackendError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body: TranslationResponse = response
            .json()
            .await
            .map_err(|e| BackendError::ParseError(e.to_string()))?;

        Ok(body.translation)
    }

    async fn test_connection(&self) -> Result<(), BackendError> {
        let response = self.client
            .get(self.endpoint("health"))
            .send()
            .await
            .map_err(|e| BackendError::ConnectionError(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(BackendError::ApiError {
                status_code: response.status().as_u16(),
                message: "Health check failed".to_string(),
            })
        }
    }
}
