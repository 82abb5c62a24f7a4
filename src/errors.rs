/*!
 * Error types for the comtrans application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to a translation backend
#[derive(Error, Debug)]
pub enum BackendError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Errors that can occur while extracting comments from a source unit
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The candidate file could not be decoded as UTF-8 text
    #[error("Unreadable source file {path}: {reason}")]
    UnreadableSource {
        /// Path of the offending file
        path: String,
        /// Underlying decode/read failure
        reason: String,
    },
}

/// Errors that can occur while writing the output dataset
#[derive(Error, Debug)]
pub enum SinkError {
    /// The output target could not be created or opened
    #[error("Failed to open output sink {path}: {reason}")]
    OpenFailed { path: String, reason: String },

    /// A row could not be written to the output target
    #[error("Failed to write row to output sink: {0}")]
    WriteFailed(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a translation backend
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Error from comment extraction
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Error from the dataset sink
    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
