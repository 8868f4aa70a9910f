//! Error types for the receiver
//!
//! This module provides error types for the datafeed HTTP receiver and
//! their mapping to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cartfeed_core::FeedError;
use std::io;
use thiserror::Error;

/// Result type for the receiver
pub type Result<T> = std::result::Result<T, ReceiverError>;

/// Error type for the receiver
#[derive(Debug, Error)]
pub enum ReceiverError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Decode pipeline error, surfaced unchanged from the core
    #[error("Decode error: {0}")]
    Decode(#[from] FeedError),

    /// A capture with the configured name already exists
    #[error("Error: data already captured.")]
    AlreadyCaptured,
}

impl IntoResponse for ReceiverError {
    fn into_response(self) -> Response {
        let status = match &self {
            // Decode failures are deterministic for the same bytes; the
            // client must change its input, so 4xx rather than 5xx.
            ReceiverError::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ReceiverError::AlreadyCaptured => StatusCode::FORBIDDEN,
            ReceiverError::Io(_) | ReceiverError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReceiverError::AlreadyCaptured;
        assert_eq!(err.to_string(), "Error: data already captured.");

        let err = ReceiverError::Config("feed key is empty".to_string());
        assert_eq!(err.to_string(), "Configuration error: feed key is empty");
    }

    #[test]
    fn test_decode_error_conversion() {
        let core_err = FeedError::MalformedFeed("bad markup".to_string());
        let err: ReceiverError = core_err.into();
        match err {
            ReceiverError::Decode(FeedError::MalformedFeed(_)) => {}
            _ => panic!("Expected Decode variant"),
        }
    }
}
