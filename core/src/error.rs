//! Error types for the core crate
//!
//! This module provides the error taxonomy for the decode pipeline.
//! The core never retries and never logs; it returns typed errors for
//! the caller to log and map to a user-visible response.

use thiserror::Error;

/// Core error type for the decode pipeline
#[derive(Error, Debug)]
pub enum FeedError {
    /// Empty or otherwise unusable cipher key. A configuration defect:
    /// callers should treat this as fatal at startup, not per-request.
    #[error("Invalid cipher key: {0}")]
    InvalidKey(String),

    /// Plaintext is not parseable as structured markup. The cipher offers
    /// no way to distinguish a wrong key from corrupted ciphertext from a
    /// genuinely malformed feed, so all three collapse to this variant.
    #[error("Malformed feed: {0}")]
    MalformedFeed(String),

    /// A required field is absent or unparsable within an otherwise
    /// well-formed document.
    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Result type for the core crate
pub type Result<T> = std::result::Result<T, FeedError>;

/// Convert a displayable error to a MalformedFeed error
pub fn to_malformed_error<E: std::fmt::Display>(err: E) -> FeedError {
    FeedError::MalformedFeed(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FeedError::InvalidKey("key must not be empty".to_string());
        assert_eq!(err.to_string(), "Invalid cipher key: key must not be empty");

        let err = FeedError::MalformedFeed("unexpected end of stream".to_string());
        assert_eq!(err.to_string(), "Malformed feed: unexpected end of stream");

        let err = FeedError::MissingField("transaction_date".to_string());
        assert_eq!(err.to_string(), "Missing required field: transaction_date");
    }

    #[test]
    fn test_to_malformed_error() {
        let err = to_malformed_error("bad markup");
        match err {
            FeedError::MalformedFeed(msg) => assert_eq!(msg, "bad markup"),
            _ => panic!("Expected MalformedFeed variant"),
        }
    }
}
