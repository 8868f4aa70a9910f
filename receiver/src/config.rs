//! Configuration for the receiver
//!
//! This module provides configuration options for the datafeed HTTP
//! receiver and the capture debug tool.

use std::path::PathBuf;

use crate::error::{ReceiverError, Result};

/// Receiver configuration
#[derive(Debug, Clone)]
pub struct ReceiverConfig {
    /// TCP port to listen on
    pub listen_port: u16,

    /// Shared secret key for the inbound datafeed. Used identically for
    /// the decode path and for debug capture.
    pub feed_key: String,

    /// Directory where captures are written
    pub capture_dir: PathBuf,

    /// Base name of the capture files
    pub capture_name: String,

    /// Whether a capture may overwrite an earlier one with the same name
    pub allow_overwrite: bool,

    /// Whether to persist the raw request representation alongside the
    /// payload
    pub save_request: bool,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            listen_port: 8080,
            feed_key: String::new(),
            capture_dir: PathBuf::from("captures"),
            capture_name: "capture1".to_string(),
            allow_overwrite: false,
            save_request: true,
        }
    }
}

impl ReceiverConfig {
    /// Create a new receiver configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    ///
    /// An empty feed key is a configuration defect and must be fatal at
    /// startup, not discovered per-request.
    pub fn validate(&self) -> Result<()> {
        if self.feed_key.is_empty() {
            return Err(ReceiverError::Config(
                "feed key must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Create a configuration for testing
    pub fn for_testing(feed_key: &str, capture_dir: PathBuf) -> Self {
        Self {
            listen_port: 0, // Random port
            feed_key: feed_key.to_string(),
            capture_dir,
            capture_name: "test1".to_string(),
            allow_overwrite: false,
            save_request: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_fails_validation() {
        let config = ReceiverConfig::default();
        assert!(config.validate().is_err());

        let config = ReceiverConfig {
            feed_key: "secret".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
