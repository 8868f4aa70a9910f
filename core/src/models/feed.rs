//! Decoded feed root
//!
//! This module provides the root artifact of one decode call and the
//! entry points composing the stream cipher with the decoder.

use serde::{Deserialize, Serialize};

use crate::cipher;
use crate::decoder;
use crate::error::{FeedError, Result};

use super::transaction::Transaction;

/// The decoded collection of transactions from one datafeed payload
///
/// A transient decode result, not persisted state: a feed with zero
/// transactions is valid, and all contained entities are discarded with
/// the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    /// Decoded transactions, top-to-bottom as they appear in the source
    pub transactions: Vec<Transaction>,
}

impl Feed {
    /// Decode a feed from plaintext markup
    pub fn parse(markup: &str) -> Result<Self> {
        decoder::parse(markup)
    }

    /// Decrypt a ciphertext payload and decode the resulting markup
    ///
    /// Errors from the cipher and decoder stages surface unchanged.
    /// Plaintext that is not valid UTF-8 is indistinguishable from a
    /// wrong key or corrupted ciphertext and reports as `MalformedFeed`.
    pub fn from_encrypted(ciphertext: &[u8], key: &[u8]) -> Result<Self> {
        let plaintext = cipher::crypt(ciphertext, key)?;
        let markup = String::from_utf8(plaintext)
            .map_err(|e| FeedError::MalformedFeed(format!("plaintext is not UTF-8: {}", e)))?;
        Self::parse(&markup)
    }

    /// Number of transactions in the feed
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the feed holds no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_serializes_for_downstream() {
        // Collaborators persist decode results; the models must survive a
        // serialization round trip.
        let feed = Feed {
            transactions: vec![],
        };
        let json = serde_json::to_string(&feed).unwrap();
        assert_eq!(json, r#"{"transactions":[]}"#);

        let back: Feed = serde_json::from_str(&json).unwrap();
        assert!(back.is_empty());
    }
}
