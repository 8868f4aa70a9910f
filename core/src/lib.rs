//! # Cartfeed Core
//!
//! Core decode pipeline for the vendor-supplied commerce datafeed: a keyed
//! stream cipher that reverses the vendor's obfuscation and a structured
//! extractor that materializes purchase transactions from the decrypted
//! markup. Both stages are synchronous, pure, and free of shared mutable
//! state; all I/O belongs to the collaborating crates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cipher;
pub mod decoder;
pub mod error;
pub mod models;

/// Re-export common types for ease of use
pub use cipher::StreamCipher;
pub use error::{FeedError, Result};
pub use models::{Feed, Item, ItemDate, Transaction};

/// Version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decrypt an encrypted datafeed payload and decode it into a feed
///
/// # Arguments
///
/// * `ciphertext` - Raw (URL-decoded) ciphertext bytes
/// * `key` - Shared secret key, must be non-empty
///
/// # Returns
///
/// The decoded `Feed`, or the failing stage's typed error unchanged.
pub fn decode_from_ciphertext(ciphertext: &[u8], key: &[u8]) -> Result<Feed> {
    Feed::from_encrypted(ciphertext, key)
}

/// Decrypt an encrypted datafeed payload without decoding it
///
/// Intended for the capture/debug collaborator, which persists the
/// plaintext as received. The cipher offers no integrity check, so the
/// output is garbage when the key is wrong; only the decoder can tell.
pub fn decrypt_only(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    cipher::crypt(ciphertext, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrypt_only_round_trip() {
        let plaintext = b"<datafeed><transactions/></datafeed>";
        let ciphertext = cipher::crypt(plaintext, b"key").unwrap();

        let recovered = decrypt_only(&ciphertext, b"key").unwrap();
        assert_eq!(recovered, plaintext);
    }

    #[test]
    fn test_decode_from_ciphertext_empty_feed() {
        let plaintext = b"<datafeed><transactions/></datafeed>";
        let ciphertext = cipher::crypt(plaintext, b"key").unwrap();

        let feed = decode_from_ciphertext(&ciphertext, b"key").unwrap();
        assert!(feed.is_empty());
    }

    #[test]
    fn test_invalid_key_surfaces_from_both_entry_points() {
        assert!(matches!(
            decrypt_only(b"data", b"").unwrap_err(),
            FeedError::InvalidKey(_)
        ));
        assert!(matches!(
            decode_from_ciphertext(b"data", b"").unwrap_err(),
            FeedError::InvalidKey(_)
        ));
    }
}
