//! Keyed stream cipher for the vendor datafeed
//!
//! This module implements the byte-oriented symmetric cipher (classic RC4)
//! used by the vendor to obfuscate the datafeed. The same operation
//! encrypts and decrypts; the keystream must stay bit-exact with the
//! vendor's implementation to interoperate.
//!
//! The cipher offers no integrity or authentication: corrupted or
//! truncated ciphertext decrypts to garbage without signaling an error.
//! Structural validation of the result is the decoder's job.

use crate::error::{FeedError, Result};

/// Keyed stream cipher state
///
/// Holds an owned 256-slot permutation plus two cursor indices. A fresh
/// instance is keyed per `crypt` call; the state never outlives one
/// encryption/decryption invocation and is never shared.
pub struct StreamCipher {
    /// Permutation of the 256 byte values
    state: [u8; 256],

    /// First cursor index
    x: u8,

    /// Second cursor index
    y: u8,
}

impl StreamCipher {
    /// Create a new cipher keyed with the given secret
    ///
    /// Runs the key-scheduling permutation over the full state array and
    /// resets both cursors. Fails with `InvalidKey` on an empty key, which
    /// would otherwise reduce the key schedule to a division by zero.
    pub fn new(key: &[u8]) -> Result<Self> {
        if key.is_empty() {
            return Err(FeedError::InvalidKey("key must not be empty".to_string()));
        }

        let mut state = [0u8; 256];
        for (i, slot) in state.iter_mut().enumerate() {
            *slot = i as u8;
        }

        // Key schedule: fold the key into the identity permutation
        let mut x: u8 = 0;
        for i in 0..256 {
            x = key[i % key.len()]
                .wrapping_add(state[i])
                .wrapping_add(x);
            state.swap(i, x as usize);
        }

        Ok(StreamCipher { state, x: 0, y: 0 })
    }

    /// Transform a byte sequence with the keystream
    ///
    /// Output has the same length as the input. Bytes are processed
    /// strictly in order: each step mutates the shared permutation, so
    /// the keystream cannot be generated out of order.
    pub fn process(&mut self, input: &[u8]) -> Vec<u8> {
        let mut output = Vec::with_capacity(input.len());

        for &byte in input {
            self.x = self.x.wrapping_add(1);
            self.y = self.state[self.x as usize].wrapping_add(self.y);
            self.state.swap(self.x as usize, self.y as usize);

            let r = self.state[self.state[self.x as usize]
                .wrapping_add(self.state[self.y as usize])
                as usize];
            output.push(byte ^ r);
        }

        output
    }
}

/// Encrypt or decrypt a byte sequence with a fresh cipher
///
/// The operation is its own inverse: `crypt(crypt(x, k), k) == x` for any
/// non-empty key `k` and any byte sequence `x`, including empty.
pub fn crypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let mut cipher = StreamCipher::new(key)?;
    Ok(cipher.process(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_key_rejected() {
        let err = crypt(b"anything", b"").unwrap_err();
        match err {
            FeedError::InvalidKey(_) => {}
            _ => panic!("Expected InvalidKey variant"),
        }

        // The guard applies to empty input as well
        assert!(crypt(b"", b"").is_err());
    }

    #[test]
    fn test_known_vectors() {
        // Published RC4 test vectors pin bit-exact vendor interop
        assert_eq!(
            crypt(b"Plaintext", b"Key").unwrap(),
            [0xBB, 0xF3, 0x16, 0xE8, 0xD9, 0x40, 0xAF, 0x0A, 0xD3]
        );
        assert_eq!(
            crypt(b"pedia", b"Wiki").unwrap(),
            [0x10, 0x21, 0xBF, 0x04, 0x20]
        );
        assert_eq!(
            crypt(b"Attack at dawn", b"Secret").unwrap(),
            [
                0x45, 0xA0, 0x1F, 0x64, 0x5F, 0xC3, 0x5B, 0x38, 0x35, 0x52, 0x54, 0x4B,
                0x9B, 0xF5
            ]
        );
    }

    #[test]
    fn test_same_length_output() {
        for len in [0usize, 1, 255, 256, 257, 4096] {
            let data = vec![0xA5u8; len];
            let out = crypt(&data, b"key").unwrap();
            assert_eq!(out.len(), len);
        }
    }

    #[test]
    fn test_deterministic() {
        let data = b"the same bytes every time";
        let a = crypt(data, b"key").unwrap();
        let b = crypt(data, b"key").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fresh_state_per_call() {
        // A reused cipher instance continues its keystream; the free
        // function must not, since it keys a fresh instance per call.
        let mut cipher = StreamCipher::new(b"key").unwrap();
        let first = cipher.process(b"hello");
        let second = cipher.process(b"hello");
        assert_ne!(first, second);

        assert_eq!(crypt(b"hello", b"key").unwrap(), first);
    }

    proptest! {
        #[test]
        fn prop_round_trip(
            data in proptest::collection::vec(any::<u8>(), 0..2048),
            key in proptest::collection::vec(any::<u8>(), 1..64),
        ) {
            let once = crypt(&data, &key).unwrap();
            let twice = crypt(&once, &key).unwrap();
            prop_assert_eq!(twice, data);
        }
    }
}
