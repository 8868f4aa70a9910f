//! Capture-to-disk debug store
//!
//! This module persists one inbound feed request under fixed filenames so
//! the payload can be replayed in tests: the raw request representation,
//! the ciphertext as received, and the core-decrypted plaintext. A prior
//! capture is never silently overwritten unless explicitly allowed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ReceiverConfig;
use crate::error::{ReceiverError, Result};

/// Store writing one named capture under a capture directory
#[derive(Debug, Clone)]
pub struct CaptureStore {
    /// Directory receiving the capture files
    dir: PathBuf,

    /// Base name of the capture files
    name: String,

    /// Whether an existing capture may be overwritten
    allow_overwrite: bool,
}

impl CaptureStore {
    /// Create a new capture store
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
            allow_overwrite: false,
        }
    }

    /// Create a capture store from the receiver configuration
    pub fn from_config(config: &ReceiverConfig) -> Self {
        Self {
            dir: config.capture_dir.clone(),
            name: config.capture_name.clone(),
            allow_overwrite: config.allow_overwrite,
        }
    }

    /// Allow overwriting an existing capture
    pub fn with_overwrite(mut self, allow: bool) -> Self {
        self.allow_overwrite = allow;
        self
    }

    /// Path of one capture file
    fn path(&self, extension: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", self.name, extension))
    }

    /// Persist the raw request representation
    pub fn save_request(&self, repr: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path("request"), repr)?;
        Ok(())
    }

    /// Persist the ciphertext as received and the decrypted plaintext
    ///
    /// Fails with `AlreadyCaptured` when a capture with this name exists
    /// and overwriting is not allowed.
    pub fn save_payload(&self, ciphertext: &[u8], plaintext: &[u8]) -> Result<()> {
        let encrypted_path = self.path("encrypted");
        if !self.allow_overwrite && encrypted_path.exists() {
            return Err(ReceiverError::AlreadyCaptured);
        }

        fs::create_dir_all(&self.dir)?;
        fs::write(&encrypted_path, ciphertext)?;
        fs::write(self.path("plaintext"), plaintext)?;
        Ok(())
    }

    /// Whether a capture with this name already exists
    pub fn exists(&self) -> bool {
        self.path("encrypted").exists()
    }

    /// The capture directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
