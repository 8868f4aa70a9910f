//! Cartfeed receiver
//!
//! This crate provides the inbound HTTP boundary for the encrypted
//! datafeed: the feed endpoint itself and the capture-to-disk debug tool.

// Error types and result
pub mod error;
pub use error::{ReceiverError, Result};

// Configuration
pub mod config;
pub use config::ReceiverConfig;

// HTTP endpoints
pub mod api;
pub use api::{create_router, AppState};

// Capture-to-disk debug store
pub mod capture;
pub use capture::CaptureStore;
