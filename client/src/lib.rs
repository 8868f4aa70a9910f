//! Client library for the outbound Cartfeed vendor API
//!
//! This crate provides the catalog of named remote commands, argument
//! validation against that catalog, and the HTTP transport issuing one
//! POST per invocation.

pub mod api;
pub mod catalog;

pub use api::{ApiClient, ClientError, Result};
pub use catalog::{find_command, ApiArg, ApiCommand, COMMANDS};
