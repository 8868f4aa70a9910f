//! HTTP transport for the vendor API
//!
//! This module provides the client issuing one form-encoded POST per
//! command invocation, after validating the supplied arguments against
//! the command catalog.

use std::collections::HashMap;
use std::time::Duration;

use thiserror::Error;

use crate::catalog;

/// Error type for client operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Command is not in the catalog
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    /// Argument is not accepted by the command
    #[error("Unknown argument '{0}'")]
    UnknownArgument(String),

    /// Required argument was not supplied
    #[error("Required argument '{0}' must be supplied")]
    MissingArgument(String),

    /// Argument token is not in name=value form
    #[error("Invalid argument '{0}': arguments must be in the form of name=value")]
    InvalidArgument(String),
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client for the outbound vendor API
pub struct ApiClient {
    /// Base URL of the vendor API, without the /api suffix
    base_url: String,

    /// Shared secret token sent with every request
    api_token: String,

    /// HTTP client
    http: reqwest::Client,

    /// Request timeout
    timeout: Duration,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.to_string(),
            http: reqwest::Client::new(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send one command to the vendor API
    ///
    /// Validates the supplied arguments against the catalog, injects the
    /// shared token and the action name, and returns the raw response
    /// body. The response markup is the caller's to interpret.
    pub async fn send(&self, command: &str, args: &HashMap<String, String>) -> Result<String> {
        let cmd = catalog::find_command(command)
            .ok_or_else(|| ClientError::UnknownCommand(command.to_string()))?;
        cmd.validate_arguments(args)?;

        let mut form: Vec<(&str, &str)> = args
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        form.push(("api_token", self.api_token.as_str()));
        form.push(("api_action", cmd.name));

        let response = self
            .http
            .post(format!("{}/api", self.base_url))
            .timeout(self.timeout)
            .form(&form)
            .send()
            .await?;

        Ok(response.text().await?)
    }
}

/// Parse name=value command-line tokens into an argument map
pub fn parse_arguments(tokens: &[String]) -> Result<HashMap<String, String>> {
    let mut args = HashMap::new();
    for token in tokens {
        let (name, value) = token
            .split_once('=')
            .ok_or_else(|| ClientError::InvalidArgument(token.clone()))?;
        args.insert(name.to_string(), value.to_string());
    }
    Ok(args)
}
