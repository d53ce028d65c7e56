//! Client configuration

use crate::error::ClientResult;
use crate::http::HttpClient;

/// Client configuration for connecting to the PMS
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Bearer token for authentication
    ///
    /// Issued and refreshed by an external auth collaborator; this client
    /// only forwards it.
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = if token.is_empty() { None } else { Some(token) };
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<HttpClient> {
        HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert!(config.token.is_none());
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("https://pms.example.com")
            .with_token("abc123")
            .with_timeout(10);
        assert_eq!(config.base_url, "https://pms.example.com");
        assert_eq!(config.token.as_deref(), Some("abc123"));
        assert_eq!(config.timeout, 10);
    }

    #[test]
    fn test_empty_token_is_none() {
        let config = ClientConfig::new("http://localhost:8080").with_token("");
        assert!(config.token.is_none());
    }
}
