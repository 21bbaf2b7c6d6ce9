//! Types for connecting to the Roster API.

/// Default API base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

/// Configuration for connecting to a Roster server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, including any mount prefix (e.g., "http://localhost:3001/api")
    pub url: String,
}

impl ClientConfig {
    /// Create a new config for the given base URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Error body returned by the server on failure.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
