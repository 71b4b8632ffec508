//! Search client configuration.

use std::time::Duration;

/// Default base URL of the location backend API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Default HTTP timeout for search requests.
pub const DEFAULT_SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the HTTP search client.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Base URL of the backend API, without trailing slash.
    pub base_url: String,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_SEARCH_TIMEOUT,
        }
    }
}
