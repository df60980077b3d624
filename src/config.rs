//! Client configuration

use serde::{Deserialize, Serialize};

/// Default API base URL (a local GameNews server's `/api` mount)
const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// GameNews client configuration
///
/// Contains everything needed to reach a GameNews API deployment.
///
/// # Example
///
/// ```
/// use gamenews_rs::ClientConfig;
///
/// // Recommended: use the constructor methods
/// let config = ClientConfig::new("https://news.example.com/api");
///
/// // An authenticated configuration for the protected bookmark routes
/// let config = ClientConfig::new("https://news.example.com/api").with_user(7);
/// ```
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base URL without a trailing slash (e.g. "https://news.example.com/api")
    pub base_url: String,

    /// Authenticated user id, sent as the `User-ID` header on every request
    ///
    /// The protected bookmark routes reject requests without it. Leave `None`
    /// for anonymous use of the public article routes.
    #[serde(default)]
    pub user_id: Option<i64>,

    /// Optional whole-request timeout in seconds
    ///
    /// The client never retries; when this is `None` (the default) a request
    /// also has no deadline and runs until the server answers or the
    /// connection fails.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Create a configuration for the given API base URL
    ///
    /// A trailing slash on `base_url` is stripped so relative paths can be
    /// appended uniformly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            user_id: None,
            timeout_secs: None,
        }
    }

    /// Attach the authenticated user id sent on every request
    pub fn with_user(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Set a whole-request timeout in seconds
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
