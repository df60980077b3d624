//! GameNews API client

mod articles;
mod bookmarks;
mod users;

pub use bookmarks::BookmarksApi;
pub use users::AccountsApi;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::transport::Transport;

/// Async client for the GameNews aggregation API
///
/// Cloning is cheap; clones share the underlying connection pool, so a
/// single client can be handed to every view that needs one.
///
/// # Example
///
/// ```no_run
/// use gamenews_rs::{ClientConfig, NewsClient, NewsFilter};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = NewsClient::new(ClientConfig::new("https://news.example.com/api"))?;
///
/// let articles = client.fetch_news(&NewsFilter::default()).await?;
/// println!("{} articles", articles.len());
///
/// let user = client.login("ada", "hunter2").await?;
/// let client = client.for_user(user.id)?;
/// client.add_bookmark(&articles[0].id).await?;
/// # Ok(())
/// # }
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct NewsClient {
    /// Shared HTTP plumbing
    transport: Transport,
    /// Configuration this client was built from
    config: ClientConfig,
}

impl NewsClient {
    /// Create a client from the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = Transport::new(&config)?;
        Ok(Self { transport, config })
    }

    /// Create an anonymous client for the given API base URL
    pub fn from_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(base_url))
    }

    /// The configuration this client was built from
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Derive a client that authenticates as the given user
    ///
    /// Every request from the derived client carries the `User-ID` header
    /// the protected bookmark routes require. The original client is
    /// untouched, so anonymous and authenticated clients can coexist.
    pub fn for_user(&self, user_id: i64) -> Result<Self> {
        Self::new(self.config.clone().with_user(user_id))
    }

    /// Drop the authenticated user, returning an anonymous client
    pub fn anonymous(&self) -> Result<Self> {
        let mut config = self.config.clone();
        config.user_id = None;
        Self::new(config)
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }
}
