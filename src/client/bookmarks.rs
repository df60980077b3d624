//! Remote bookmark operations
//!
//! All three routes live under `/protected` and require the client to
//! carry a user id (see [`NewsClient::for_user`]); anonymous calls come
//! back as 401 "Authorization required".

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::NewsClient;
use crate::article::Article;
use crate::error::Result;
use crate::routes;

const ADD_BOOKMARK_FALLBACK: &str = "Failed to add bookmark";
const REMOVE_BOOKMARK_FALLBACK: &str = "Failed to remove bookmark";
const FETCH_BOOKMARKS_FALLBACK: &str = "Failed to fetch bookmarks";

/// Acknowledgement body returned by the mutating bookmark routes
#[derive(Debug, Deserialize)]
struct Ack {
    message: String,
}

/// Remote bookmark operations the bookmark store depends on
///
/// [`NewsClient`] is the production implementation; tests substitute their
/// own to exercise store logic without a server.
#[async_trait]
pub trait BookmarksApi: Send + Sync {
    /// Save a bookmark for the given article id
    async fn add_bookmark(&self, article_id: &str) -> Result<()>;

    /// Delete the bookmark for the given article id
    async fn remove_bookmark(&self, article_id: &str) -> Result<()>;

    /// Fetch the account's bookmarked articles
    async fn fetch_bookmarks(&self) -> Result<Vec<Article>>;
}

impl NewsClient {
    /// Save a bookmark for the given article id
    pub async fn add_bookmark(&self, article_id: &str) -> Result<()> {
        debug!("Adding bookmark for article {}", article_id);

        let body = json!({ "article_id": article_id });
        let ack: Ack = self
            .transport()
            .post(routes::bookmarks(), &body, ADD_BOOKMARK_FALLBACK)
            .await?;

        debug!("Server acknowledged: {}", ack.message);
        Ok(())
    }

    /// Delete the bookmark for the given article id
    ///
    /// Removing an id that was never bookmarked succeeds; the server treats
    /// the operation as idempotent.
    pub async fn remove_bookmark(&self, article_id: &str) -> Result<()> {
        debug!("Removing bookmark for article {}", article_id);

        let body = json!({ "article_id": article_id });
        let ack: Ack = self
            .transport()
            .delete(routes::bookmarks(), &body, REMOVE_BOOKMARK_FALLBACK)
            .await?;

        debug!("Server acknowledged: {}", ack.message);
        Ok(())
    }

    /// Fetch the account's bookmarked articles
    ///
    /// Returns full [`Article`] values; callers that only need id/title
    /// pairs can convert with `Bookmark::from`.
    pub async fn fetch_bookmarks(&self) -> Result<Vec<Article>> {
        debug!("Fetching bookmarks");

        let articles: Vec<Article> = self
            .transport()
            .get(routes::bookmarks(), FETCH_BOOKMARKS_FALLBACK)
            .await?;

        debug!("Retrieved {} bookmarks", articles.len());
        Ok(articles)
    }
}

#[async_trait]
impl BookmarksApi for NewsClient {
    async fn add_bookmark(&self, article_id: &str) -> Result<()> {
        NewsClient::add_bookmark(self, article_id).await
    }

    async fn remove_bookmark(&self, article_id: &str) -> Result<()> {
        NewsClient::remove_bookmark(self, article_id).await
    }

    async fn fetch_bookmarks(&self) -> Result<Vec<Article>> {
        NewsClient::fetch_bookmarks(self).await
    }
}
