//! Article listing, detail, search, and source operations
//!
//! All four routes are public on the server; no authentication is involved.

use super::NewsClient;
use crate::article::{Article, NewsFilter};
use crate::error::Result;
use crate::routes;
use tracing::debug;

const FETCH_NEWS_FALLBACK: &str = "Failed to fetch news";
const SEARCH_NEWS_FALLBACK: &str = "Failed to search news";
const FETCH_SOURCES_FALLBACK: &str = "Failed to fetch sources";

impl NewsClient {
    /// Fetch the current article list
    ///
    /// The filter's fields are forwarded to the server as `q` and `source`
    /// query parameters; how the server combines them is its contract, not
    /// the client's.
    ///
    /// # Arguments
    ///
    /// * `filter` - Query and source restrictions; `NewsFilter::default()`
    ///   lists everything
    ///
    /// # Returns
    ///
    /// Articles in the server's order, with `content` left empty.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Http`](crate::NewsError::Http) when the request
    /// cannot complete and [`NewsError::Server`](crate::NewsError::Server)
    /// when the server answers with a non-2xx status.
    pub async fn fetch_news(&self, filter: &NewsFilter) -> Result<Vec<Article>> {
        debug!("Fetching news (filter: {:?})", filter);

        let articles: Vec<Article> = self
            .transport()
            .get(&routes::news(filter), FETCH_NEWS_FALLBACK)
            .await?;

        debug!("Retrieved {} articles", articles.len());
        Ok(articles)
    }

    /// Fetch a single article with its full content
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::NotFound`](crate::NewsError::NotFound) when no
    /// article has the given id.
    pub async fn fetch_article(&self, id: &str) -> Result<Article> {
        debug!("Fetching article {}", id);

        self.transport()
            .get(&routes::article(id), FETCH_NEWS_FALLBACK)
            .await
    }

    /// Search articles by free-text query
    ///
    /// A query that is empty or all whitespace short-circuits to an empty
    /// result without touching the network; the server would reject it with
    /// a 400 otherwise.
    pub async fn search_news(&self, query: &str) -> Result<Vec<Article>> {
        let query = query.trim();
        if query.is_empty() {
            debug!("Skipping search for blank query");
            return Ok(Vec::new());
        }

        debug!("Searching news for {:?}", query);

        let articles: Vec<Article> = self
            .transport()
            .get(&routes::search(query), SEARCH_NEWS_FALLBACK)
            .await?;

        debug!("Search matched {} articles", articles.len());
        Ok(articles)
    }

    /// List the source outlets the server currently aggregates
    ///
    /// Useful for populating a source filter dropdown before calling
    /// [`fetch_news`](NewsClient::fetch_news) with a restriction.
    pub async fn list_sources(&self) -> Result<Vec<String>> {
        debug!("Fetching source list");

        let sources: Vec<String> = self
            .transport()
            .get(routes::sources(), FETCH_SOURCES_FALLBACK)
            .await?;

        debug!("Retrieved {} sources", sources.len());
        Ok(sources)
    }
}
