//! Article, user, and bookmark data structures
//!
//! These mirror the JSON bodies of the GameNews API. Field names match the
//! wire format directly, so the structs double as serde (de)serialization
//! targets for both requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single aggregated news article
///
/// # Examples
///
/// ```
/// use gamenews_rs::Article;
///
/// let json = r#"{
///     "id": "a1",
///     "title": "Patch 2.1 lands",
///     "summary": "Balance changes and a new map.",
///     "content": "",
///     "image": "https://cdn.example.com/a1.jpg",
///     "source": "IGN",
///     "date": "2025-03-14",
///     "url": "https://example.com/a1"
/// }"#;
///
/// let article: Article = serde_json::from_str(json).unwrap();
/// assert_eq!(article.source, "IGN");
/// assert!(article.published_date().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Server-assigned article identifier
    pub id: String,
    /// Headline
    pub title: String,
    /// Short teaser shown in list views
    pub summary: String,
    /// Full article text
    ///
    /// List endpoints return this empty to keep payloads small; only the
    /// single-article endpoint populates it.
    pub content: String,
    /// Cover image URL (may be empty when the source had none)
    pub image: String,
    /// Name of the originating outlet (e.g. "IGN", "GameSpot")
    pub source: String,
    /// Publication date in `YYYY-MM-DD` form
    pub date: String,
    /// Link to the article on the source site
    #[serde(default)]
    pub url: Option<String>,
}

impl Article {
    /// Parse the publication date
    ///
    /// Returns `None` when the server sent a date outside the `YYYY-MM-DD`
    /// format instead of failing the whole deserialization.
    pub fn published_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// An authenticated account as returned by register/login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric account id, sent back as the `User-ID` header on protected routes
    pub id: i64,
    /// Account name chosen at registration
    pub username: String,
}

/// A saved reference to an article
///
/// Bookmarks carry the title alongside the id so saved lists render without
/// re-resolving every article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Id of the bookmarked article
    pub article_id: String,
    /// Headline at the time the bookmark was created
    pub title: String,
}

impl Bookmark {
    /// Create a bookmark for the given article id and title
    pub fn new(article_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            article_id: article_id.into(),
            title: title.into(),
        }
    }
}

impl From<&Article> for Bookmark {
    fn from(article: &Article) -> Self {
        Self::new(&article.id, &article.title)
    }
}

/// Filter for article listing
///
/// Both fields are forwarded to the server verbatim; how they combine is the
/// server's call. An empty filter lists everything.
///
/// # Examples
///
/// ```
/// use gamenews_rs::NewsFilter;
///
/// let filter = NewsFilter::default().with_source("GameSpot");
/// assert_eq!(filter.source.as_deref(), Some("GameSpot"));
/// ```
#[must_use]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsFilter {
    /// Free-text query
    pub query: Option<String>,
    /// Restrict results to a single source outlet
    pub source: Option<String>,
}

impl NewsFilter {
    /// Set the free-text query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Restrict to one source outlet
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// True when neither field is set
    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.source.is_none()
    }
}
