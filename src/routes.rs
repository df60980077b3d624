//! API route construction
//!
//! Builds the path-and-query part of every endpoint URL. Kept separate from
//! the transport so encoding rules are testable without a server.

use crate::article::NewsFilter;

/// Build the news listing route, applying the filter as query parameters
///
/// Parameters are appended only when set, so an empty filter yields the bare
/// `/news` path.
pub fn news(filter: &NewsFilter) -> String {
    let mut route = String::from("/news");
    let mut sep = '?';
    if let Some(query) = &filter.query {
        route.push(sep);
        route.push_str("q=");
        route.push_str(&urlencoding::encode(query));
        sep = '&';
    }
    if let Some(source) = &filter.source {
        route.push(sep);
        route.push_str("source=");
        route.push_str(&urlencoding::encode(source));
    }
    route
}

/// Build the single-article route
///
/// The id is percent-encoded; scraped ids can contain slashes and spaces.
pub fn article(id: &str) -> String {
    format!("/news/{}", urlencoding::encode(id))
}

/// Build the search route
pub fn search(query: &str) -> String {
    format!("/search?q={}", urlencoding::encode(query))
}

/// Build the source listing route
pub fn sources() -> &'static str {
    "/sources"
}

/// Build the registration route
pub fn register() -> &'static str {
    "/users/register"
}

/// Build the login route
pub fn login() -> &'static str {
    "/users/login"
}

/// Build the bookmark collection route (add, remove, and list share it)
pub fn bookmarks() -> &'static str {
    "/protected/bookmarks"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_without_filter() {
        assert_eq!(news(&NewsFilter::default()), "/news");
    }

    #[test]
    fn test_news_with_source() {
        let filter = NewsFilter::default().with_source("GameSpot");
        assert_eq!(news(&filter), "/news?source=GameSpot");
    }

    #[test]
    fn test_news_with_query_and_source() {
        let filter = NewsFilter::default().with_query("elden ring").with_source("IGN");
        assert_eq!(news(&filter), "/news?q=elden%20ring&source=IGN");
    }

    #[test]
    fn test_article_encodes_id() {
        assert_eq!(article("abc123"), "/news/abc123");
        assert_eq!(article("feed/42 beta"), "/news/feed%2F42%20beta");
    }

    #[test]
    fn test_search_encodes_query() {
        assert_eq!(search("zelda"), "/search?q=zelda");
        assert_eq!(search("tears of the kingdom"), "/search?q=tears%20of%20the%20kingdom");
        assert_eq!(search("q&a"), "/search?q=q%26a");
    }

    #[test]
    fn test_fixed_routes() {
        assert_eq!(sources(), "/sources");
        assert_eq!(register(), "/users/register");
        assert_eq!(login(), "/users/login");
        assert_eq!(bookmarks(), "/protected/bookmarks");
    }
}
