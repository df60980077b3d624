//! Bookmark store behavior tests
//!
//! The store is exercised against scripted BookmarksApi implementations so
//! mirror updates and the per-article mutation guard can be observed
//! deterministically, plus once against a real NewsClient over a mock
//! server to cover the whole stack.

use std::sync::Arc;

use async_trait::async_trait;
use gamenews_rs::{
    Article, BookmarkStore, BookmarksApi, ClientConfig, NewsClient, NewsError, Result,
};
use serde_json::json;
use tokio::sync::Semaphore;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn article(id: &str, title: &str) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        summary: String::new(),
        content: String::new(),
        image: String::new(),
        source: "IGN".to_string(),
        date: "2025-08-01".to_string(),
        url: None,
    }
}

/// API whose mutations park until the test releases them
///
/// Semaphore permits accumulate, so signalling before the other side is
/// parked cannot lose a wakeup.
struct GateApi {
    entered: Semaphore,
    release: Semaphore,
}

impl GateApi {
    fn new() -> Self {
        Self {
            entered: Semaphore::new(0),
            release: Semaphore::new(0),
        }
    }

    async fn wait_entered(&self) {
        self.entered.acquire().await.expect("gate closed").forget();
    }

    fn release_one(&self) {
        self.release.add_permits(1);
    }

    async fn park(&self) {
        self.entered.add_permits(1);
        self.release.acquire().await.expect("gate closed").forget();
    }
}

#[async_trait]
impl BookmarksApi for GateApi {
    async fn add_bookmark(&self, _article_id: &str) -> Result<()> {
        self.park().await;
        Ok(())
    }

    async fn remove_bookmark(&self, _article_id: &str) -> Result<()> {
        self.park().await;
        Ok(())
    }

    async fn fetch_bookmarks(&self) -> Result<Vec<Article>> {
        Ok(Vec::new())
    }
}

/// API that accepts every mutation and serves a fixed bookmark list
struct FixedApi(Vec<Article>);

#[async_trait]
impl BookmarksApi for FixedApi {
    async fn add_bookmark(&self, _article_id: &str) -> Result<()> {
        Ok(())
    }

    async fn remove_bookmark(&self, _article_id: &str) -> Result<()> {
        Ok(())
    }

    async fn fetch_bookmarks(&self) -> Result<Vec<Article>> {
        Ok(self.0.clone())
    }
}

/// API that rejects every mutation
struct FailingApi;

#[async_trait]
impl BookmarksApi for FailingApi {
    async fn add_bookmark(&self, _article_id: &str) -> Result<()> {
        Err(NewsError::Server {
            status: 500,
            message: "boom".to_string(),
        })
    }

    async fn remove_bookmark(&self, _article_id: &str) -> Result<()> {
        Err(NewsError::Server {
            status: 500,
            message: "boom".to_string(),
        })
    }

    async fn fetch_bookmarks(&self) -> Result<Vec<Article>> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn test_concurrent_mutation_on_same_id_rejected() {
    let store = Arc::new(BookmarkStore::new(GateApi::new()));

    let background = {
        let store = Arc::clone(&store);
        tokio::spawn(async move { store.add("a1", "First").await })
    };

    // Wait until the background add is parked inside the API call
    store.api().wait_entered().await;

    let err = store.add("a1", "Again").await.unwrap_err();
    assert!(matches!(err, NewsError::MutationInFlight(id) if id == "a1"));

    let err = store.remove("a1").await.unwrap_err();
    assert!(matches!(err, NewsError::MutationInFlight(_)));

    store.api().release_one();
    background.await.unwrap().unwrap();

    // The slot frees up once the first mutation settles
    assert!(store.is_bookmarked("a1"));
    store.api().release_one();
    store.remove("a1").await.unwrap();
    assert!(!store.is_bookmarked("a1"));
}

#[tokio::test]
async fn test_mutations_on_distinct_ids_run_concurrently() {
    let store = Arc::new(BookmarkStore::new(GateApi::new()));

    let first = {
        let store = Arc::clone(&store);
        tokio::spawn(async move { store.add("a1", "First").await })
    };
    store.api().wait_entered().await;

    // A different id is not blocked by the outstanding a1 mutation
    let second = {
        let store = Arc::clone(&store);
        tokio::spawn(async move { store.add("a2", "Second").await })
    };
    store.api().wait_entered().await;

    store.api().release_one();
    store.api().release_one();
    first.await.unwrap().unwrap();
    second.await.unwrap().unwrap();

    assert!(store.is_bookmarked("a1"));
    assert!(store.is_bookmarked("a2"));
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_guard_released_after_failed_mutation() {
    let store = BookmarkStore::new(FailingApi);

    let err = store.add("a1", "First").await.unwrap_err();
    assert!(matches!(err, NewsError::Server { .. }));

    // The failure released the slot: the next attempt reaches the API again
    let err = store.add("a1", "First").await.unwrap_err();
    assert!(matches!(err, NewsError::Server { .. }));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_store_over_real_client() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/protected/bookmarks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "srv1",
                "title": "Server-side pick",
                "summary": "",
                "content": "",
                "image": "",
                "source": "Polygon",
                "date": "2025-07-30",
                "url": null
            }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/protected/bookmarks"))
        .and(body_json(json!({"article_id": "a1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Bookmark added"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = NewsClient::new(ClientConfig::new(server.uri()).with_user(7)).unwrap();
    let store = BookmarkStore::new(client);

    store.refresh().await.unwrap();
    assert!(store.is_bookmarked("srv1"));
    assert_eq!(store.list()[0].title, "Server-side pick");

    store.add("a1", "Patch 2.1 lands").await.unwrap();
    assert_eq!(store.len(), 2);
    assert!(store.is_bookmarked("a1"));
}

#[tokio::test]
async fn test_failed_refresh_preserves_mirror() {
    let server = MockServer::start().await;

    // First call succeeds, later calls fail
    Mock::given(method("GET"))
        .and(path("/protected/bookmarks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "srv1",
                "title": "Keeper",
                "summary": "",
                "content": "",
                "image": "",
                "source": "IGN",
                "date": "2025-07-30",
                "url": null
            }
        ])))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/protected/bookmarks"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "db down"})))
        .mount(&server)
        .await;

    let client = NewsClient::new(ClientConfig::new(server.uri()).with_user(7)).unwrap();
    let store = BookmarkStore::new(client);

    store.refresh().await.unwrap();
    assert_eq!(store.len(), 1);

    let err = store.refresh().await.unwrap_err();
    assert!(matches!(err, NewsError::Server { status: 500, .. }));
    // Old mirror contents survive the failed refresh
    assert!(store.is_bookmarked("srv1"));
}

fn assert_insertion_order(bookmarks: &[gamenews_rs::Bookmark], expected: &[&str]) {
    let ids: Vec<&str> = bookmarks.iter().map(|b| b.article_id.as_str()).collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_mirror_preserves_insertion_order() {
    let store = BookmarkStore::new(FixedApi(Vec::new()));

    for (id, title) in [("a1", "First"), ("a2", "Second"), ("a3", "Third")] {
        store.add(id, title).await.unwrap();
    }

    assert_insertion_order(&store.list(), &["a1", "a2", "a3"]);

    // Removal keeps the relative order of the survivors
    store.remove("a2").await.unwrap();

    assert_insertion_order(&store.list(), &["a1", "a3"]);
}

#[tokio::test]
async fn test_refresh_replaces_local_view() {
    let api_articles = vec![article("x1", "Remote one"), article("x2", "Remote two")];
    let store = BookmarkStore::new(FixedApi(api_articles));
    store.add("local", "Locally added").await.unwrap();
    assert!(store.is_bookmarked("local"));

    // The server's list wins on refresh; entries it no longer has are gone
    store.refresh().await.unwrap();
    assert!(!store.is_bookmarked("local"));
    assert_insertion_order(&store.list(), &["x1", "x2"]);
}
