//! Local bookmark store
//!
//! Keeps the user's bookmarks in a local mirror backed by the remote API:
//!
//! - **Remote first**: `add`/`remove` call the API and only touch the
//!   mirror after the call succeeds, so a failed request never leaves a
//!   phantom entry behind.
//! - **Insertion order**: the mirror preserves the order bookmarks were
//!   added; `refresh` adopts the server's order wholesale.
//! - **Per-id guard**: a second `add`/`remove` for an article id whose
//!   mutation is still outstanding is rejected with
//!   [`NewsError::MutationInFlight`] instead of racing it. Mutations on
//!   distinct ids run concurrently.
//!
//! Reads ([`list`](BookmarkStore::list),
//! [`is_bookmarked`](BookmarkStore::is_bookmarked)) are purely local and
//! never block on the network; they reflect this store's view, not changes
//! made by other sessions.

use std::collections::HashSet;
use std::sync::Mutex;

use tracing::debug;

use crate::article::Bookmark;
use crate::client::{BookmarksApi, NewsClient};
use crate::error::{NewsError, Result};

/// Bookmark collection with a local mirror over a remote API
///
/// # Example
///
/// ```no_run
/// use gamenews_rs::{BookmarkStore, NewsClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = NewsClient::from_base_url("https://news.example.com/api")?.for_user(7)?;
/// let store = BookmarkStore::new(client);
///
/// store.refresh().await?;
/// store.add("a1", "Patch 2.1 lands").await?;
/// assert!(store.is_bookmarked("a1"));
/// # Ok(())
/// # }
/// ```
pub struct BookmarkStore<A: BookmarksApi = NewsClient> {
    api: A,
    mirror: Mutex<Vec<Bookmark>>,
    in_flight: Mutex<HashSet<String>>,
}

/// Releases the per-id mutation slot when the operation finishes
struct InFlightGuard<'a> {
    set: &'a Mutex<HashSet<String>>,
    article_id: String,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.set
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.article_id);
    }
}

impl<A: BookmarksApi> BookmarkStore<A> {
    /// Create a store with an empty mirror
    ///
    /// Call [`refresh`](BookmarkStore::refresh) to populate it from the
    /// server; a refresh failure is worth surfacing to the user but leaves
    /// the store usable.
    pub fn new(api: A) -> Self {
        Self {
            api,
            mirror: Mutex::new(Vec::new()),
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Replace the mirror with the server's current bookmark list
    ///
    /// On failure the mirror is left as it was and the error propagates.
    pub async fn refresh(&self) -> Result<()> {
        debug!("Refreshing bookmark mirror");

        let articles = self.api.fetch_bookmarks().await?;
        let bookmarks: Vec<Bookmark> = articles.iter().map(Bookmark::from).collect();

        debug!("Mirror now holds {} bookmarks", bookmarks.len());
        *self.lock_mirror() = bookmarks;
        Ok(())
    }

    /// Bookmark an article
    ///
    /// The remote call happens first; the mirror is only updated once it
    /// succeeds. Adding an id the mirror already holds refreshes its title
    /// rather than duplicating the entry.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::MutationInFlight`] when an `add` or `remove`
    /// for the same id is still outstanding.
    pub async fn add(&self, article_id: &str, title: &str) -> Result<()> {
        let _guard = self.begin_mutation(article_id)?;
        debug!("Adding bookmark {}", article_id);

        self.api.add_bookmark(article_id).await?;

        let mut mirror = self.lock_mirror();
        match mirror.iter_mut().find(|b| b.article_id == article_id) {
            Some(existing) => existing.title = title.to_string(),
            None => mirror.push(Bookmark::new(article_id, title)),
        }
        Ok(())
    }

    /// Remove an article's bookmark
    ///
    /// The remote call happens first; the mirror is only pruned once it
    /// succeeds. Removing an id the mirror does not hold is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::MutationInFlight`] when an `add` or `remove`
    /// for the same id is still outstanding.
    pub async fn remove(&self, article_id: &str) -> Result<()> {
        let _guard = self.begin_mutation(article_id)?;
        debug!("Removing bookmark {}", article_id);

        self.api.remove_bookmark(article_id).await?;

        self.lock_mirror().retain(|b| b.article_id != article_id);
        Ok(())
    }

    /// Snapshot of the mirror in insertion order
    pub fn list(&self) -> Vec<Bookmark> {
        self.lock_mirror().clone()
    }

    /// Whether the mirror currently holds the given article id
    ///
    /// Purely local; does not consult the server.
    pub fn is_bookmarked(&self, article_id: &str) -> bool {
        self.lock_mirror().iter().any(|b| b.article_id == article_id)
    }

    /// Number of bookmarks in the mirror
    pub fn len(&self) -> usize {
        self.lock_mirror().len()
    }

    /// Whether the mirror is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The API implementation this store mutates through
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Claim the per-id mutation slot, rejecting concurrent claims
    fn begin_mutation(&self, article_id: &str) -> Result<InFlightGuard<'_>> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        if !in_flight.insert(article_id.to_string()) {
            return Err(NewsError::MutationInFlight(article_id.to_string()));
        }
        Ok(InFlightGuard {
            set: &self.in_flight,
            article_id: article_id.to_string(),
        })
    }

    fn lock_mirror(&self) -> std::sync::MutexGuard<'_, Vec<Bookmark>> {
        self.mirror.lock().unwrap_or_else(|e| e.into_inner())
    }
}
