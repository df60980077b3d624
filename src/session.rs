//! Session lifecycle
//!
//! [`SessionHolder`] owns the "who is logged in" slot: it signs accounts in
//! and out through an [`AccountsApi`] and persists the result through a
//! [`SessionStore`] so a restart resumes the previous session.
//!
//! Persistence is strictly best-effort. A store that cannot be written
//! leaves the in-memory session intact; a blob that cannot be parsed is
//! discarded and the holder starts logged out. Neither failure is allowed
//! to take the session feature down with it.

use std::sync::Mutex;

use tracing::{debug, warn};

use crate::article::User;
use crate::client::{AccountsApi, NewsClient};
use crate::error::Result;
use crate::storage::SessionStore;

/// Holds the current session and keeps it in sync with a store
///
/// # Example
///
/// ```no_run
/// use gamenews_rs::{NewsClient, SessionHolder};
/// use gamenews_rs::storage::MemorySessionStore;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = NewsClient::from_base_url("https://news.example.com/api")?;
/// let session = SessionHolder::new(client, Box::new(MemorySessionStore::default()));
///
/// let user = session.login("ada", "hunter2").await?;
/// assert!(session.is_authenticated());
/// assert_eq!(session.current_user().map(|u| u.id), Some(user.id));
///
/// session.logout();
/// assert!(!session.is_authenticated());
/// # Ok(())
/// # }
/// ```
pub struct SessionHolder<A: AccountsApi = NewsClient> {
    api: A,
    store: Box<dyn SessionStore>,
    current: Mutex<Option<User>>,
}

impl<A: AccountsApi> SessionHolder<A> {
    /// Create a holder, restoring any session the store already has
    ///
    /// A blob that fails to parse is removed from the store so the next
    /// start does not trip over it again; the holder begins logged out. A
    /// store that cannot be read at all is treated as empty.
    pub fn new(api: A, store: Box<dyn SessionStore>) -> Self {
        let current = match store.read() {
            Ok(Some(blob)) => match serde_json::from_str::<User>(&blob) {
                Ok(user) => {
                    debug!("Restored session for {} (id {})", user.username, user.id);
                    Some(user)
                }
                Err(e) => {
                    warn!("Discarding corrupt session blob: {}", e);
                    if let Err(e) = store.clear() {
                        warn!("Failed to remove corrupt session blob: {}", e);
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Session store unreadable, starting logged out: {}", e);
                None
            }
        };

        Self {
            api,
            store,
            current: Mutex::new(current),
        }
    }

    /// Register a new account and sign in as it
    ///
    /// On success the session is persisted; a store failure is logged and
    /// the in-memory session kept.
    pub async fn register(&self, username: &str, password: &str) -> Result<User> {
        let user = self.api.register(username, password).await?;
        self.adopt(user.clone());
        Ok(user)
    }

    /// Sign in with existing credentials
    ///
    /// On success the session is persisted; a store failure is logged and
    /// the in-memory session kept.
    pub async fn login(&self, username: &str, password: &str) -> Result<User> {
        let user = self.api.login(username, password).await?;
        self.adopt(user.clone());
        Ok(user)
    }

    /// Sign out
    ///
    /// Purely local and always succeeds: the server holds no session state
    /// to invalidate. The store is cleared best-effort.
    pub fn logout(&self) {
        debug!("Logging out");
        *self.lock_current() = None;
        if let Err(e) = self.store.clear() {
            warn!("Failed to clear session store: {}", e);
        }
    }

    /// The signed-in account, if any
    pub fn current_user(&self) -> Option<User> {
        self.lock_current().clone()
    }

    /// The signed-in account id, if any
    pub fn user_id(&self) -> Option<i64> {
        self.lock_current().as_ref().map(|u| u.id)
    }

    /// Whether an account is signed in
    pub fn is_authenticated(&self) -> bool {
        self.lock_current().is_some()
    }

    /// The API implementation this holder authenticates through
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Install a session and persist it
    fn adopt(&self, user: User) {
        debug!("Session now {} (id {})", user.username, user.id);
        match serde_json::to_string(&user) {
            Ok(blob) => {
                if let Err(e) = self.store.write(&blob) {
                    warn!("Failed to persist session, keeping it in memory: {}", e);
                }
            }
            Err(e) => warn!("Failed to encode session, keeping it in memory: {}", e),
        }
        *self.lock_current() = Some(user);
    }

    fn lock_current(&self) -> std::sync::MutexGuard<'_, Option<User>> {
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionHolder<NewsClient> {
    /// Derive a client authenticated as the signed-in account
    ///
    /// Returns `None` while logged out. The derived client carries the
    /// `User-ID` header the protected bookmark routes require.
    pub fn authenticated_client(&self) -> Result<Option<NewsClient>> {
        match self.user_id() {
            Some(id) => Ok(Some(self.api.for_user(id)?)),
            None => Ok(None),
        }
    }
}
