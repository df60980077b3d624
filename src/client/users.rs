//! Account registration and login

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use super::NewsClient;
use crate::article::User;
use crate::error::Result;
use crate::routes;

const REGISTER_FALLBACK: &str = "Failed to register user";
const LOGIN_FALLBACK: &str = "Failed to login";

/// Account operations the session holder depends on
///
/// [`NewsClient`] is the production implementation; tests substitute their
/// own to exercise session logic without a server.
#[async_trait]
pub trait AccountsApi: Send + Sync {
    /// Create a new account and return it
    async fn register(&self, username: &str, password: &str) -> Result<User>;

    /// Authenticate an existing account and return it
    async fn login(&self, username: &str, password: &str) -> Result<User>;
}

impl NewsClient {
    /// Register a new account
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Server`](crate::NewsError::Server) with status
    /// 400 and the message "Username already exists" when the name is taken.
    pub async fn register(&self, username: &str, password: &str) -> Result<User> {
        debug!("Registering account {}", username);

        let body = json!({ "username": username, "password": password });
        let user: User = self
            .transport()
            .post(routes::register(), &body, REGISTER_FALLBACK)
            .await?;

        debug!("Registered account {} (id {})", user.username, user.id);
        Ok(user)
    }

    /// Log in with username and password
    ///
    /// On success the server returns the account; pass its id to
    /// [`for_user`](NewsClient::for_user) to derive an authenticated client.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Server`](crate::NewsError::Server) with status
    /// 401 and the message "Invalid username or password" when the
    /// credentials do not match.
    pub async fn login(&self, username: &str, password: &str) -> Result<User> {
        debug!("Logging in as {}", username);

        let body = json!({ "username": username, "password": password });
        let user: User = self
            .transport()
            .post(routes::login(), &body, LOGIN_FALLBACK)
            .await?;

        debug!("Logged in as {} (id {})", user.username, user.id);
        Ok(user)
    }
}

#[async_trait]
impl AccountsApi for NewsClient {
    async fn register(&self, username: &str, password: &str) -> Result<User> {
        NewsClient::register(self, username, password).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<User> {
        NewsClient::login(self, username, password).await
    }
}
