//! HTTP transport
//!
//! One thin layer over reqwest shared by every API call: builds absolute
//! URLs from the configured base, attaches the `User-ID` header, and maps
//! non-2xx responses onto [`NewsError`](crate::NewsError). No retries and no
//! caching; each call is a single request.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::error::{NewsError, Result};

/// Header carrying the authenticated account id on protected routes
pub(crate) const USER_ID_HEADER: &str = "User-ID";

/// Shared request plumbing for the GameNews API
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: Client,
    base_url: String,
}

impl Transport {
    /// Build a transport from the given configuration
    ///
    /// Fails with [`NewsError::InvalidConfig`] when the HTTP client cannot
    /// be assembled from it.
    pub(crate) fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(user_id) = config.user_id {
            let value = HeaderValue::from_str(&user_id.to_string())
                .map_err(|e| NewsError::InvalidConfig(e.to_string()))?;
            headers.insert(USER_ID_HEADER, value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| NewsError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET a JSON resource
    pub(crate) async fn get<T: DeserializeOwned>(&self, route: &str, fallback: &str) -> Result<T> {
        let url = self.url(route);
        trace!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        handle_response(response, fallback).await
    }

    /// POST a JSON body and decode a JSON response
    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        route: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T> {
        let url = self.url(route);
        trace!("POST {}", url);
        let response = self.http.post(&url).json(body).send().await?;
        handle_response(response, fallback).await
    }

    /// DELETE with a JSON body and decode a JSON response
    pub(crate) async fn delete<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        route: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T> {
        let url = self.url(route);
        trace!("DELETE {}", url);
        let response = self.http.delete(&url).json(body).send().await?;
        handle_response(response, fallback).await
    }

    fn url(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }
}

/// Map a response onto the client error model
///
/// 2xx bodies are decoded as `T`. 404 becomes [`NewsError::NotFound`]; any
/// other non-2xx becomes [`NewsError::Server`]. The message comes from the
/// server's `{"error": ...}` body when present, otherwise `fallback`.
async fn handle_response<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body, fallback);
    debug!("request failed with {}: {}", status, message);

    if status == StatusCode::NOT_FOUND {
        return Err(NewsError::NotFound(message));
    }
    Err(NewsError::Server {
        status: status.as_u16(),
        message,
    })
}

/// Extract the `error` field from an error body, or fall back
fn error_message(body: &str, fallback: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.error.is_empty() => parsed.error,
        _ => fallback.to_string(),
    }
}
