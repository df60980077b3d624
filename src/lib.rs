#![doc = include_str!("../README.md")]

/// Article, user, and bookmark data structures
pub mod article;
/// Local bookmark store with a remote-first mirror
pub mod bookmarks;
mod client;
mod config;
mod error;
/// Request lifecycle state for UI layers
pub mod request;
mod routes;
/// Session sign-in, sign-out, and restore
pub mod session;
/// Session persistence backends
pub mod storage;
mod transport;

pub use article::{Article, Bookmark, NewsFilter, User};
pub use bookmarks::BookmarkStore;
pub use client::{AccountsApi, BookmarksApi, NewsClient};
pub use config::ClientConfig;
pub use error::{NewsError, Result};
pub use request::RequestState;
pub use session::SessionHolder;
pub use storage::{FileSessionStore, MemorySessionStore, SessionStore};
