//! Session persistence backends
//!
//! A session is persisted as one opaque string blob in a single slot: write
//! replaces it, clear empties it, read returns it if present. Backends only
//! move the blob around; what it contains is the session holder's business.
//!
//! Two backends ship with the crate:
//!
//! - [`FileSessionStore`]: one JSON file on disk, surviving restarts
//! - [`MemorySessionStore`]: process-local slot for tests and ephemeral use
//!
//! # Example
//!
//! ```
//! use gamenews_rs::storage::{MemorySessionStore, SessionStore};
//!
//! let store = MemorySessionStore::default();
//! assert!(store.read().unwrap().is_none());
//!
//! store.write(r#"{"id":1,"username":"ada"}"#).unwrap();
//! assert!(store.read().unwrap().is_some());
//!
//! store.clear().unwrap();
//! assert!(store.read().unwrap().is_none());
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

/// Trait for session persistence backends
///
/// Implementations must be usable behind a shared reference from multiple
/// threads; the session holder calls them from async contexts.
pub trait SessionStore: Send + Sync {
    /// Read the stored blob, if one exists
    ///
    /// Absence is `Ok(None)`, not an error.
    fn read(&self) -> io::Result<Option<String>>;

    /// Replace the stored blob
    fn write(&self, blob: &str) -> io::Result<()>;

    /// Remove the stored blob
    ///
    /// Clearing an already-empty store succeeds.
    fn clear(&self) -> io::Result<()>;
}

/// Session store backed by a single file on disk
///
/// The parent directory is created on first write. A missing file reads as
/// an empty store.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store writing to the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the platform's per-user data directory
    ///
    /// Resolves to `<data_dir>/gamenews/session.json` (e.g.
    /// `~/.local/share/gamenews/session.json` on Linux). Returns `None` when
    /// the platform exposes no data directory.
    pub fn default_location() -> Option<Self> {
        let path = dirs::data_dir()?.join("gamenews").join("session.json");
        Some(Self::new(path))
    }

    /// The file this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, blob: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, blob)?;
        debug!("session written to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-memory session store
///
/// Holds the blob in a process-local slot. Nothing survives the process;
/// useful in tests and for deployments that must never touch disk.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<String>>,
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn write(&self, blob: &str) -> io::Result<()> {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(blob.to_string());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}
