//! # Local Storage
//!
//! Persistent key-value storage and the auth-token wrapper built on it.
//!
//! - [`KeyValueStore`]: async string key-value trait (the app's only durable local state)
//! - [`FileKeyValueStore`]: JSON object in a single file, rewritten atomically
//! - [`MemoryKeyValueStore`]: process-local map for tests and throwaway sessions
//! - [`TokenStorage`]: `save`/`get`/`remove` of the bearer token under [`TOKEN_KEY`]
//!
//! `TokenStorage` never returns errors. A failed read means "logged out", a failed
//! write or delete is logged and otherwise ignored.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tokio::sync::Mutex;

/// Key the bearer token is stored under.
pub const TOKEN_KEY: &str = "voxia_token";

/// Key-value storage errors
#[derive(Debug)]
pub enum StorageError {
    /// File I/O error
    Io(io::Error),
    /// Backing file exists but is not a JSON object of strings
    Corrupt(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "I/O error: {}", e),
            StorageError::Corrupt(msg) => write!(f, "Corrupt storage file: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(err: io::Error) -> Self {
        StorageError::Io(err)
    }
}

/// Persistent string key-value storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Removing a missing key is not an error.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Key-value store persisted as one JSON object in a file.
///
/// Writes go to a sibling temp file which is then renamed over the original, so a
/// crash mid-write leaves the previous contents intact.
pub struct FileKeyValueStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within the process
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(BTreeMap::new()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| StorageError::Corrupt(e.to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_vec_pretty(items).map_err(|e| StorageError::Corrupt(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.load().await?;
        items.insert(key.to_string(), value.to_string());
        self.persist(&items).await
    }

    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load().await?.remove(key))
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.load().await?;
        if items.remove(key).is_some() {
            self.persist(&items).await?;
        }
        Ok(())
    }
}

/// In-memory key-value store.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.read().get(key).cloned())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.write().remove(key);
        Ok(())
    }
}

/// Bearer-token persistence under a fixed key.
#[derive(Clone)]
pub struct TokenStorage {
    store: Arc<dyn KeyValueStore>,
}

impl TokenStorage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Token storage backed by a JSON file.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileKeyValueStore::new(path)))
    }

    /// Token storage that forgets everything when dropped.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryKeyValueStore::new()))
    }

    pub async fn save(&self, token: &str) {
        if let Err(e) = self.store.set_item(TOKEN_KEY, token).await {
            tracing::warn!(error = %e, "Failed to save token");
        }
    }

    /// Stored token, or `None` when logged out or unreadable.
    pub async fn get(&self) -> Option<String> {
        match self.store.get_item(TOKEN_KEY).await {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read token");
                None
            }
        }
    }

    pub async fn remove(&self) {
        if let Err(e) = self.store.remove_item(TOKEN_KEY).await {
            tracing::warn!(error = %e, "Failed to remove token");
        }
    }
}
