//! # Snapshot Storage
//!
//! The durable key-value seam behind the persistence gateway.
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  SnapshotStore (trait)                                              │
//! │  ├── FileStore    one JSON file per key under the app data dir      │
//! │  └── MemoryStore  in-process map, used by tests                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The contract is deliberately tiny: `load(key)` returns the previously
//! saved payload or absent, `save(key, payload)` replaces it. Reads and
//! writes are not coordinated; a read racing a write may observe either
//! payload, which is acceptable for eventually consistent snapshotting.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::PersistResult;

/// Durable key-value storage for serialized snapshots.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Returns the payload previously saved under `key`, or `None`.
    async fn load(&self, key: &str) -> PersistResult<Option<String>>;

    /// Replaces the payload saved under `key`.
    async fn save(&self, key: &str, payload: &str) -> PersistResult<()>;
}

// =============================================================================
// File Store
// =============================================================================

/// File-backed snapshot storage: one `<key>.json` per key.
///
/// Writes go to a sibling `.tmp` file first and are renamed into place,
/// so a crash mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on the
    /// first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl SnapshotStore for FileStore {
    async fn load(&self, key: &str) -> PersistResult<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, key: &str, payload: &str) -> PersistResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        tokio::fs::write(&tmp, payload).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

// =============================================================================
// Memory Store
// =============================================================================

/// In-process snapshot storage for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn load(&self, key: &str) -> PersistResult<Option<String>> {
        Ok(self
            .entries
            .lock()
            .expect("entries mutex poisoned")
            .get(key)
            .cloned())
    }

    async fn save(&self, key: &str, payload: &str) -> PersistResult<()> {
        self.entries
            .lock()
            .expect("entries mutex poisoned")
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load("state").await.unwrap().is_none());

        store.save("state", "{\"a\":1}").await.unwrap();
        assert_eq!(store.load("state").await.unwrap().unwrap(), "{\"a\":1}");

        store.save("state", "{\"a\":2}").await.unwrap();
        assert_eq!(store.load("state").await.unwrap().unwrap(), "{\"a\":2}");
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert!(store.load("state").await.unwrap().is_none());

        store.save("state", "payload-1").await.unwrap();
        assert_eq!(store.load("state").await.unwrap().unwrap(), "payload-1");

        // No leftover temp file after a successful save
        assert!(!dir.path().join("state.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_file_store_creates_directory_lazily() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("wayfare");
        let store = FileStore::new(&nested);

        store.save("state", "payload").await.unwrap();
        assert_eq!(store.load("state").await.unwrap().unwrap(), "payload");
    }
}
