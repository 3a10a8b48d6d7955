//! # Local Store
//!
//! A durable key-value store backed by a single JSON file - the desktop
//! stand-in for the browser's `localStorage`.
//!
//! ## Storage Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    LocalStore Semantics                                 │
//! │                                                                         │
//! │  File on disk: one JSON object, string keys → string values            │
//! │                                                                         │
//! │    { "shopflow-cart": "[{\"productId\":1,...}]" }                      │
//! │                                                                         │
//! │  get(key)    ── read file → parse → lookup                             │
//! │                 missing file, unreadable file, bad JSON → None         │
//! │                 (reads NEVER fail; they degrade to "nothing stored")   │
//! │                                                                         │
//! │  set(key, v) ── read-modify-write of the whole file, synchronous:      │
//! │                 the value is on disk before set() returns              │
//! │                 write failures DO surface as StoreError                │
//! │                                                                         │
//! │  remove(key) ── same read-modify-write, dropping the key               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Values are opaque strings; callers serialize their own payloads. That
//! keeps the file format identical in spirit to `localStorage`, where a
//! corrupt VALUE for one key must not take down the other keys.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::StoreResult;

/// File-backed key-value store with fail-soft reads.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    /// Opens a store at the given file path.
    ///
    /// The file is not touched until the first `set`; a missing file reads
    /// as an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        LocalStore { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Looks up a value. Missing or unreadable state degrades to `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.read_map().remove(key)
    }

    /// Stores a value, overwriting any previous one.
    ///
    /// The whole store file is rewritten synchronously; when this returns
    /// `Ok`, the value is on disk.
    pub fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    /// Removes a key. Removing an absent key still rewrites the file and
    /// succeeds.
    pub fn remove(&self, key: &str) -> StoreResult<()> {
        let mut map = self.read_map();
        map.remove(key);
        self.write_map(&map)
    }

    /// Reads the whole store. Any failure degrades to an empty map.
    fn read_map(&self) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // Missing file is the normal first-run state; anything else
            // gets a warning but still degrades to empty.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Local store unreadable; treating as empty");
                return BTreeMap::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Local store corrupt; treating as empty");
                BTreeMap::new()
            }
        }
    }

    /// Writes the whole store, creating parent directories on first use.
    fn write_map(&self, map: &BTreeMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(map)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> LocalStore {
        LocalStore::open(dir.path().join("shopflow.json"))
    }

    #[test]
    fn test_get_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.get("shopflow-cart"), None);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set("shopflow-cart", "[1,2,3]").unwrap();
        assert_eq!(store.get("shopflow-cart").as_deref(), Some("[1,2,3]"));

        // A fresh handle over the same file sees the persisted value
        let reopened = store_in(&dir);
        assert_eq!(reopened.get("shopflow-cart").as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn test_set_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set("key", "old").unwrap();
        store.set("key", "new").unwrap();
        assert_eq!(store.get("key").as_deref(), Some("new"));
    }

    #[test]
    fn test_keys_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();

        assert_eq!(store.get("a"), None);
        assert_eq!(store.get("b").as_deref(), Some("2"));
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        fs::write(store.path(), "{not json at all").unwrap();
        assert_eq!(store.get("shopflow-cart"), None);

        // Writing after corruption starts a fresh store
        store.set("shopflow-cart", "[]").unwrap();
        assert_eq!(store.get("shopflow-cart").as_deref(), Some("[]"));
    }

    #[test]
    fn test_remove_absent_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.remove("never-set").unwrap();
        assert_eq!(store.get("never-set"), None);
    }
}
