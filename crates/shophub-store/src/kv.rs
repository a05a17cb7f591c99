//! # Key-Value Store Adapter
//!
//! The persistence boundary: generic get/set/remove over named keys, with
//! structured records serialized losslessly as JSON documents.
//!
//! ## Adapter Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storage Behind A Narrow API                          │
//! │                                                                         │
//! │  CommerceState / OrderLedger / LocalCredentialStore                    │
//! │       │                                                                 │
//! │       │  store.get_as::<Cart>(StorageKey::Cart)                        │
//! │       ▼                                                                 │
//! │  KeyValueStore (trait)                                                 │
//! │  ├── get(key)    → Option<Value>                                       │
//! │  ├── set(key, value)                                                   │
//! │  └── remove(key)                                                       │
//! │       │                                                                 │
//! │       ├──► MemoryStore    (tests, ephemeral sessions)                  │
//! │       └──► JsonFileStore  (one document per key in the data dir)       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Callers never see paths or file handles                             │
//! │  • Backends swap without touching the container                        │
//! │  • Round-trip identity: write then read yields an equal value          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Storage Keys
// =============================================================================

/// The named slots the commerce core persists under.
///
/// Closed set: every persisted document belongs to exactly one of these,
/// so a backend never has to deal with arbitrary key strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// The shopping cart.
    Cart,
    /// The wishlist.
    Wishlist,
    /// The active session. Absent while signed out.
    Session,
    /// The order ledger, most-recent-first.
    Orders,
    /// The draft profile/shipping info for checkout prefill.
    UserInfo,
    /// The registered user list (mock credential backend).
    Users,
}

impl StorageKey {
    /// The on-disk / on-wire name of the key.
    pub const fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Cart => "shophub_cart",
            StorageKey::Wishlist => "shophub_wishlist",
            StorageKey::Session => "shophub_current_user",
            StorageKey::Orders => "shophub_orders",
            StorageKey::UserInfo => "shophub_user_info",
            StorageKey::Users => "shophub_users",
        }
    }

    /// All keys, for enumeration in tooling and tests.
    pub const ALL: [StorageKey; 6] = [
        StorageKey::Cart,
        StorageKey::Wishlist,
        StorageKey::Session,
        StorageKey::Orders,
        StorageKey::UserInfo,
        StorageKey::Users,
    ];
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Key-Value Store Trait
// =============================================================================

/// The persistence contract.
///
/// Object-safe on purpose: the container holds an `Arc<dyn KeyValueStore>`
/// and never knows which backend it is talking to. Typed access goes
/// through [`KeyValueStoreExt`].
pub trait KeyValueStore: Send + Sync {
    /// Reads the document stored under `key`, or `None` if absent.
    fn get(&self, key: StorageKey) -> StoreResult<Option<Value>>;

    /// Writes the document stored under `key`, replacing any prior value.
    fn set(&self, key: StorageKey, value: Value) -> StoreResult<()>;

    /// Removes the document stored under `key`. Absent keys are a no-op.
    fn remove(&self, key: StorageKey) -> StoreResult<()>;
}

/// Typed helpers over the raw document API.
pub trait KeyValueStoreExt: KeyValueStore {
    /// Reads and decodes the document under `key`.
    ///
    /// Absent key → `Ok(None)`. Present but undecodable →
    /// [`StoreError::Corrupt`].
    fn get_as<T: DeserializeOwned>(&self, key: StorageKey) -> StoreResult<Option<T>> {
        match self.get(key)? {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| StoreError::corrupt(key.as_str(), e)),
            None => Ok(None),
        }
    }

    /// Encodes and writes a record under `key`.
    fn set_as<T: Serialize>(&self, key: StorageKey, value: &T) -> StoreResult<()> {
        let value = serde_json::to_value(value).map_err(StoreError::serialize)?;
        self.set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

// =============================================================================
// Memory Store
// =============================================================================

/// In-memory backend: a HashMap behind a Mutex.
///
/// Used by tests and by ephemeral sessions that should not touch disk.
/// Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<StorageKey, Value>>,
}

impl MemoryStore {
    /// Creates a new empty memory store.
    pub fn new() -> Self {
        MemoryStore {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: StorageKey) -> StoreResult<Option<Value>> {
        let entries = self.entries.lock().expect("memory store mutex poisoned");
        Ok(entries.get(&key).cloned())
    }

    fn set(&self, key: StorageKey, value: Value) -> StoreResult<()> {
        let mut entries = self.entries.lock().expect("memory store mutex poisoned");
        entries.insert(key, value);
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> StoreResult<()> {
        let mut entries = self.entries.lock().expect("memory store mutex poisoned");
        entries.remove(&key);
        Ok(())
    }
}

// =============================================================================
// JSON File Store
// =============================================================================

/// File-backed backend: one JSON document per key in a data directory.
///
/// ## Write Durability
/// Writes go to a `.tmp` sibling first and are renamed into place, so a
/// crash mid-write leaves the previous document intact rather than a
/// truncated one.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .map_err(|e| StoreError::unavailable(dir.display().to_string(), e))?;

        debug!(dir = %dir.display(), "opened json file store");
        Ok(JsonFileStore { dir })
    }

    /// Opens the store in the platform data directory.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/in.shophub.shophub/`
    /// - **Windows**: `%APPDATA%\shophub\shophub\data\`
    /// - **Linux**: `~/.local/share/shophub/`
    ///
    /// ## Development Override
    /// Set `SHOPHUB_DATA_DIR` to use a custom directory.
    pub fn open_default() -> StoreResult<Self> {
        if let Ok(dir) = std::env::var("SHOPHUB_DATA_DIR") {
            return JsonFileStore::new(dir);
        }

        let proj_dirs = ProjectDirs::from("in", "shophub", "shophub")
            .ok_or_else(|| StoreError::unavailable("data dir", "no home directory"))?;

        JsonFileStore::new(proj_dirs.data_dir())
    }

    /// The directory documents live in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: StorageKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: StorageKey) -> StoreResult<Option<Value>> {
        let path = self.path(key);

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::unavailable(key.as_str(), e)),
        };

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| StoreError::corrupt(key.as_str(), e))
    }

    fn set(&self, key: StorageKey, value: Value) -> StoreResult<()> {
        let path = self.path(key);
        let tmp = path.with_extension("json.tmp");

        // to_string_pretty cannot fail on a Value
        let text = serde_json::to_string_pretty(&value).map_err(StoreError::serialize)?;

        std::fs::write(&tmp, text).map_err(|e| StoreError::unavailable(key.as_str(), e))?;
        std::fs::rename(&tmp, &path).map_err(|e| StoreError::unavailable(key.as_str(), e))?;

        debug!(key = %key, "persisted document");
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> StoreResult<()> {
        match std::fs::remove_file(self.path(key)) {
            Ok(()) => {
                debug!(key = %key, "removed document");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::unavailable(key.as_str(), e)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
