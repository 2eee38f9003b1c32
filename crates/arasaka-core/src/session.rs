//! Persisted session: the unlock flag and the visitor counter.
//!
//! The session is stored as two string keys in a [`KeyValueStore`], the
//! same shape browser local storage uses:
//!
//! | Key | Value |
//! |-----|-------|
//! | `arasaka_unlocked` | `"true"` or absent |
//! | `arasaka_visitor_count` | decimal integer |
//!
//! Reads never fail: absent or unparseable values fall back to defaults.
//! Only one process is expected to write a given store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::StorageError;

/// Storage key for the unlock flag
pub const UNLOCKED_KEY: &str = "arasaka_unlocked";

/// Storage key for the visitor counter
pub const VISITOR_COUNT_KEY: &str = "arasaka_visitor_count";

/// The persisted session pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub unlocked: bool,
    pub visitor_count: u64,
}

/// A partial session write; `None` fields are left untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionPatch {
    pub unlocked: Option<bool>,
    pub visitor_count: Option<u64>,
}

impl SessionPatch {
    /// Patch for a confirmed unlock by a visitor bringing the count to `visitor_count`
    pub fn unlock(visitor_count: u64) -> Self {
        Self {
            unlocked: Some(true),
            visitor_count: Some(visitor_count),
        }
    }

    /// Patch for a logout; the visitor counter is kept
    pub fn logout() -> Self {
        Self {
            unlocked: Some(false),
            visitor_count: None,
        }
    }
}

/// String key-value storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Session load/save contract
pub trait SessionStore: Send + Sync {
    /// Read the session, substituting defaults for anything missing or malformed
    fn load(&self) -> SessionState;

    /// Merge-write the given fields
    fn save(&self, patch: SessionPatch) -> Result<(), StorageError>;
}

/// In-memory key-value store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw entries
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Snapshot of the raw entries
    pub fn entries(&self) -> BTreeMap<String, String> {
        self.entries.lock().clone()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// File-backed key-value store
///
/// Entries are kept in memory and the whole map is rewritten as a JSON
/// object on every change, via a temporary file and a rename. A change
/// whose write fails is undone in memory too, so reads always match disk.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`. A missing or unreadable file yields an
    /// empty store; the directory is created on first write.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = ?path, error = %e, "Ignoring malformed session file");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = ?path, "No session file, starting fresh");
                BTreeMap::new()
            }
            Err(e) => {
                warn!(path = ?path, error = %e, "Could not read session file");
                BTreeMap::new()
            }
        };

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock();
        let previous = entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush(&entries) {
            match previous {
                Some(previous) => entries.insert(key.to_string(), previous),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock();
        if let Some(previous) = entries.remove(key) {
            if let Err(e) = self.flush(&entries) {
                entries.insert(key.to_string(), previous);
                return Err(e);
            }
        }
        Ok(())
    }
}

/// [`SessionStore`] over the two local-storage keys
#[derive(Debug)]
pub struct LocalSession<S> {
    backend: S,
}

impl<S: KeyValueStore> LocalSession<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Session read failed, using default");
                None
            }
        }
    }
}

impl<S: KeyValueStore> SessionStore for LocalSession<S> {
    fn load(&self) -> SessionState {
        let unlocked = self.read(UNLOCKED_KEY).as_deref() == Some("true");
        let visitor_count = self
            .read(VISITOR_COUNT_KEY)
            .and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(count) => Some(count),
                Err(_) => {
                    debug!(raw = %raw, "Unparseable visitor count, using 0");
                    None
                }
            })
            .unwrap_or(0);

        SessionState {
            unlocked,
            visitor_count,
        }
    }

    fn save(&self, patch: SessionPatch) -> Result<(), StorageError> {
        match patch.unlocked {
            Some(true) => self.backend.set(UNLOCKED_KEY, "true")?,
            Some(false) => self.backend.remove(UNLOCKED_KEY)?,
            None => {}
        }
        if let Some(count) = patch.visitor_count {
            self.backend.set(VISITOR_COUNT_KEY, &count.to_string())?;
        }
        Ok(())
    }
}
