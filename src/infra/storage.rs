//! Persisted client state.
//!
//! The console keeps a handful of string keys outside process memory so a
//! session survives a restart: the auth token, the serialized current
//! user, and the theme choice. `ClientStorage` is that surface; the
//! file-backed implementation flushes on every write.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::warn;

use crate::cache::lock::{rw_read, rw_write};

/// Well-known storage keys.
pub mod keys {
    pub const AUTH_TOKEN: &str = "authToken";
    pub const USER: &str = "user";
    pub const THEME: &str = "theme";
}

pub trait ClientStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory storage for tests and ephemeral embeddings.
#[derive(Default)]
pub struct MemoryStorage {
    values: RwLock<HashMap<String, String>>,
}

impl ClientStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        rw_read(&self.values, "storage.get").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        rw_write(&self.values, "storage.set").insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        rw_write(&self.values, "storage.remove").remove(key);
    }
}

/// JSON-file-backed storage. Writes must never fail the caller (logout in
/// particular has no failure path), so I/O problems are logged and
/// swallowed; the in-memory view stays authoritative for the process.
pub struct FileStorage {
    path: PathBuf,
    values: RwLock<HashMap<String, String>>,
}

impl FileStorage {
    /// Load existing state from `path`; a missing or corrupt file starts
    /// empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(
                    error = %err,
                    path = %path.display(),
                    "corrupt client storage file; starting empty"
                );
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self {
            path,
            values: RwLock::new(values),
        }
    }

    fn flush(&self, values: &HashMap<String, String>) {
        let serialized = match serde_json::to_string_pretty(values) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!(error = %err, "failed to serialize client storage");
                return;
            }
        };
        if let Err(err) = std::fs::write(&self.path, serialized) {
            warn!(
                error = %err,
                path = %self.path.display(),
                "failed to flush client storage"
            );
        }
    }
}

impl ClientStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        rw_read(&self.values, "storage.get").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = rw_write(&self.values, "storage.set");
        values.insert(key.to_string(), value.to_string());
        self.flush(&values);
    }

    fn remove(&self, key: &str) {
        let mut values = rw_write(&self.values, "storage.remove");
        values.remove(key);
        self.flush(&values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips() {
        let storage = MemoryStorage::default();
        assert!(storage.get(keys::AUTH_TOKEN).is_none());

        storage.set(keys::AUTH_TOKEN, "tok");
        assert_eq!(storage.get(keys::AUTH_TOKEN).as_deref(), Some("tok"));

        storage.remove(keys::AUTH_TOKEN);
        assert!(storage.get(keys::AUTH_TOKEN).is_none());
    }

    #[test]
    fn file_storage_survives_a_reload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");

        let storage = FileStorage::open(&path);
        storage.set(keys::AUTH_TOKEN, "tok");
        storage.set(keys::THEME, "dark");

        let reloaded = FileStorage::open(&path);
        assert_eq!(reloaded.get(keys::AUTH_TOKEN).as_deref(), Some("tok"));
        assert_eq!(reloaded.get(keys::THEME).as_deref(), Some("dark"));
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{not json").expect("write");

        let storage = FileStorage::open(&path);
        assert!(storage.get(keys::AUTH_TOKEN).is_none());
    }

    #[test]
    fn remove_is_persisted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");

        let storage = FileStorage::open(&path);
        storage.set(keys::USER, "{}");
        storage.remove(keys::USER);

        let reloaded = FileStorage::open(&path);
        assert!(reloaded.get(keys::USER).is_none());
    }
}
