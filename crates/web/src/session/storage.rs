//! Persisted session storage.
//!
//! A session context keeps at most one serialized principal under a fixed
//! key. Storage backends only know about opaque keys and JSON strings.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading, writing, or removing a stored entry failed.
    #[error("storage I/O error for key {key:?}: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    fn io(key: &str, source: io::Error) -> Self {
        Self::Io {
            key: key.to_owned(),
            source,
        }
    }
}

/// Key-value storage for serialized principals.
pub trait SessionStorage: Send + Sync {
    /// Read the entry stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the entry under `key`. Removing a missing entry is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage. Entries are lost when the value is dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

/// Directory-backed storage: one `<key>.json` file per entry.
///
/// Writes go to a temporary file that is renamed into place, so a crash
/// mid-write never leaves a truncated record behind.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` as the state directory. It is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The state directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(key, e)),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| StorageError::io(key, e))?;

        let path = self.path_for(key);
        let mut file = NamedTempFile::new_in(&self.dir).map_err(|e| StorageError::io(key, e))?;
        file.write_all(value.as_bytes())
            .and_then(|()| file.as_file().sync_all())
            .map_err(|e| StorageError::io(key, e))?;
        // a failed persist drops the temp file, which deletes it
        file.persist(&path)
            .map_err(|e| StorageError::io(key, e.error))?;

        tracing::debug!(key, path = %path.display(), "session entry written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(key, e)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn exercise(storage: &dyn SessionStorage) {
        assert_eq!(storage.load("user").unwrap(), None);

        storage.save("user", "{\"a\":1}").unwrap();
        assert_eq!(storage.load("user").unwrap().as_deref(), Some("{\"a\":1}"));
        assert_eq!(storage.load("admin").unwrap(), None);

        storage.save("user", "{\"a\":2}").unwrap();
        assert_eq!(storage.load("user").unwrap().as_deref(), Some("{\"a\":2}"));

        storage.remove("user").unwrap();
        assert_eq!(storage.load("user").unwrap(), None);

        // removing twice is fine
        storage.remove("user").unwrap();
    }

    #[test]
    fn test_memory_storage() {
        exercise(&MemoryStorage::new());
    }

    #[test]
    fn test_file_storage() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("state"));
        exercise(&storage);
    }

    #[test]
    fn test_file_storage_layout() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        storage.save("admin", "{}").unwrap();

        assert!(dir.path().join("admin.json").is_file());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
        assert_eq!(storage.dir(), dir.path());
    }

    #[test]
    fn test_failed_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // a non-empty directory where the record should go blocks the rename
        fs::create_dir_all(dir.path().join("user.json").join("blocker")).unwrap();

        let storage = FileStorage::new(dir.path());
        let err = storage.save("user", "{}").unwrap_err();
        assert!(err.to_string().contains("\"user\""));

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, ["user.json"]);
    }

    #[test]
    fn test_file_storage_is_shared_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        FileStorage::new(dir.path()).save("user", "first").unwrap();

        let reopened = FileStorage::new(dir.path());
        assert_eq!(reopened.load("user").unwrap().as_deref(), Some("first"));
    }
}
