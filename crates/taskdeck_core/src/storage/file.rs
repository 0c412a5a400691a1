//! File-backed storage: one UTF-8 text file per key.
//!
//! # Responsibility
//! - Persist key-value pairs under a caller-chosen directory.
//! - Emit `storage_open` logging events with duration and status.
//!
//! # Invariants
//! - The directory exists after a successful `open`.
//! - Keys are used as file stems verbatim; callers keep them
//!   filesystem-safe (the store's fixed key set is).

use super::{StorageBackend, StorageResult};
use log::{error, info};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

const VALUE_FILE_EXTENSION: &str = "json";

/// Durable key-value backend rooted at a directory.
#[derive(Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Opens (and creates if needed) the backing directory.
    ///
    /// # Side effects
    /// - Creates the directory tree.
    /// - Emits `storage_open` logging events with duration and status.
    pub fn open(root: impl AsRef<Path>) -> StorageResult<Self> {
        let started_at = Instant::now();
        let root = root.as_ref().to_path_buf();
        info!("event=storage_open module=storage status=start mode=file");

        if let Err(err) = std::fs::create_dir_all(&root) {
            error!(
                "event=storage_open module=storage status=error mode=file duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }

        info!(
            "event=storage_open module=storage status=ok mode=file duration_ms={} root={}",
            started_at.elapsed().as_millis(),
            root.display()
        );
        Ok(Self { root })
    }

    /// Directory this backend reads and writes under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.{VALUE_FILE_EXTENSION}"))
    }
}

impl StorageBackend for FileStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        match std::fs::read_to_string(self.value_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        std::fs::write(self.value_path(key), value)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        match std::fs::remove_file(self.value_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FileStorage;
    use crate::storage::StorageBackend;

    #[test]
    fn open_creates_directory_and_roundtrips_values() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("store");
        let storage = FileStorage::open(&root).unwrap();

        assert!(root.is_dir());
        assert_eq!(storage.get_item("tasks").unwrap(), None);

        storage.set_item("tasks", "[]").unwrap();
        assert_eq!(storage.get_item("tasks").unwrap().as_deref(), Some("[]"));
        assert!(root.join("tasks.json").is_file());

        storage.remove_item("tasks").unwrap();
        assert_eq!(storage.get_item("tasks").unwrap(), None);
    }

    #[test]
    fn remove_of_absent_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        storage.remove_item("never-written").unwrap();
    }

    #[test]
    fn reopen_sees_previous_values() {
        let dir = tempfile::tempdir().unwrap();
        {
            let storage = FileStorage::open(dir.path()).unwrap();
            storage.set_item("links", "[1]").unwrap();
        }
        let reopened = FileStorage::open(dir.path()).unwrap();
        assert_eq!(reopened.get_item("links").unwrap().as_deref(), Some("[1]"));
    }
}
