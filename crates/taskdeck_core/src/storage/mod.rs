//! Durable key-value medium behind the domain store.
//!
//! # Responsibility
//! - Define the storage capability the store is injected with.
//! - Provide in-memory and file-backed implementations.
//!
//! # Invariants
//! - Values are UTF-8 JSON text; backends never interpret them.
//! - Backends report failures; the absorb-and-log policy lives in the store,
//!   not here.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::{MemoryStorage, UnavailableStorage};

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure raised by a storage backend operation.
#[derive(Debug)]
pub enum StorageError {
    /// Filesystem-level failure from the file backend.
    Io(std::io::Error),
    /// The medium does not exist in this environment.
    Unavailable(&'static str),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Unavailable(context) => write!(f, "storage unavailable: {context}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Key-value capability the domain store is built over.
///
/// Modeled on origin-scoped browser storage: string keys, string values,
/// no transactions, no change notifications.
pub trait StorageBackend {
    /// Returns the value stored under `key`, or `None` when absent.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

// Lets a store borrow a backend the way a repository borrows a connection,
// so tests can keep inspecting the medium they handed in.
impl<S: StorageBackend + ?Sized> StorageBackend for &S {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}
