//! Persistent state store.
//!
//! # Layout
//!
//! Each slice of shop state is one JSON document under its own key:
//!
//! - `products` - the catalog
//! - `orders` - every submitted order, newest first
//! - `settings` - the site settings record
//! - `cart` - the current cart lines
//!
//! # Failure handling
//!
//! Persistence is best effort. [`StateStore::load_or`] falls back to the
//! supplied default when a key is missing or its document cannot be read or
//! parsed, and [`StateStore::save`] logs write failures and carries on.
//! Neither ever fails the caller.

mod file;
mod memory;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::{StorageBackend, StorefrontConfig};

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the underlying medium failed.
    #[error("I/O error on {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded as JSON.
    #[error("Failed to serialize {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A stored document is not valid for the requested type.
    #[error("Corrupted document {key}: {source}")]
    Corrupted {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Keys are restricted to ASCII letters, digits, `-` and `_`.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Another thread panicked while holding the backend lock.
    #[error("Storage lock poisoned")]
    Poisoned,
}

/// A synchronous string key/value medium.
pub trait KeyValueStore: Send + Sync {
    /// Read the document stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the medium cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the document stored under `key`.
    ///
    /// A subsequent `read` observes either the old or the new document,
    /// never a partial one.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the medium cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Names of the four persisted state slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    Products,
    Orders,
    Settings,
    Cart,
}

impl Slice {
    /// Every slice.
    pub const ALL: [Self; 4] = [Self::Products, Self::Orders, Self::Settings, Self::Cart];

    /// Storage key of this slice.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Orders => "orders",
            Self::Settings => "settings",
            Self::Cart => "cart",
        }
    }
}

/// Typed JSON load/save over a [`KeyValueStore`].
#[derive(Clone)]
pub struct StateStore {
    backend: Arc<dyn KeyValueStore>,
}

impl StateStore {
    /// Create a store over the given backend.
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// An in-memory store, for tests and `NOKHBA_STORAGE=memory`.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    /// Build the store selected by configuration.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the data directory cannot be created.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self, StoreError> {
        match config.storage {
            StorageBackend::Memory => Ok(Self::in_memory()),
            StorageBackend::File => Ok(Self::new(Arc::new(FileStore::open(&config.data_dir)?))),
        }
    }

    /// Load the value under `key`.
    ///
    /// Returns `Ok(None)` if nothing is stored there.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails or the document does not
    /// parse as `T`.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.backend.read(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupted {
                key: key.to_string(),
                source,
            })
    }

    /// Load the value under `key`, or `default()` if it is absent or unreadable.
    pub fn load_or<T, F>(&self, key: &str, default: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                tracing::debug!(key, "No saved state, using defaults");
                default()
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to load saved state, using defaults");
                default()
            }
        }
    }

    /// Serialize `value` and write it under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the backend write fails.
    pub fn try_save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.backend.write(key, &raw)
    }

    /// Write `value` under `key`, logging instead of failing.
    ///
    /// Returns whether the write succeeded.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        match self.try_save(key, value) {
            Ok(()) => {
                tracing::trace!(key, "State saved");
                true
            }
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to persist state");
                false
            }
        }
    }
}

/// Check that a key is safe to use as a file name.
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}
