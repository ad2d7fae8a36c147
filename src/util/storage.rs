//! Persistent key/value storage behind a small trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists its token and user record through
//! [`KeyValueStore`]. In the browser that is `localStorage`
//! ([`BrowserStorage`], `csr` only); tests and non-browser builds use
//! [`MemoryStorage`]. Reads and writes are synchronous and atomic per key,
//! never across keys.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::error::StorageError;

/// Synchronous string key/value storage.
pub trait KeyValueStore: Send + Sync {
    /// Read `key`. Missing keys and unreadable storage both yield `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if storage is unavailable or refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Never fails; removing a missing key is a no-op.
    fn remove(&self, key: &str);
}

/// `window.localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage.set_item(key, value).map_err(|e| StorageError::Write {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-process storage for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    /// Keys whose writes are refused, to exercise failure paths.
    read_only: Mutex<Vec<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse future writes to `key`.
    pub fn deny_writes(&self, key: &str) {
        self.read_only.lock().unwrap_or_else(PoisonError::into_inner).push(key.to_owned());
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let denied = self.read_only.lock().unwrap_or_else(PoisonError::into_inner).iter().any(|k| k == key);
        if denied {
            return Err(StorageError::Write { key: key.to_owned(), reason: "write denied".to_owned() });
        }
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}
