//! In-memory storage.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{CartStorage, StorageError};

#[derive(Default)]
struct Slots {
    blobs: HashMap<String, String>,
    writes: usize,
    read_only: Option<String>,
}

/// Storage backed by a mutex-guarded map.
///
/// Counts successful writes and can be switched to reject writes, which makes
/// write-through behavior observable in tests.
#[derive(Default)]
pub struct MemoryStorage {
    inner: Mutex<Slots>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Slots> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Storage pre-seeded with a blob, as if written by an earlier session.
    #[must_use]
    pub fn with_blob(key: &str, blob: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.lock().blobs.insert(key.to_string(), blob.into());
        storage
    }

    /// Current blob under `key` without going through the trait.
    #[must_use]
    pub fn blob(&self, key: &str) -> Option<String> {
        self.lock().blobs.get(key).cloned()
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    /// Reject every write with `StorageError::Unavailable`.
    pub fn set_read_only(&self, reason: impl Into<String>) {
        self.lock().read_only = Some(reason.into());
    }

    pub fn set_writable(&self) {
        self.lock().read_only = None;
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.blob(key))
    }

    fn store(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        let mut slots = self.lock();
        if let Some(reason) = &slots.read_only {
            return Err(StorageError::Unavailable(reason.clone()));
        }
        slots.blobs.insert(key.to_string(), blob.to_string());
        slots.writes += 1;
        Ok(())
    }
}
