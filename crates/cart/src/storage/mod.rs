//! Durable key-value storage for the serialized cart.
//!
//! Storage deals in opaque string blobs; encoding the cart as JSON is the
//! store's job. Implementations:
//!
//! - [`FileStorage`] - one JSON file per key, replaced atomically
//! - [`MemoryStorage`] - mutex-guarded map for demos and tests

mod file;
mod memory;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key the cart is persisted under unless configured otherwise.
pub const DEFAULT_CART_KEY: &str = "@RocketShoes:cart";

/// Errors that can occur when loading or storing the cart.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Cart could not be serialized.
    #[error("Failed to encode cart: {0}")]
    Encode(#[source] serde_json::Error),

    /// Stored blob is not a valid cart.
    #[error("Stored cart under {key} is corrupt: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Backend refused the operation.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Key-value blob store.
///
/// Writes are synchronous: when `store` returns `Ok`, the blob is durable as
/// far as the backend can promise.
pub trait CartStorage {
    /// Blob stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written. The previous
    /// blob must survive a failed write.
    fn store(&self, key: &str, blob: &str) -> Result<(), StorageError>;
}

impl<T: CartStorage + ?Sized> CartStorage for &T {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn store(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        (**self).store(key, blob)
    }
}
