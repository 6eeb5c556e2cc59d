//! Durable key-value persistence.
//!
//! Every piece of durable state in the storefront goes through one small
//! contract: a device-scoped string store addressed by a logical key. The
//! cart state and the visitor's active category are both instances of it,
//! each under its own key. There is no network round-trip and no expiry.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Logical keys for the values the storefront persists.
pub mod keys {
    /// Serialized cart state (JSON array of cart lines).
    pub const CART: &str = "cart";

    /// The visitor's last explicitly selected catalog category.
    pub const ACTIVE_CATEGORY: &str = "active_category";
}

/// Errors from the durable key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// Key contains characters the store cannot address.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// A device-scoped string store addressed by logical keys.
///
/// Implementations must treat a missing key as `Ok(None)` from [`get`] and
/// removal of a missing key as success - absence is a normal state, not an
/// error.
///
/// [`get`]: KeyValueStore::get
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be written.
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
