//! Storage port: a key/value string facade over the persistence backend.
//!
//! The store serializes the whole task collection to one JSON string under
//! one key; the backend only sees opaque text. `get` on an absent key is
//! `Ok(None)`, never an error.

use crate::domain::StorageError;

/// Key/value string storage.
pub trait Storage {
    /// Read the value stored under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value under `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
