//! # Key-value store abstraction
//!
//! [`KeyValueStore`] is the async interface every persistence backend
//! implements: `get`/`set`/`remove` for a single key and `clear` for the whole
//! namespace. Values are opaque strings; [`crate::Storage`] adds JSON on top.
//!
//! Implementations live in sibling modules ([`crate::MemoryStore`],
//! [`crate::FileStore`]).

use thiserror::Error;

/// Failure reported by a [`KeyValueStore`] backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Async string key-value store.
pub trait KeyValueStore {
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, StoreError>>;
    fn set(
        &self,
        key: &str,
        value: String,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn clear(&self) -> impl std::future::Future<Output = Result<(), StoreError>>;
}

/// Keys double as file names in [`crate::FileStore`], so they are limited to a
/// portable character set.
pub fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        && key != "."
        && key != "..";
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}
