//! # JSON item storage
//!
//! [`Storage`] wraps a [`KeyValueStore`] and stores typed values as JSON.
//! None of its methods propagate errors: reads that fail for any reason
//! (missing key, backend error, malformed JSON) return `None`, writes return
//! `false`. Failures are logged through `tracing`, so callers on the UI path
//! can treat persistence as best-effort.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::kv::KeyValueStore;

/// JSON pass-through over a key-value backend.
#[derive(Clone, Debug, Default)]
pub struct Storage<S> {
    inner: S,
}

impl<S: KeyValueStore> Storage<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Read and decode the item stored under `key`.
    pub async fn get_item<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.inner.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::error!("Error getting item {:?} from storage: {}", key, e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Error decoding item {:?} from storage: {}", key, e);
                None
            }
        }
    }

    /// Encode and store `value` under `key`.
    pub async fn set_item<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("Error encoding item {:?} for storage: {}", key, e);
                return false;
            }
        };
        match self.inner.set(key, raw).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Error setting item {:?} in storage: {}", key, e);
                false
            }
        }
    }

    pub async fn remove_item(&self, key: &str) -> bool {
        match self.inner.remove(key).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Error removing item {:?} from storage: {}", key, e);
                false
            }
        }
    }

    pub async fn clear(&self) -> bool {
        match self.inner.clear().await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Error clearing storage: {}", e);
                false
            }
        }
    }
}
