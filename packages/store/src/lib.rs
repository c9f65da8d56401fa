//! Local key-value persistence for the onboarding client.
//!
//! [`KeyValueStore`] is the platform primitive (string keys, string values);
//! [`Storage`] layers JSON (de)serialisation on top of it and swallows failures
//! the way UI code wants them: logged, then reported as `None`/`false`.

pub mod keys;
pub mod kv;
pub mod storage;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

pub use kv::{KeyValueStore, StoreError};
pub use storage::Storage;
