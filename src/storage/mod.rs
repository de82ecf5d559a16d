//! Key-value storage - the host slots selections and quote summaries live in.
//!
//! The configurator writes to two slots: a durable one that survives
//! sessions and a session-scoped one read by the contact page. Both are
//! plain string key-value stores; any backend implementing
//! [`KeyValueStore`] can stand in for either.
//!
//! ## Example
//!
//! ```
//! use build_pricer::{InMemoryKeyValueStore, KeyValueStore};
//!
//! let store = InMemoryKeyValueStore::new();
//! store.set("greeting", "hello").unwrap();
//! assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello"));
//! ```

mod error;
mod file;
mod in_memory;

pub use error::StorageError;
pub use file::JsonFileStore;
pub use in_memory::InMemoryKeyValueStore;

/// Synchronous string key-value storage.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write (or overwrite) a value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value. Returns true if it existed.
    fn remove(&self, key: &str) -> Result<bool, StorageError>;
}
