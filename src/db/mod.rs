//! Key-value persistence behind the session.
//!
//! The store is an opaque string-keyed slot map (`get`/`set`). All
//! (de)serialization happens in [`repository`] and [`crate::history`].

pub mod file_store;
pub mod memory;
pub mod repository;

pub use file_store::FileStore;
pub use memory::MemoryStore;
pub use repository::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Opaque string store the session persists into.
pub trait KeyValueStore {
    /// `Ok(None)` when the slot was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the slot's value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
