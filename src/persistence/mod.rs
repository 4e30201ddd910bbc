//! Persistence seam consumed by the service layer.
//!
//! A unit-of-work groups reads and writes against one store. Writes stay
//! pending until `commit`, which applies all of them or none.

mod json_file;
mod memory;
mod working_set;

pub use json_file::JsonFileUnitOfWork;
pub use memory::InMemoryUnitOfWork;

use std::path::PathBuf;
use thiserror::Error;

use crate::model::Entity;

/// Errors raised by a persistence backend.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Record '{key}' not found")]
    NotFound { key: String },

    #[error("Record '{key}' already exists")]
    DuplicateKey { key: String },

    #[error("Failed to access store '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse store '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize store: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// A persistence session over records of type `T`.
///
/// Reads observe the working set: committed records plus any pending changes.
pub trait UnitOfWork<T: Entity> {
    fn all(&self) -> Result<Vec<T>, PersistenceError>;

    fn get(&self, key: &T::Key) -> Result<Option<T>, PersistenceError>;

    /// Stage a new record. Fails with `DuplicateKey` if the key is taken.
    fn insert(&mut self, item: T) -> Result<(), PersistenceError>;

    /// Stage a replacement. Fails with `NotFound` if the key is unknown.
    fn update(&mut self, item: T) -> Result<(), PersistenceError>;

    fn delete(&mut self, key: &T::Key) -> Result<(), PersistenceError>;

    /// Apply every pending change. On error nothing is applied and the
    /// changes stay pending.
    fn commit(&mut self) -> Result<(), PersistenceError>;

    /// Drop every pending change.
    fn rollback(&mut self);

    fn has_pending_changes(&self) -> bool;
}
