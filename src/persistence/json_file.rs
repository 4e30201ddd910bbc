//! Unit-of-work backed by a single JSON document on disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::model::Entity;
use crate::persistence::working_set::WorkingSet;
use crate::persistence::{PersistenceError, UnitOfWork};

const STORE_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct StoreDocument<T> {
    version: u32,
    records: Vec<T>,
}

/// Stores every record of `T` in one JSON file.
///
/// Commit writes a sibling `.tmp` file and renames it over the store, so the
/// file on disk is always either the old or the new document.
#[derive(Debug)]
pub struct JsonFileUnitOfWork<T: Entity> {
    path: PathBuf,
    set: WorkingSet<T>,
}

impl<T> JsonFileUnitOfWork<T>
where
    T: Entity + Serialize + DeserializeOwned,
{
    /// Open the store at `path`. A missing file opens as an empty store; a
    /// file holding two records with one id is rejected.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let path = path.into();
        let records = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| PersistenceError::Io {
                path: path.clone(),
                source,
            })?;
            let document: StoreDocument<T> =
                serde_json::from_str(&content).map_err(|source| PersistenceError::Parse {
                    path: path.clone(),
                    source,
                })?;
            document.records
        } else {
            Vec::new()
        };

        let count = records.len();
        let set = WorkingSet::from_records(records)?;
        tracing::debug!(path = %path.display(), records = count, "Store opened");

        Ok(Self { set, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_document(&self) -> Result<(), PersistenceError> {
        let io_err = |source: std::io::Error| PersistenceError::Io {
            path: self.path.clone(),
            source,
        };

        let document = StoreDocument {
            version: STORE_FORMAT_VERSION,
            records: self.set.staged_records().collect::<Vec<_>>(),
        };
        let content =
            serde_json::to_string_pretty(&document).map_err(PersistenceError::Serialize)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let temp = self.temp_path();
        let mut file = fs::File::create(&temp).map_err(io_err)?;
        file.write_all(content.as_bytes()).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
        drop(file);

        if let Err(source) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(io_err(source));
        }
        Ok(())
    }
}

impl<T> UnitOfWork<T> for JsonFileUnitOfWork<T>
where
    T: Entity + Serialize + DeserializeOwned,
{
    fn all(&self) -> Result<Vec<T>, PersistenceError> {
        Ok(self.set.all())
    }

    fn get(&self, key: &T::Key) -> Result<Option<T>, PersistenceError> {
        Ok(self.set.get(key))
    }

    fn insert(&mut self, item: T) -> Result<(), PersistenceError> {
        self.set.insert(item)
    }

    fn update(&mut self, item: T) -> Result<(), PersistenceError> {
        self.set.update(item)
    }

    fn delete(&mut self, key: &T::Key) -> Result<(), PersistenceError> {
        self.set.delete(key)
    }

    fn commit(&mut self) -> Result<(), PersistenceError> {
        if !self.set.is_dirty() {
            return Ok(());
        }
        self.write_document()?;
        self.set.mark_committed();
        tracing::info!(path = %self.path.display(), "Store committed");
        Ok(())
    }

    fn rollback(&mut self) {
        self.set.rollback();
    }

    fn has_pending_changes(&self) -> bool {
        self.set.is_dirty()
    }
}
