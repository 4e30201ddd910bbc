use crate::model::Entity;
use crate::persistence::working_set::WorkingSet;
use crate::persistence::{PersistenceError, UnitOfWork};

/// Unit-of-work backed by process memory. Commits never fail.
#[derive(Debug, Clone)]
pub struct InMemoryUnitOfWork<T: Entity> {
    set: WorkingSet<T>,
}

impl<T: Entity> InMemoryUnitOfWork<T> {
    pub fn new() -> Self {
        Self {
            set: WorkingSet::empty(),
        }
    }

    /// Start from records that are already committed. Two records with the
    /// same key are a `DuplicateKey` error.
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Result<Self, PersistenceError> {
        Ok(Self {
            set: WorkingSet::from_records(records)?,
        })
    }

    pub fn committed_len(&self) -> usize {
        self.set.committed_len()
    }
}

impl<T: Entity> Default for InMemoryUnitOfWork<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> UnitOfWork<T> for InMemoryUnitOfWork<T> {
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
        self.set.mark_committed();
        Ok(())
    }

    fn rollback(&mut self) {
        self.set.rollback();
    }

    fn has_pending_changes(&self) -> bool {
        self.set.is_dirty()
    }
}
