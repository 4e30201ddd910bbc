use std::collections::BTreeMap;

use crate::model::Entity;
use crate::persistence::PersistenceError;

/// Committed records plus a staged copy that mutations go to.
#[derive(Debug, Clone)]
pub(crate) struct WorkingSet<T: Entity> {
    committed: BTreeMap<T::Key, T>,
    staged: BTreeMap<T::Key, T>,
    dirty: bool,
}

impl<T: Entity> WorkingSet<T> {
    pub(crate) fn empty() -> Self {
        Self {
            committed: BTreeMap::new(),
            staged: BTreeMap::new(),
            dirty: false,
        }
    }

    /// Fails on the first key seen twice; nothing is dropped silently.
    pub(crate) fn from_records(
        records: impl IntoIterator<Item = T>,
    ) -> Result<Self, PersistenceError> {
        let mut committed = BTreeMap::new();
        for item in records {
            let key = item.key();
            if committed.contains_key(&key) {
                return Err(PersistenceError::DuplicateKey {
                    key: format!("{:?}", key),
                });
            }
            committed.insert(key, item);
        }
        Ok(Self {
            staged: committed.clone(),
            committed,
            dirty: false,
        })
    }

    pub(crate) fn all(&self) -> Vec<T> {
        self.staged.values().cloned().collect()
    }

    pub(crate) fn get(&self, key: &T::Key) -> Option<T> {
        self.staged.get(key).cloned()
    }

    pub(crate) fn insert(&mut self, item: T) -> Result<(), PersistenceError> {
        let key = item.key();
        if self.staged.contains_key(&key) {
            return Err(PersistenceError::DuplicateKey {
                key: format!("{:?}", key),
            });
        }
        self.staged.insert(key, item);
        self.dirty = true;
        Ok(())
    }

    pub(crate) fn update(&mut self, item: T) -> Result<(), PersistenceError> {
        let key = item.key();
        let Some(slot) = self.staged.get_mut(&key) else {
            return Err(PersistenceError::NotFound {
                key: format!("{:?}", key),
            });
        };
        *slot = item;
        self.dirty = true;
        Ok(())
    }

    pub(crate) fn delete(&mut self, key: &T::Key) -> Result<(), PersistenceError> {
        if self.staged.remove(key).is_none() {
            return Err(PersistenceError::NotFound {
                key: format!("{:?}", key),
            });
        }
        self.dirty = true;
        Ok(())
    }

    /// Records as they would be after a commit, in key order.
    pub(crate) fn staged_records(&self) -> impl Iterator<Item = &T> {
        self.staged.values()
    }

    pub(crate) fn mark_committed(&mut self) {
        self.committed = self.staged.clone();
        self.dirty = false;
    }

    pub(crate) fn rollback(&mut self) {
        self.staged = self.committed.clone();
        self.dirty = false;
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn committed_len(&self) -> usize {
        self.committed.len()
    }
}
