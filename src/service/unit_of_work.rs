use std::marker::PhantomData;

use crate::model::{Entity, Lexical};
use crate::persistence::UnitOfWork;
use crate::search::{self, SearchStartPoint};
use crate::service::{LexiconService, Service, ServiceError};

/// Service over any [`UnitOfWork`]. Dropping it disposes it.
pub struct UnitOfWorkService<T, U>
where
    T: Entity,
    U: UnitOfWork<T>,
{
    uow: Option<U>,
    _record: PhantomData<fn() -> T>,
}

impl<T, U> UnitOfWorkService<T, U>
where
    T: Entity,
    U: UnitOfWork<T>,
{
    pub fn new(uow: U) -> Self {
        Self {
            uow: Some(uow),
            _record: PhantomData,
        }
    }

    fn uow(&self) -> Result<&U, ServiceError> {
        self.uow.as_ref().ok_or(ServiceError::Disposed)
    }

    fn uow_mut(&mut self) -> Result<&mut U, ServiceError> {
        self.uow.as_mut().ok_or(ServiceError::Disposed)
    }
}

impl<T, U> Service<T> for UnitOfWorkService<T, U>
where
    T: Entity,
    U: UnitOfWork<T>,
{
    fn get_all(&self) -> Result<Vec<T>, ServiceError> {
        Ok(self.uow()?.all()?)
    }

    fn get_by_id(&self, id: &T::Key) -> Result<Option<T>, ServiceError> {
        Ok(self.uow()?.get(id)?)
    }

    fn add(&mut self, item: T) -> Result<(), ServiceError> {
        Ok(self.uow_mut()?.insert(item)?)
    }

    fn update(&mut self, item: T) -> Result<(), ServiceError> {
        Ok(self.uow_mut()?.update(item)?)
    }

    fn remove(&mut self, id: &T::Key) -> Result<(), ServiceError> {
        Ok(self.uow_mut()?.delete(id)?)
    }

    fn save(&mut self) -> Result<(), ServiceError> {
        Ok(self.uow_mut()?.commit()?)
    }

    fn revert(&mut self) -> Result<(), ServiceError> {
        self.uow_mut()?.rollback();
        Ok(())
    }

    fn dispose(&mut self) {
        let Some(uow) = self.uow.take() else {
            return;
        };
        if uow.has_pending_changes() {
            tracing::warn!("Service disposed with unsaved changes; discarding them");
        }
        drop(uow);
        tracing::debug!("Service disposed");
    }

    fn is_disposed(&self) -> bool {
        self.uow.is_none()
    }
}

impl<T, U> LexiconService<T> for UnitOfWorkService<T, U>
where
    T: Lexical,
    U: UnitOfWork<T>,
{
    fn get_first_item(&self) -> Result<Option<T>, ServiceError> {
        let items = self.uow()?.all()?;
        Ok(items.into_iter().min_by(search::canonical_cmp))
    }

    fn get_sorted_items(&self) -> Result<Vec<T>, ServiceError> {
        let mut items = self.uow()?.all()?;
        search::sort_canonical(&mut items);
        Ok(items)
    }

    fn search_by_entry(
        &self,
        query: &str,
        start: SearchStartPoint,
    ) -> Result<Vec<T>, ServiceError> {
        self.filtered(|item| search::matches(item.entry(), query, start))
    }

    fn search_by_meaning(
        &self,
        query: &str,
        start: SearchStartPoint,
    ) -> Result<Vec<T>, ServiceError> {
        self.filtered(|item| search::matches(item.meaning(), query, start))
    }
}

impl<T, U> UnitOfWorkService<T, U>
where
    T: Lexical,
    U: UnitOfWork<T>,
{
    fn filtered(&self, keep: impl Fn(&T) -> bool) -> Result<Vec<T>, ServiceError> {
        let mut items: Vec<T> = self.uow()?.all()?.into_iter().filter(|i| keep(i)).collect();
        search::sort_canonical(&mut items);
        Ok(items)
    }
}

impl<T, U> Drop for UnitOfWorkService<T, U>
where
    T: Entity,
    U: UnitOfWork<T>,
{
    fn drop(&mut self) {
        self.dispose();
    }
}
