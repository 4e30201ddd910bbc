//! Service layer between presenters and persistence.
//!
//! Presenters only ever see these traits. The concrete store is picked once at
//! startup and hidden behind [`SharedService`].

mod unit_of_work;

pub use unit_of_work::UnitOfWorkService;

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

use crate::model::{Entity, LexiconEntry, Lexical};
use crate::persistence::PersistenceError;
use crate::search::SearchStartPoint;

/// Errors surfaced by a service to its presenters.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Persistence failure: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Service has been disposed")]
    Disposed,
}

/// CRUD over one unit-of-work. `save` commits everything staged through this
/// instance as one unit.
pub trait Service<T: Entity> {
    fn get_all(&self) -> Result<Vec<T>, ServiceError>;
    fn get_by_id(&self, id: &T::Key) -> Result<Option<T>, ServiceError>;
    fn add(&mut self, item: T) -> Result<(), ServiceError>;
    fn update(&mut self, item: T) -> Result<(), ServiceError>;
    fn remove(&mut self, id: &T::Key) -> Result<(), ServiceError>;
    fn save(&mut self) -> Result<(), ServiceError>;

    /// Throw away everything staged since the last `save`.
    fn revert(&mut self) -> Result<(), ServiceError>;

    /// Release the unit-of-work. Safe to call more than once.
    fn dispose(&mut self);

    fn is_disposed(&self) -> bool;
}

/// Lexicon queries. Every result set is in canonical order.
pub trait LexiconService<T: Lexical>: Service<T> {
    /// First record in canonical order, `None` when the store is empty.
    fn get_first_item(&self) -> Result<Option<T>, ServiceError>;

    fn get_sorted_items(&self) -> Result<Vec<T>, ServiceError>;

    /// Records whose entry term matches `query`. An empty query returns nothing.
    fn search_by_entry(
        &self,
        query: &str,
        start: SearchStartPoint,
    ) -> Result<Vec<T>, ServiceError>;

    /// Records whose meaning matches `query`. An empty query returns nothing.
    fn search_by_meaning(
        &self,
        query: &str,
        start: SearchStartPoint,
    ) -> Result<Vec<T>, ServiceError>;
}

/// The one service instance every presenter shares.
pub type SharedService = Arc<Mutex<dyn LexiconService<LexiconEntry> + Send>>;

pub fn share<S>(service: S) -> SharedService
where
    S: LexiconService<LexiconEntry> + Send + 'static,
{
    Arc::new(Mutex::new(service))
}
