//! Record types managed by the lexicon store.

mod entry;

pub use entry::LexiconEntry;

use std::fmt::Debug;
use std::hash::Hash;

/// A record the persistence layer can hold.
///
/// Records are default-constructible and independently identifiable by
/// their key. Nothing else is required of them.
pub trait Entity: Default + Clone + Send + 'static {
    type Key: Clone + Eq + Ord + Hash + Debug + Send + 'static;

    fn key(&self) -> Self::Key;
}

/// A record with the two searchable text fields: the entry term and its meaning.
pub trait Lexical: Entity {
    fn entry(&self) -> &str;
    fn meaning(&self) -> &str;
}
