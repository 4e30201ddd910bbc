use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Entity, Lexical};

/// One lexicon entry: a term, what it means, and free-form notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub id: Uuid,
    pub entry: String,
    pub meaning: String,
    #[serde(default)]
    pub notes: String,
}

impl LexiconEntry {
    pub fn new(entry: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            meaning: meaning.into(),
            ..Self::default()
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// A fresh entry gets its own v4 id so it can be added without a round-trip.
impl Default for LexiconEntry {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            entry: String::new(),
            meaning: String::new(),
            notes: String::new(),
        }
    }
}

impl Entity for LexiconEntry {
    type Key = Uuid;

    fn key(&self) -> Uuid {
        self.id
    }
}

impl Lexical for LexiconEntry {
    fn entry(&self) -> &str {
        &self.entry
    }

    fn meaning(&self) -> &str {
        &self.meaning
    }
}
