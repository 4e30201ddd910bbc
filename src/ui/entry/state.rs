use uuid::Uuid;

use crate::model::LexiconEntry;
use crate::ui::mvi::UiState;

/// Editable field on the entry screen, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryField {
    #[default]
    Entry,
    Meaning,
    Notes,
}

impl EntryField {
    pub const ALL: [EntryField; 3] = [EntryField::Entry, EntryField::Meaning, EntryField::Notes];

    pub fn next(self) -> Self {
        match self {
            Self::Entry => Self::Meaning,
            Self::Meaning => Self::Notes,
            Self::Notes => Self::Entry,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Entry => Self::Notes,
            Self::Meaning => Self::Entry,
            Self::Notes => Self::Meaning,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::Meaning => "Meaning",
            Self::Notes => "Notes",
        }
    }
}

/// Field values being edited. `id` is `None` until the entry is first saved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryDraft {
    pub id: Option<Uuid>,
    pub entry: String,
    pub meaning: String,
    pub notes: String,
}

impl EntryDraft {
    pub fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::Entry => &self.entry,
            EntryField::Meaning => &self.meaning,
            EntryField::Notes => &self.notes,
        }
    }

    pub fn field_mut(&mut self, field: EntryField) -> &mut String {
        match field {
            EntryField::Entry => &mut self.entry,
            EntryField::Meaning => &mut self.meaning,
            EntryField::Notes => &mut self.notes,
        }
    }

    /// Build the record to persist. New drafts get a fresh id.
    pub fn to_record(&self) -> LexiconEntry {
        let mut record = LexiconEntry::default();
        if let Some(id) = self.id {
            record.id = id;
        }
        record.entry = self.entry.trim().to_string();
        record.meaning = self.meaning.trim().to_string();
        record.notes = self.notes.trim().to_string();
        record
    }
}

impl From<LexiconEntry> for EntryDraft {
    fn from(entry: LexiconEntry) -> Self {
        Self {
            id: Some(entry.id),
            entry: entry.entry,
            meaning: entry.meaning,
            notes: entry.notes,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatusLine {
    Info(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LexiconEntryState {
    pub draft: EntryDraft,
    /// Draft as last loaded or saved; `Discard` returns to it.
    pub baseline: EntryDraft,
    pub focused: EntryField,
    pub dirty: bool,
    pub status: Option<StatusLine>,
}

impl UiState for LexiconEntryState {}

impl LexiconEntryState {
    pub fn is_new(&self) -> bool {
        self.draft.id.is_none()
    }
}
