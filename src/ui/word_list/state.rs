use uuid::Uuid;

use crate::model::LexiconEntry;
use crate::search::{SearchField, SearchStartPoint};
use crate::ui::mvi::UiState;

/// One grid row.
#[derive(Debug, Clone, PartialEq)]
pub struct WordRow {
    pub id: Uuid,
    pub entry: String,
    pub meaning: String,
}

impl From<LexiconEntry> for WordRow {
    fn from(entry: LexiconEntry) -> Self {
        Self {
            id: entry.id,
            entry: entry.entry,
            meaning: entry.meaning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WordListState {
    pub query: String,
    pub field: SearchField,
    pub start_point: SearchStartPoint,
    pub rows: Vec<WordRow>,
    pub selected: usize,
    /// Last load failure, shown in the status line.
    pub error: Option<String>,
}

impl UiState for WordListState {}

impl WordListState {
    pub fn selected_row(&self) -> Option<&WordRow> {
        self.rows.get(self.selected)
    }

    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_has_no_selection() {
        let state = WordListState::default();
        assert!(state.selected_row().is_none());
        assert!(!state.has_query());
    }

    #[test]
    fn whitespace_query_is_not_a_query() {
        let state = WordListState {
            query: "  ".to_string(),
            ..WordListState::default()
        };
        assert!(!state.has_query());
    }
}
