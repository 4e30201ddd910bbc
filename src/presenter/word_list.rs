use uuid::Uuid;

use crate::search::SearchField;
use crate::service::{ServiceError, SharedService};
use crate::ui::mvi::dispatch_mvi;
use crate::ui::word_list::{WordListIntent, WordListReducer, WordListState, WordRow};

pub struct WordListPresenter {
    service: SharedService,
    state: WordListState,
}

impl WordListPresenter {
    pub fn new(service: SharedService) -> Self {
        Self {
            service,
            state: WordListState::default(),
        }
    }

    pub fn state(&self) -> &WordListState {
        &self.state
    }

    /// Apply an intent, re-running the search when the criteria changed.
    pub fn dispatch(&mut self, intent: WordListIntent) {
        let refresh = intent.changes_criteria();
        dispatch_mvi!(self, state, WordListReducer, intent);
        if refresh {
            self.refresh();
        }
    }

    /// Reload rows for the current criteria.
    ///
    /// With no query the full sorted catalog is shown.
    pub fn refresh(&mut self) {
        match self.fetch_rows() {
            Ok(rows) => {
                dispatch_mvi!(self, state, WordListReducer, WordListIntent::Loaded { rows });
            }
            Err(err) => {
                tracing::error!(error = %err, "Word list load failed");
                let message = err.to_string();
                dispatch_mvi!(self, state, WordListReducer, WordListIntent::LoadFailed { message });
            }
        }
    }

    pub fn selected_entry(&self) -> Option<Uuid> {
        self.state.selected_row().map(|row| row.id)
    }

    fn fetch_rows(&self) -> Result<Vec<WordRow>, ServiceError> {
        let service = self.service.lock();
        let query = self.state.query.as_str();
        let start = self.state.start_point;

        let items = if !self.state.has_query() {
            service.get_sorted_items()?
        } else {
            match self.state.field {
                SearchField::Entry => service.search_by_entry(query, start)?,
                SearchField::Meaning => service.search_by_meaning(query, start)?,
            }
        };
        Ok(items.into_iter().map(WordRow::from).collect())
    }
}
