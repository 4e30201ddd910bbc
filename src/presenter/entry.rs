use uuid::Uuid;

use crate::service::{ServiceError, SharedService};
use crate::ui::entry::{EntryIntent, EntryReducer, LexiconEntryState};
use crate::ui::mvi::dispatch_mvi;

pub struct LexiconEntryPresenter {
    service: SharedService,
    state: LexiconEntryState,
}

impl LexiconEntryPresenter {
    pub fn new(service: SharedService) -> Self {
        Self {
            service,
            state: LexiconEntryState::default(),
        }
    }

    pub fn state(&self) -> &LexiconEntryState {
        &self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state.dirty
    }

    pub fn current_id(&self) -> Option<Uuid> {
        self.state.draft.id
    }

    pub fn dispatch(&mut self, intent: EntryIntent) {
        dispatch_mvi!(self, state, EntryReducer, intent);
    }

    /// Load the entry with `id`, falling back to the first entry when it is
    /// missing or no id is given.
    pub fn load(&mut self, id: Option<Uuid>) {
        let result = {
            let service = self.service.lock();
            match id {
                Some(id) => match service.get_by_id(&id) {
                    Ok(Some(entry)) => Ok(Some(entry)),
                    Ok(None) => service.get_first_item(),
                    Err(err) => Err(err),
                },
                None => service.get_first_item(),
            }
        };

        match result {
            Ok(entry) => self.dispatch(EntryIntent::Load { entry }),
            Err(err) => self.fail("Could not load entry", err),
        }
    }

    pub fn new_entry(&mut self) {
        self.dispatch(EntryIntent::Load { entry: None });
    }

    pub fn discard(&mut self) {
        self.dispatch(EntryIntent::Discard);
    }

    /// Persist the draft. Returns true once it is committed.
    ///
    /// Any failure reverts what was staged so the shared unit-of-work never
    /// carries half a change.
    pub fn save(&mut self) -> bool {
        let record = self.state.draft.to_record();
        if record.entry.is_empty() {
            self.dispatch(EntryIntent::Invalid {
                message: "Entry term is required".to_string(),
            });
            return false;
        }

        let result = {
            let mut service = self.service.lock();
            let staged = match service.get_by_id(&record.id) {
                Ok(Some(_)) => service.update(record.clone()),
                Ok(None) => service.add(record.clone()),
                Err(err) => Err(err),
            }
            .and_then(|()| service.save());

            if staged.is_err() {
                if let Err(err) = service.revert() {
                    tracing::warn!(error = %err, "Could not revert after failed save");
                }
            }
            staged
        };

        match result {
            Ok(()) => {
                tracing::info!(id = %record.id, entry = %record.entry, "Entry saved");
                self.dispatch(EntryIntent::Saved { entry: record });
                true
            }
            Err(err) => {
                self.fail("Could not save entry", err);
                false
            }
        }
    }

    /// Remove the current entry. A never-saved draft is simply cleared.
    pub fn remove(&mut self) -> bool {
        let Some(id) = self.state.draft.id else {
            self.new_entry();
            return true;
        };

        let result = {
            let mut service = self.service.lock();
            let outcome = service.remove(&id).and_then(|()| service.save());
            if outcome.is_err() {
                if let Err(err) = service.revert() {
                    tracing::warn!(error = %err, "Could not revert after failed remove");
                }
            }
            outcome
        };

        match result {
            Ok(()) => {
                tracing::info!(id = %id, "Entry removed");
                self.dispatch(EntryIntent::Removed);
                true
            }
            Err(err) => {
                self.fail("Could not remove entry", err);
                false
            }
        }
    }

    fn fail(&mut self, action: &str, err: ServiceError) {
        tracing::error!(error = %err, "{}", action);
        self.dispatch(EntryIntent::Failed {
            message: format!("{}: {}", action, err),
        });
    }
}
