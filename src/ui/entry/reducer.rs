use crate::ui::entry::intent::EntryIntent;
use crate::ui::entry::state::{EntryDraft, EntryField, LexiconEntryState, StatusLine};
use crate::ui::mvi::Reducer;

pub struct EntryReducer;

impl Reducer for EntryReducer {
    type State = LexiconEntryState;
    type Intent = EntryIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EntryIntent::Load { entry } => {
                let draft = entry.map(EntryDraft::from).unwrap_or_default();
                LexiconEntryState {
                    baseline: draft.clone(),
                    draft,
                    focused: EntryField::Entry,
                    dirty: false,
                    status: None,
                }
            }
            EntryIntent::Input(ch) => {
                state.draft.field_mut(state.focused).push(ch);
                state.dirty = state.draft != state.baseline;
                state.status = None;
                state
            }
            EntryIntent::Backspace => {
                state.draft.field_mut(state.focused).pop();
                state.dirty = state.draft != state.baseline;
                state
            }
            EntryIntent::FocusNext => {
                state.focused = state.focused.next();
                state
            }
            EntryIntent::FocusPrevious => {
                state.focused = state.focused.previous();
                state
            }
            EntryIntent::Discard => {
                let was_dirty = state.dirty;
                state.draft = state.baseline.clone();
                state.dirty = false;
                state.status = was_dirty.then(|| StatusLine::Info("Changes discarded".to_string()));
                state
            }
            EntryIntent::Saved { entry } => {
                let draft = EntryDraft::from(entry);
                state.baseline = draft.clone();
                state.draft = draft;
                state.dirty = false;
                state.status = Some(StatusLine::Info("Entry saved".to_string()));
                state
            }
            EntryIntent::Removed => LexiconEntryState {
                status: Some(StatusLine::Info("Entry removed".to_string())),
                ..LexiconEntryState::default()
            },
            EntryIntent::Invalid { message } | EntryIntent::Failed { message } => {
                state.status = Some(StatusLine::Error(message));
                state
            }
        }
    }
}
