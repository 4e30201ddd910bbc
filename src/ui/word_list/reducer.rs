use crate::ui::mvi::Reducer;
use crate::ui::word_list::intent::WordListIntent;
use crate::ui::word_list::state::WordListState;

pub struct WordListReducer;

impl Reducer for WordListReducer {
    type State = WordListState;
    type Intent = WordListIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WordListIntent::QueryInput(ch) => {
                state.query.push(ch);
                state.selected = 0;
            }
            WordListIntent::QueryBackspace => {
                state.query.pop();
                state.selected = 0;
            }
            WordListIntent::ClearQuery => {
                state.query.clear();
                state.selected = 0;
            }
            WordListIntent::ToggleField => state.field = state.field.toggle(),
            WordListIntent::ToggleStartPoint => state.start_point = state.start_point.toggle(),
            WordListIntent::MoveUp => {
                state.selected = if state.selected == 0 {
                    state.rows.len().saturating_sub(1)
                } else {
                    state.selected - 1
                };
            }
            WordListIntent::MoveDown => {
                state.selected = if state.selected + 1 >= state.rows.len() {
                    0
                } else {
                    state.selected + 1
                };
            }
            WordListIntent::Select { id } => {
                if let Some(index) = state.rows.iter().position(|row| row.id == id) {
                    state.selected = index;
                }
            }
            WordListIntent::Loaded { rows } => {
                let previous = state.selected_row().map(|row| row.id);
                state.selected = previous
                    .and_then(|id| rows.iter().position(|row| row.id == id))
                    .unwrap_or_else(|| state.selected.min(rows.len().saturating_sub(1)));
                state.rows = rows;
                state.error = None;
            }
            WordListIntent::LoadFailed { message } => {
                state.rows.clear();
                state.selected = 0;
                state.error = Some(message);
            }
        }
        state
    }
}
