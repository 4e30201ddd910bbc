use lexicon_manager::search::{SearchField, SearchStartPoint};
use lexicon_manager::ui::mvi::Reducer;
use lexicon_manager::ui::word_list::{WordListIntent, WordListReducer, WordListState, WordRow};
use uuid::Uuid;

fn row(entry: &str) -> WordRow {
    WordRow {
        id: Uuid::new_v4(),
        entry: entry.to_string(),
        meaning: format!("meaning of {}", entry),
    }
}

fn loaded(rows: Vec<WordRow>) -> WordListState {
    WordListReducer::reduce(WordListState::default(), WordListIntent::Loaded { rows })
}

#[test]
fn loaded_rows_select_first() {
    let state = loaded(vec![row("arbor"), row("harbor")]);
    assert_eq!(state.rows.len(), 2);
    assert_eq!(state.selected, 0);
    assert_eq!(state.selected_row().unwrap().entry, "arbor");
}

#[test]
fn query_input_appends_and_resets_selection() {
    let mut state = loaded(vec![row("arbor"), row("harbor")]);
    state.selected = 1;

    let state = WordListReducer::reduce(state, WordListIntent::QueryInput('a'));
    let state = WordListReducer::reduce(state, WordListIntent::QueryInput('r'));

    assert_eq!(state.query, "ar");
    assert_eq!(state.selected, 0);
}

#[test]
fn backspace_and_clear_edit_query() {
    let state = WordListState {
        query: "arb".to_string(),
        ..WordListState::default()
    };

    let state = WordListReducer::reduce(state, WordListIntent::QueryBackspace);
    assert_eq!(state.query, "ar");

    let state = WordListReducer::reduce(state, WordListIntent::ClearQuery);
    assert!(state.query.is_empty());
}

#[test]
fn backspace_on_empty_query_is_harmless() {
    let state = WordListReducer::reduce(WordListState::default(), WordListIntent::QueryBackspace);
    assert!(state.query.is_empty());
}

#[test]
fn toggles_flip_field_and_start_point() {
    let state = WordListReducer::reduce(WordListState::default(), WordListIntent::ToggleField);
    assert_eq!(state.field, SearchField::Meaning);

    let state = WordListReducer::reduce(state, WordListIntent::ToggleStartPoint);
    assert_eq!(state.start_point, SearchStartPoint::Anywhere);

    let state = WordListReducer::reduce(state, WordListIntent::ToggleField);
    assert_eq!(state.field, SearchField::Entry);
}

#[test]
fn movement_wraps_at_both_ends() {
    let state = loaded(vec![row("a"), row("b"), row("c")]);

    let state = WordListReducer::reduce(state, WordListIntent::MoveUp);
    assert_eq!(state.selected, 2);

    let state = WordListReducer::reduce(state, WordListIntent::MoveDown);
    assert_eq!(state.selected, 0);
}

#[test]
fn movement_on_empty_grid_stays_at_zero() {
    let state = WordListReducer::reduce(WordListState::default(), WordListIntent::MoveDown);
    assert_eq!(state.selected, 0);
    let state = WordListReducer::reduce(state, WordListIntent::MoveUp);
    assert_eq!(state.selected, 0);
}

#[test]
fn select_by_id_moves_cursor() {
    let rows = vec![row("a"), row("b"), row("c")];
    let target = rows[2].id;
    let state = loaded(rows);

    let state = WordListReducer::reduce(state, WordListIntent::Select { id: target });
    assert_eq!(state.selected, 2);

    let state = WordListReducer::reduce(
        state,
        WordListIntent::Select {
            id: Uuid::new_v4(),
        },
    );
    assert_eq!(state.selected, 2);
}

#[test]
fn reload_keeps_selected_entry() {
    let rows = vec![row("a"), row("b"), row("c")];
    let kept = rows[1].clone();
    let mut state = loaded(rows);
    state.selected = 1;

    let fresh = vec![row("0"), row("a2"), kept.clone(), row("d")];
    let state = WordListReducer::reduce(state, WordListIntent::Loaded { rows: fresh });

    assert_eq!(state.selected_row(), Some(&kept));
}

#[test]
fn reload_clamps_when_selection_disappears() {
    let mut state = loaded(vec![row("a"), row("b"), row("c")]);
    state.selected = 2;

    let state = WordListReducer::reduce(
        state,
        WordListIntent::Loaded {
            rows: vec![row("x")],
        },
    );

    assert_eq!(state.selected, 0);
}

#[test]
fn load_failure_clears_rows_and_reports() {
    let state = loaded(vec![row("a")]);

    let state = WordListReducer::reduce(
        state,
        WordListIntent::LoadFailed {
            message: "store unavailable".to_string(),
        },
    );

    assert!(state.rows.is_empty());
    assert_eq!(state.error.as_deref(), Some("store unavailable"));

    let state = loaded_after(state, vec![row("a")]);
    assert!(state.error.is_none());
}

fn loaded_after(state: WordListState, rows: Vec<WordRow>) -> WordListState {
    WordListReducer::reduce(state, WordListIntent::Loaded { rows })
}

#[test]
fn only_criteria_intents_trigger_refresh() {
    assert!(WordListIntent::QueryInput('a').changes_criteria());
    assert!(WordListIntent::ToggleStartPoint.changes_criteria());
    assert!(!WordListIntent::MoveDown.changes_criteria());
    assert!(!WordListIntent::Loaded { rows: Vec::new() }.changes_criteria());
}
