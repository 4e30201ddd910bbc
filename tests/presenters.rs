mod common;

use common::{sample_entries, shared_memory_service};
use lexicon_manager::model::LexiconEntry;
use lexicon_manager::presenter::{LexiconEntryPresenter, WordListPresenter};
use lexicon_manager::ui::entry::{EntryIntent, StatusLine};
use lexicon_manager::ui::word_list::WordListIntent;

fn type_into_list(presenter: &mut WordListPresenter, text: &str) {
    for ch in text.chars() {
        presenter.dispatch(WordListIntent::QueryInput(ch));
    }
}

fn type_into_entry(presenter: &mut LexiconEntryPresenter, text: &str) {
    for ch in text.chars() {
        presenter.dispatch(EntryIntent::Input(ch));
    }
}

#[test]
fn empty_query_lists_whole_catalog_sorted() {
    let mut presenter = WordListPresenter::new(shared_memory_service(sample_entries()));
    presenter.refresh();

    let entries: Vec<&str> = presenter
        .state()
        .rows
        .iter()
        .map(|r| r.entry.as_str())
        .collect();
    assert_eq!(entries, vec!["Arbor", "arboreal", "harbor", "zephyr"]);
}

#[test]
fn typing_filters_rows() {
    let mut presenter = WordListPresenter::new(shared_memory_service(sample_entries()));
    presenter.refresh();

    type_into_list(&mut presenter, "har");

    assert_eq!(presenter.state().rows.len(), 1);
    assert_eq!(presenter.state().rows[0].entry, "harbor");
}

#[test]
fn switching_field_searches_meanings() {
    let mut presenter = WordListPresenter::new(shared_memory_service(sample_entries()));
    type_into_list(&mut presenter, "a");
    assert_eq!(presenter.state().rows.len(), 2);

    presenter.dispatch(WordListIntent::ToggleField);

    // Every meaning starts with "a" except "living in trees".
    assert_eq!(presenter.state().rows.len(), 3);
}

#[test]
fn clearing_query_restores_catalog() {
    let mut presenter = WordListPresenter::new(shared_memory_service(sample_entries()));
    type_into_list(&mut presenter, "zz");
    assert!(presenter.state().rows.is_empty());

    presenter.dispatch(WordListIntent::ClearQuery);

    assert_eq!(presenter.state().rows.len(), 4);
}

#[test]
fn selected_entry_follows_cursor() {
    let mut presenter = WordListPresenter::new(shared_memory_service(sample_entries()));
    presenter.refresh();
    presenter.dispatch(WordListIntent::MoveDown);

    let expected = presenter.state().rows[1].id;
    assert_eq!(presenter.selected_entry(), Some(expected));
}

#[test]
fn list_reports_disposed_service() {
    let service = shared_memory_service(sample_entries());
    let mut presenter = WordListPresenter::new(service.clone());
    service.lock().dispose();

    presenter.refresh();

    assert!(presenter.state().rows.is_empty());
    assert!(presenter.state().error.is_some());
}

#[test]
fn load_without_id_shows_first_entry() {
    let mut presenter = LexiconEntryPresenter::new(shared_memory_service(sample_entries()));

    presenter.load(None);

    assert_eq!(presenter.state().draft.entry, "Arbor");
    assert!(!presenter.is_dirty());
}

#[test]
fn load_with_unknown_id_falls_back_to_first() {
    let mut presenter = LexiconEntryPresenter::new(shared_memory_service(sample_entries()));

    presenter.load(Some(uuid::Uuid::new_v4()));

    assert_eq!(presenter.state().draft.entry, "Arbor");
}

#[test]
fn load_on_empty_store_starts_new_draft() {
    let mut presenter = LexiconEntryPresenter::new(shared_memory_service(Vec::new()));
    presenter.load(None);
    assert!(presenter.state().is_new());
}

#[test]
fn save_updates_existing_entry() {
    let records = sample_entries();
    let target = records[2].clone();
    let service = shared_memory_service(records);
    let mut presenter = LexiconEntryPresenter::new(service.clone());
    presenter.load(Some(target.id));

    presenter.dispatch(EntryIntent::FocusNext);
    type_into_entry(&mut presenter, " for ships");

    assert!(presenter.save());
    assert!(!presenter.is_dirty());
    let stored = service.lock().get_by_id(&target.id).unwrap().unwrap();
    assert_eq!(stored.meaning, "a sheltered port for ships");
}

#[test]
fn save_adds_new_entry() {
    let service = shared_memory_service(Vec::new());
    let mut presenter = LexiconEntryPresenter::new(service.clone());
    presenter.new_entry();
    type_into_entry(&mut presenter, "nimbus");

    assert!(presenter.save());

    let id = presenter.current_id().unwrap();
    let stored = service.lock().get_by_id(&id).unwrap().unwrap();
    assert_eq!(stored.entry, "nimbus");
    assert_eq!(service.lock().get_all().unwrap().len(), 1);
}

#[test]
fn save_rejects_blank_entry_term() {
    let service = shared_memory_service(Vec::new());
    let mut presenter = LexiconEntryPresenter::new(service.clone());
    presenter.new_entry();
    type_into_entry(&mut presenter, "   ");

    assert!(!presenter.save());

    assert!(matches!(presenter.state().status, Some(StatusLine::Error(_))));
    assert!(service.lock().get_all().unwrap().is_empty());
}

#[test]
fn failed_save_keeps_draft_and_reports() {
    let service = shared_memory_service(sample_entries());
    let mut presenter = LexiconEntryPresenter::new(service.clone());
    presenter.load(None);
    type_into_entry(&mut presenter, "x");
    service.lock().dispose();

    assert!(!presenter.save());

    assert!(presenter.is_dirty());
    assert_eq!(presenter.state().draft.entry, "Arborx");
    assert!(matches!(presenter.state().status, Some(StatusLine::Error(_))));
}

#[test]
fn discard_returns_to_loaded_entry() {
    let mut presenter = LexiconEntryPresenter::new(shared_memory_service(sample_entries()));
    presenter.load(None);
    type_into_entry(&mut presenter, "xyz");

    presenter.discard();

    assert_eq!(presenter.state().draft.entry, "Arbor");
    assert!(!presenter.is_dirty());
}

#[test]
fn remove_deletes_and_commits() {
    let service = shared_memory_service(sample_entries());
    let mut presenter = LexiconEntryPresenter::new(service.clone());
    presenter.load(None);
    let id = presenter.current_id().unwrap();

    assert!(presenter.remove());

    assert!(service.lock().get_by_id(&id).unwrap().is_none());
    assert!(presenter.state().is_new());
}

#[test]
fn remove_of_unsaved_draft_just_clears() {
    let service = shared_memory_service(vec![LexiconEntry::new("arbor", "tree")]);
    let mut presenter = LexiconEntryPresenter::new(service.clone());
    presenter.new_entry();
    type_into_entry(&mut presenter, "draft");

    assert!(presenter.remove());

    assert!(presenter.state().draft.entry.is_empty());
    assert_eq!(service.lock().get_all().unwrap().len(), 1);
}

#[test]
fn failed_remove_keeps_entry_and_reports() {
    let service = shared_memory_service(sample_entries());
    let mut presenter = LexiconEntryPresenter::new(service.clone());
    presenter.load(None);
    let id = presenter.current_id();
    service.lock().dispose();

    assert!(!presenter.remove());

    assert_eq!(presenter.current_id(), id);
    assert_eq!(presenter.state().draft.entry, "Arbor");
    assert!(matches!(presenter.state().status, Some(StatusLine::Error(_))));
}
