//! One presenter per screen.
//!
//! A presenter owns its screen's state, runs service calls and turns their
//! results into intents. Persistence failures end up in the screen's status
//! line; they never escape a presenter.

mod entry;
mod word_list;

pub use entry::LexiconEntryPresenter;
pub use word_list::WordListPresenter;
