mod intent;
mod reducer;
mod screen;
mod state;

pub use intent::EntryIntent;
pub use reducer::EntryReducer;
pub use screen::LexiconEntryScreen;
pub use state::{EntryDraft, EntryField, LexiconEntryState, StatusLine};
