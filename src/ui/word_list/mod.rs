mod intent;
mod reducer;
mod screen;
mod state;

pub use intent::WordListIntent;
pub use reducer::WordListReducer;
pub use screen::WordListScreen;
pub use state::{WordListState, WordRow};
