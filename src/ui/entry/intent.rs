use crate::model::LexiconEntry;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum EntryIntent {
    /// Show `entry`, or a blank new draft for `None`. Clears any edits.
    Load { entry: Option<LexiconEntry> },
    Input(char),
    Backspace,
    FocusNext,
    FocusPrevious,
    /// Drop edits and return to the baseline.
    Discard,
    Saved { entry: LexiconEntry },
    Removed,
    /// Draft failed local validation; nothing was sent to the service.
    Invalid { message: String },
    Failed { message: String },
}

impl Intent for EntryIntent {}
