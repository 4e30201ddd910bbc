use uuid::Uuid;

use crate::ui::mvi::Intent;
use crate::ui::word_list::state::WordRow;

#[derive(Debug, Clone)]
pub enum WordListIntent {
    QueryInput(char),
    QueryBackspace,
    ClearQuery,
    ToggleField,
    ToggleStartPoint,
    MoveUp,
    MoveDown,
    /// Select the row with this id if it is present.
    Select { id: Uuid },
    /// Fresh rows from the service. The selection follows the previously
    /// selected id when it is still present.
    Loaded { rows: Vec<WordRow> },
    LoadFailed { message: String },
}

impl WordListIntent {
    /// Whether the result set must be fetched again after this intent.
    pub fn changes_criteria(&self) -> bool {
        matches!(
            self,
            Self::QueryInput(_)
                | Self::QueryBackspace
                | Self::ClearQuery
                | Self::ToggleField
                | Self::ToggleStartPoint
        )
    }
}

impl Intent for WordListIntent {}
