use super::intent::Intent;
use super::state::UiState;

/// The only place a screen's state changes: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must not touch the service or the terminal.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
