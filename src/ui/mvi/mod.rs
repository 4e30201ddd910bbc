//! Model-View-Intent primitives shared by every screen.
//!
//! ```text
//! key ──→ Intent ──→ Reducer ──→ State ──→ render
//!                       ↑
//!            presenter (service results)
//! ```
//!
//! Reducers are pure. Presenters run the service calls and feed their
//! results back in as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

/// Run `$reducer` over the state stored in `$self.$field`.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer as $crate::ui::mvi::Reducer>::reduce(
            std::mem::take(&mut $self.$field),
            $intent,
        );
    };
}

pub(crate) use dispatch_mvi;
