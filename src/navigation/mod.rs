//! Screen navigation controller.
//!
//! The controller owns every live screen and is the only place that decides
//! which one is visible. Screens ask to move by posting [`NavRequest`]s; the
//! controller resolves who asked, checks that screen's gate for the requested
//! direction, and performs the hand-over.
//!
//! ```text
//! key ──→ Screen ──NavRequest──→ Controller ──→ resolve ──→ gate ──→ propagate ──→ show/hide
//! ```
//!
//! A refused request is an ordinary outcome, not an error.

mod controller;
mod gate;
mod registry;
mod screen;
mod tree;

pub use controller::{DenyReason, EventSource, NavOutcome, NavRequest, NavigationController};
pub use gate::{Direction, Gate};
pub use registry::{RegistryError, ScreenRegistry};
pub use screen::{
    Screen, ScreenContext, ScreenKind, ScreenMeta, LEXICON_ENTRY_SCREEN, WORD_LIST_SCREEN,
};
pub use tree::{ControlId, ControlTree};
