use uuid::Uuid;

use crate::navigation::gate::{Direction, Gate};
use crate::navigation::tree::{ControlId, ControlTree};

pub const WORD_LIST_SCREEN: &str = "WordListGrid";
pub const LEXICON_ENTRY_SCREEN: &str = "LexiconEntryScreen";

/// The closed set of screens the application knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    /// Read-only grid of entries.
    WordList,
    /// Detail and editing screen for one entry.
    LexiconEntry,
}

impl ScreenKind {
    /// Every kind, in chain order.
    pub const ALL: [ScreenKind; 2] = [ScreenKind::WordList, ScreenKind::LexiconEntry];

    pub fn is_read_only_list(self) -> bool {
        self == ScreenKind::WordList
    }

    pub fn is_entry(self) -> bool {
        self == ScreenKind::LexiconEntry
    }
}

/// Context carried from one screen to the next on a transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenContext {
    pub selected_entry: Option<Uuid>,
}

/// Identity, linkage and gates of a screen.
///
/// An empty linkage name means there is no screen in that direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenMeta {
    pub name: String,
    pub previous_screen_name: String,
    pub next_screen_name: String,
    pub backward_gate: Gate,
    pub forward_gate: Gate,
    pub title: String,
    pub visible: bool,
}

impl ScreenMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            previous_screen_name: String::new(),
            next_screen_name: String::new(),
            backward_gate: Gate::MoveToNextScreen,
            forward_gate: Gate::MoveToNextScreen,
            title: String::new(),
            visible: false,
        }
    }

    pub fn linkage(&self, direction: Direction) -> &str {
        match direction {
            Direction::Forward => &self.next_screen_name,
            Direction::Backward => &self.previous_screen_name,
        }
    }

    pub fn gate(&self, direction: Direction) -> Gate {
        match direction {
            Direction::Forward => self.forward_gate,
            Direction::Backward => self.backward_gate,
        }
    }

    pub fn set_gate(&mut self, direction: Direction, gate: Gate) {
        match direction {
            Direction::Forward => self.forward_gate = gate,
            Direction::Backward => self.backward_gate = gate,
        }
    }
}

/// The navigation capability every screen exposes to the controller.
pub trait Screen {
    fn kind(&self) -> ScreenKind;
    fn meta(&self) -> &ScreenMeta;
    fn meta_mut(&mut self) -> &mut ScreenMeta;

    fn name(&self) -> &str {
        &self.meta().name
    }

    fn is_visible(&self) -> bool {
        self.meta().visible
    }

    fn show(&mut self) {
        self.meta_mut().visible = true;
    }

    fn hide(&mut self) {
        self.meta_mut().visible = false;
    }

    /// Called once when the controller tears every screen down.
    fn close(&mut self) {
        self.hide();
    }

    /// Context this screen hands to the next one.
    fn context(&self) -> ScreenContext {
        ScreenContext::default()
    }

    /// Accept context from the screen being left.
    fn receive_context(&mut self, _context: &ScreenContext, _direction: Direction) {}

    /// Register nested controls under `root`, the node standing for this screen.
    fn mount(&mut self, _root: ControlId, _tree: &mut ControlTree) {}
}
