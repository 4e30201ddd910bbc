//! Shared test utilities and mock screens.

#![allow(dead_code, unused_imports)]

use lexicon_manager::model::LexiconEntry;
use lexicon_manager::navigation::{
    ControlId, ControlTree, Direction, Gate, Screen, ScreenContext, ScreenKind, ScreenMeta,
};
use lexicon_manager::persistence::InMemoryUnitOfWork;
use lexicon_manager::service::{share, SharedService, UnitOfWorkService};
use uuid::Uuid;

/// Bare screen that records what the controller did to it.
pub struct MockScreen {
    pub kind: ScreenKind,
    pub meta: ScreenMeta,
    pub outgoing: ScreenContext,
    pub received: Vec<(ScreenContext, Direction)>,
    pub closed: bool,
    /// Label of the single control mounted under the screen root.
    pub control_label: String,
    pub control: Option<ControlId>,
}

impl MockScreen {
    pub fn new(kind: ScreenKind, name: &str) -> Self {
        Self {
            kind,
            meta: ScreenMeta::new(name),
            outgoing: ScreenContext::default(),
            received: Vec::new(),
            closed: false,
            control_label: format!("{}-button", name),
            control: None,
        }
    }

    pub fn linked(mut self, previous: &str, next: &str) -> Self {
        self.meta.previous_screen_name = previous.to_string();
        self.meta.next_screen_name = next.to_string();
        self
    }

    pub fn gates(mut self, backward: Gate, forward: Gate) -> Self {
        self.meta.backward_gate = backward;
        self.meta.forward_gate = forward;
        self
    }

    pub fn sending(mut self, selected: Uuid) -> Self {
        self.outgoing.selected_entry = Some(selected);
        self
    }
}

impl Screen for MockScreen {
    fn kind(&self) -> ScreenKind {
        self.kind
    }

    fn meta(&self) -> &ScreenMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ScreenMeta {
        &mut self.meta
    }

    fn close(&mut self) {
        self.closed = true;
        self.meta.visible = false;
    }

    fn context(&self) -> ScreenContext {
        self.outgoing.clone()
    }

    fn receive_context(&mut self, context: &ScreenContext, direction: Direction) {
        self.received.push((context.clone(), direction));
    }

    fn mount(&mut self, root: ControlId, tree: &mut ControlTree) {
        let panel = tree.attach(root, "panel");
        self.control = Some(tree.attach(panel, self.control_label.clone()));
    }
}

pub fn sample_entries() -> Vec<LexiconEntry> {
    vec![
        LexiconEntry::new("zephyr", "a gentle breeze"),
        LexiconEntry::new("Arbor", "a tree"),
        LexiconEntry::new("harbor", "a sheltered port"),
        LexiconEntry::new("arboreal", "living in trees"),
    ]
}

pub type MemoryService = UnitOfWorkService<LexiconEntry, InMemoryUnitOfWork<LexiconEntry>>;

pub fn memory_service(records: Vec<LexiconEntry>) -> MemoryService {
    let uow = InMemoryUnitOfWork::with_records(records).expect("records have unique ids");
    UnitOfWorkService::new(uow)
}

pub fn shared_memory_service(records: Vec<LexiconEntry>) -> SharedService {
    share(memory_service(records))
}
