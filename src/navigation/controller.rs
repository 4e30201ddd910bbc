use std::collections::VecDeque;

use crate::navigation::gate::{Direction, Gate};
use crate::navigation::registry::{RegistryError, ScreenRegistry};
use crate::navigation::screen::Screen;
use crate::navigation::tree::{ControlId, ControlTree};

/// What raised a navigation request: a screen directly, or a control nested
/// somewhere inside one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSource {
    Screen(String),
    Control(ControlId),
}

/// Messages screens post to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavRequest {
    RequestNext { source: EventSource },
    RequestPrevious { source: EventSource },
    RequestCloseAll,
}

/// Why a request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The source did not lead back to a live screen.
    Unresolved,
    /// The source screen has no linkage in that direction.
    NoLinkage,
    /// The source screen's gate for that direction is closed.
    GateClosed,
    /// The linkage names a screen that is not live.
    TargetMissing,
    /// The linkage points back at the source screen.
    SelfLink,
    /// Every screen has already been closed.
    AlreadyClosed,
}

/// Result of handling one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    Moved {
        from: String,
        to: String,
        direction: Direction,
    },
    Denied(DenyReason),
    Closed,
}

/// Single authority over which screen is visible and whether a transition
/// is allowed.
///
/// Generic over the screen type so it can drive real terminal screens as
/// well as bare test doubles.
pub struct NavigationController<S: ?Sized + Screen> {
    registry: ScreenRegistry<S>,
    tree: ControlTree,
    queue: VecDeque<NavRequest>,
    closed: bool,
}

impl<S: ?Sized + Screen> NavigationController<S> {
    pub fn new() -> Self {
        Self {
            registry: ScreenRegistry::new(),
            tree: ControlTree::new(),
            queue: VecDeque::new(),
            closed: false,
        }
    }

    /// Add a screen to the live set and mount its controls.
    ///
    /// Returns the tree node standing for the screen. Nothing is changed if
    /// the name is empty or already live.
    pub fn register_screen(&mut self, mut screen: Box<S>) -> Result<ControlId, RegistryError> {
        self.registry.ensure_available(screen.name())?;

        let root = self.tree.add_screen_root(screen.name());
        screen.mount(root, &mut self.tree);
        tracing::debug!(screen = %screen.name(), "Screen registered");
        self.registry.insert(screen)?;
        Ok(root)
    }

    /// Queue a request and process everything queued, oldest first.
    pub fn dispatch(&mut self, request: NavRequest) -> Vec<NavOutcome> {
        self.post(request);
        self.process_pending()
    }

    /// Queue a request without processing it.
    pub fn post(&mut self, request: NavRequest) {
        self.queue.push_back(request);
    }

    pub fn process_pending(&mut self) -> Vec<NavOutcome> {
        let mut outcomes = Vec::with_capacity(self.queue.len());
        while let Some(request) = self.queue.pop_front() {
            let outcome = match request {
                NavRequest::RequestNext { source } => self.on_request_next(&source),
                NavRequest::RequestPrevious { source } => self.on_request_previous(&source),
                NavRequest::RequestCloseAll => self.on_request_close_all(),
            };
            outcomes.push(outcome);
        }
        outcomes
    }

    pub fn on_request_next(&mut self, source: &EventSource) -> NavOutcome {
        self.navigate(source, Direction::Forward)
    }

    pub fn on_request_previous(&mut self, source: &EventSource) -> NavOutcome {
        self.navigate(source, Direction::Backward)
    }

    /// Close every live screen and empty the live set. Terminal.
    pub fn on_request_close_all(&mut self) -> NavOutcome {
        if self.closed {
            return NavOutcome::Denied(DenyReason::AlreadyClosed);
        }
        tracing::info!(screens = self.registry.len(), "Closing all screens");
        self.registry.close_all();
        self.tree.clear();
        self.queue.clear();
        self.closed = true;
        NavOutcome::Closed
    }

    /// Make `name` the only visible screen. Used to bring up the first screen.
    pub fn show_screen(&mut self, name: &str) -> bool {
        let Some(index) = self.registry.position(name) else {
            return false;
        };
        for (i, screen) in self.registry.iter_mut().enumerate() {
            if i != index && screen.is_visible() {
                screen.hide();
            }
        }
        if let Some(screen) = self.registry.at_mut(index) {
            screen.show();
        }
        true
    }

    /// Resolve an event source to the live screen that owns it.
    pub fn resolve(&self, source: &EventSource) -> Option<&S> {
        self.resolve_index(source).and_then(|i| self.registry.at(i))
    }

    pub fn screen(&self, name: &str) -> Option<&S> {
        self.registry.get(name)
    }

    pub fn screen_mut(&mut self, name: &str) -> Option<&mut S> {
        self.registry.get_mut(name)
    }

    pub fn visible_screen(&self) -> Option<&S> {
        self.registry.visible()
    }

    pub fn visible_screen_mut(&mut self) -> Option<&mut S> {
        self.registry.visible_mut()
    }

    pub fn registry(&self) -> &ScreenRegistry<S> {
        &self.registry
    }

    pub fn tree(&self) -> &ControlTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut ControlTree {
        &mut self.tree
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn resolve_index(&self, source: &EventSource) -> Option<usize> {
        match source {
            EventSource::Screen(name) => self.registry.position(name),
            EventSource::Control(id) => self
                .tree
                .owning_screen(*id)
                .and_then(|name| self.registry.position(name)),
        }
    }

    fn navigate(&mut self, source: &EventSource, direction: Direction) -> NavOutcome {
        let outcome = self.try_navigate(source, direction);
        match &outcome {
            NavOutcome::Moved { from, to, .. } => {
                tracing::info!(from = %from, to = %to, ?direction, "Screen changed");
            }
            NavOutcome::Denied(reason) => {
                tracing::debug!(?source, ?direction, ?reason, "Navigation request ignored");
            }
            NavOutcome::Closed => {}
        }
        outcome
    }

    fn try_navigate(&mut self, source: &EventSource, direction: Direction) -> NavOutcome {
        if self.closed {
            return NavOutcome::Denied(DenyReason::AlreadyClosed);
        }
        let Some(from) = self.resolve_index(source) else {
            return NavOutcome::Denied(DenyReason::Unresolved);
        };
        let Some(current) = self.registry.at(from) else {
            return NavOutcome::Denied(DenyReason::Unresolved);
        };

        let link = current.meta().linkage(direction).to_string();
        if link.is_empty() {
            return NavOutcome::Denied(DenyReason::NoLinkage);
        }
        if !current.meta().gate(direction).is_open() {
            return NavOutcome::Denied(DenyReason::GateClosed);
        }
        let Some(to) = self.registry.position(&link) else {
            return NavOutcome::Denied(DenyReason::TargetMissing);
        };
        let Some((current, target)) = self.registry.pair_mut(from, to) else {
            return NavOutcome::Denied(DenyReason::SelfLink);
        };

        propagate_attributes(&*current, target, direction);

        // Going back to the list re-opens the gate the leaving screen may have
        // closed while it had edits in progress.
        if direction == Direction::Backward && target.kind().is_read_only_list() {
            current.meta_mut().backward_gate = Gate::MoveToNextScreen;
        }

        target.show();
        current.hide();

        NavOutcome::Moved {
            from: current.name().to_string(),
            to: target.name().to_string(),
            direction,
        }
    }
}

impl<S: ?Sized + Screen> Default for NavigationController<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy shared context from `source` to `target`.
///
/// Nothing leaves the entry screen: a draft in progress there must not
/// overwrite the list's selection.
fn propagate_attributes<S: ?Sized + Screen>(source: &S, target: &mut S, direction: Direction) {
    if source.kind().is_entry() {
        tracing::trace!(source = %source.name(), "Attribute propagation suppressed");
        return;
    }
    let context = source.context();
    target.receive_context(&context, direction);
}
