//! Containment tree of screens and their nested controls.
//!
//! Nodes live in an arena and point at their parent by index only. A node
//! that roots a screen carries that screen's name.

/// Handle to a node in a [`ControlTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(usize);

#[derive(Debug, Clone)]
struct ControlNode {
    label: String,
    parent: Option<ControlId>,
    screen: Option<String>,
}

#[derive(Debug, Default)]
pub struct ControlTree {
    nodes: Vec<ControlNode>,
}

impl ControlTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root node standing for the screen called `screen_name`.
    pub fn add_screen_root(&mut self, screen_name: &str) -> ControlId {
        self.push(ControlNode {
            label: screen_name.to_string(),
            parent: None,
            screen: Some(screen_name.to_string()),
        })
    }

    /// Add a control nested inside `parent`.
    pub fn attach(&mut self, parent: ControlId, label: impl Into<String>) -> ControlId {
        self.push(ControlNode {
            label: label.into(),
            parent: Some(parent),
            screen: None,
        })
    }

    /// Add a control that is not (yet) inside anything.
    pub fn add_detached(&mut self, label: impl Into<String>) -> ControlId {
        self.push(ControlNode {
            label: label.into(),
            parent: None,
            screen: None,
        })
    }

    /// Move `node` under `parent`. Returns false if `node` is unknown.
    pub fn set_parent(&mut self, node: ControlId, parent: Option<ControlId>) -> bool {
        match self.nodes.get_mut(node.0) {
            Some(entry) => {
                entry.parent = parent;
                true
            }
            None => false,
        }
    }

    pub fn parent(&self, node: ControlId) -> Option<ControlId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    pub fn label(&self, node: ControlId) -> Option<&str> {
        self.nodes.get(node.0).map(|n| n.label.as_str())
    }

    /// Walk up from `node` to the first node that roots a screen.
    ///
    /// The walk visits at most as many nodes as the tree holds, so a parent
    /// cycle or a dangling parent ends in `None` rather than looping.
    pub fn owning_screen(&self, node: ControlId) -> Option<&str> {
        let mut current = Some(node);
        let mut remaining = self.nodes.len();

        while let Some(id) = current {
            if remaining == 0 {
                tracing::debug!(node = id.0, "Control chain does not terminate");
                return None;
            }
            remaining -= 1;

            let entry = self.nodes.get(id.0)?;
            if let Some(name) = &entry.screen {
                return Some(name);
            }
            current = entry.parent;
        }
        None
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    fn push(&mut self, node: ControlNode) -> ControlId {
        self.nodes.push(node);
        ControlId(self.nodes.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_root_resolves_to_itself() {
        let mut tree = ControlTree::new();
        let root = tree.add_screen_root("WordListGrid");
        assert_eq!(tree.owning_screen(root), Some("WordListGrid"));
    }

    #[test]
    fn dangling_parent_is_unresolved() {
        let mut tree = ControlTree::new();
        let orphan = tree.add_detached("orphan");
        tree.set_parent(orphan, Some(ControlId(42)));
        assert_eq!(tree.owning_screen(orphan), None);
    }

    #[test]
    fn self_parent_terminates() {
        let mut tree = ControlTree::new();
        let node = tree.add_detached("loop");
        tree.set_parent(node, Some(node));
        assert_eq!(tree.owning_screen(node), None);
    }
}
