//! Arena-backed floor tree shared between the generator and the diagram
//! layout engine.
//!
//! Ownership flows strictly parent to child through the arena. `parent` is a
//! plain back-handle used for layout lookups only; it is set at creation and
//! never reassigned, so a floor can never appear under two parents.

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    pub struct FloorId;
}

/// Suffix marking the terminal floor of a run.
pub const ROOT_SUFFIX: &str = " *Root*";

#[derive(Clone, Debug)]
pub struct FloorNode {
    pub label: String,
    pub parent: Option<FloorId>,
    /// Insertion order is draw order; a floor has 0, 1, or 2 children.
    pub children: Vec<FloorId>,
}

/// Rooted tree of floors for one generated run.
#[derive(Clone, Debug)]
pub struct NetTree {
    floors: SlotMap<FloorId, FloorNode>,
    root: FloorId,
}

impl NetTree {
    pub fn with_root(label: impl Into<String>) -> Self {
        let mut floors = SlotMap::with_key();
        let root =
            floors.insert(FloorNode { label: label.into(), parent: None, children: Vec::new() });
        Self { floors, root }
    }

    pub fn root(&self) -> FloorId {
        self.root
    }

    pub fn node(&self, id: FloorId) -> &FloorNode {
        &self.floors[id]
    }

    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FloorId, &FloorNode)> {
        self.floors.iter()
    }

    pub fn attach_child(&mut self, parent: FloorId, label: impl Into<String>) -> FloorId {
        let child = self.floors.insert(FloorNode {
            label: label.into(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.floors[parent].children.push(child);
        child
    }

    /// Children of one depth level, in parent order then child-index order.
    pub fn next_level(&self, level: &[FloorId]) -> Vec<FloorId> {
        level.iter().flat_map(|&id| self.floors[id].children.iter().copied()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_child_links_both_directions() {
        let mut tree = NetTree::with_root("Skunk");
        let child = tree.attach_child(tree.root(), "Wisp");

        assert_eq!(tree.node(child).parent, Some(tree.root()));
        assert_eq!(tree.node(tree.root()).children, vec![child]);
        assert_eq!(tree.floor_count(), 2);
    }

    #[test]
    fn next_level_preserves_parent_then_child_order() {
        let mut tree = NetTree::with_root("Lobby");
        let left = tree.attach_child(tree.root(), "Left");
        let right = tree.attach_child(tree.root(), "Right");
        let grandchild = tree.attach_child(left, "Deep");

        let level = tree.next_level(&[tree.root()]);
        assert_eq!(level, vec![left, right]);
        assert_eq!(tree.next_level(&level), vec![grandchild]);
        assert!(tree.next_level(&[grandchild]).is_empty());
    }
}
