//! Node removal and the collapse policy.
//!
//! A branch left with a single leaf is replaced by that leaf in its own
//! parent; a branch left with none is removed from its parent in turn. A
//! lone branch child stays wrapped. The tree never becomes empty: losing the
//! top node installs a fresh leaf.

use super::DocumentTree;
use crate::tree::types::{NodeId, Parent, TreeNode};

impl DocumentTree {
    /// Remove `node_id` (and its subtree) from branch `branch_id`.
    ///
    /// Returns false if `branch_id` is not a branch or `node_id` is not one
    /// of its children.
    pub fn remove_child(&mut self, branch_id: &str, node_id: &str) -> bool {
        if !self.detach_child(branch_id, node_id) {
            return false;
        }
        self.purge(node_id);
        true
    }

    /// Replace the top node with a fresh empty leaf.
    ///
    /// Returns false unless `node_id` is the current top node.
    pub fn remove_top_node(&mut self, node_id: &str) -> bool {
        if self.node != node_id {
            return false;
        }

        let old = std::mem::take(&mut self.node);
        self.purge(&old);
        self.node = self.create_leaf(Parent::Root);
        log::info!("Layout emptied, replaced {} with fresh pane {}", old, self.node);
        true
    }

    /// Remove `node_id` from wherever it is attached
    pub fn remove_node(&mut self, node_id: &str) -> bool {
        match self.parent_of(node_id).cloned() {
            Some(Parent::Root) => self.remove_top_node(node_id),
            Some(Parent::Branch(parent_id)) => self.remove_child(&parent_id, node_id),
            None => false,
        }
    }

    /// Unlink `child` from `branch_id` and collapse the branch if needed.
    ///
    /// The child stays in the arena with its parent link untouched; the
    /// caller either purges or reattaches it.
    pub(super) fn detach_child(&mut self, branch_id: &str, child: &str) -> bool {
        let Some(branch) = self.find_branch_mut(branch_id) else {
            return false;
        };
        if branch.remove_node(child).is_none() {
            return false;
        }

        let parent = branch.parent.clone();
        let survivor = match branch.nodes.as_slice() {
            [only] => Some(only.clone()),
            [] => None,
            _ => return true,
        };

        match (survivor, parent) {
            (Some(survivor), parent) => {
                if matches!(self.arena.get(&survivor), Some(TreeNode::Leaf(_))) {
                    self.collapse_into(branch_id, survivor, parent);
                }
            }
            (None, Parent::Root) => {
                log::debug!("Branch {} is empty, removing it", branch_id);
                self.remove_top_node(branch_id);
            }
            (None, Parent::Branch(grandparent)) => {
                log::debug!("Branch {} is empty, removing it", branch_id);
                self.remove_child(&grandparent, branch_id);
            }
        }
        true
    }

    /// Replace branch `branch_id` by its last leaf `survivor`
    fn collapse_into(&mut self, branch_id: &str, survivor: NodeId, parent: Parent) {
        self.arena.remove(branch_id);
        self.set_parent(&survivor, parent.clone());
        match parent {
            Parent::Root => self.node = survivor.clone(),
            Parent::Branch(grandparent) => {
                if let Some(branch) = self.find_branch_mut(&grandparent) {
                    branch.replace_node(branch_id, survivor.clone());
                }
            }
        }
        log::info!("Collapsed branch {} into {}", branch_id, survivor);
    }

    /// Drop `id` and everything below it from the arena
    fn purge(&mut self, id: &str) {
        if let Some(TreeNode::Branch(branch)) = self.arena.remove(id) {
            for child in &branch.nodes {
                self.purge(child);
            }
        }
    }
}
