//! `DocumentTree`: the root of one window's pane layout.
//!
//! Nodes live in an arena keyed by ID. Branches own their children through
//! the ordered `nodes` list; every node's `parent` is a plain back-link that
//! is rewritten whenever the node moves. Only nodes reachable from the top
//! node are kept in the arena, so an arena lookup answers "is this ID used
//! anywhere in the tree".
//!
//! Sub-modules:
//! - [`creation`]: IDs, `split`, `add_node`, building subtrees from data
//! - [`removal`]: `remove_child`, `remove_node` and the collapse policy
//! - [`files`]: document operations spanning several leaves
//! - [`serialize`]: `to_json` / `from_json`

mod creation;
mod files;
mod removal;
mod serialize;

use super::collaborators::new_unique_id;
use super::types::{NodeId, Parent, SplitDirection, TreeBranch, TreeLeaf, TreeNode};
use std::collections::HashMap;

/// One window's layout.
///
/// Always holds at least one node: a tree that loses its last node gets a
/// fresh empty leaf.
#[derive(Debug, Clone)]
pub struct DocumentTree {
    /// ID of the top-level node
    pub(super) node: NodeId,
    /// Every node attached to the tree
    pub(super) arena: HashMap<NodeId, TreeNode>,
    /// Source of fresh node IDs
    pub(super) id_source: fn() -> NodeId,
}

impl Default for DocumentTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTree {
    /// Create a tree holding a single empty leaf
    pub fn new() -> Self {
        Self::with_id_source(new_unique_id)
    }

    /// Create a tree that draws fresh IDs from `id_source`.
    ///
    /// The source must eventually yield an unused, non-empty ID.
    pub fn with_id_source(id_source: fn() -> NodeId) -> Self {
        let mut tree = Self {
            node: NodeId::new(),
            arena: HashMap::new(),
            id_source,
        };
        tree.node = tree.create_leaf(Parent::Root);
        tree
    }

    /// The top-level node
    pub fn node(&self) -> &TreeNode {
        &self.arena[&self.node]
    }

    pub fn node_id(&self) -> &str {
        &self.node
    }

    /// Split axis of the top-level node, `None` when it is a leaf
    pub fn direction(&self) -> Option<SplitDirection> {
        self.node().as_branch().map(TreeBranch::direction)
    }

    /// Look up any node by ID
    pub fn get(&self, id: &str) -> Option<&TreeNode> {
        self.arena.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.arena.contains_key(id)
    }

    pub fn parent_of(&self, id: &str) -> Option<&Parent> {
        self.arena.get(id).map(TreeNode::parent)
    }

    /// Number of leaves and branches in the tree
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn find_leaf(&self, id: &str) -> Option<&TreeLeaf> {
        self.arena.get(id).and_then(TreeNode::as_leaf)
    }

    pub fn find_leaf_mut(&mut self, id: &str) -> Option<&mut TreeLeaf> {
        self.arena.get_mut(id).and_then(TreeNode::as_leaf_mut)
    }

    pub fn find_branch(&self, id: &str) -> Option<&TreeBranch> {
        self.arena.get(id).and_then(TreeNode::as_branch)
    }

    pub fn find_branch_mut(&mut self, id: &str) -> Option<&mut TreeBranch> {
        self.arena.get_mut(id).and_then(TreeNode::as_branch_mut)
    }

    /// Depth-first search for leaf `id` inside the subtree rooted at `scope`
    pub fn find_leaf_under(&self, scope: &str, id: &str) -> Option<&TreeLeaf> {
        match self.arena.get(scope)? {
            TreeNode::Leaf(leaf) => (leaf.id == id).then_some(leaf),
            TreeNode::Branch(branch) => branch
                .nodes
                .iter()
                .find_map(|child| self.find_leaf_under(child, id)),
        }
    }

    /// Depth-first search for branch `id` inside the subtree rooted at
    /// `scope`, `scope` itself included
    pub fn find_branch_under(&self, scope: &str, id: &str) -> Option<&TreeBranch> {
        match self.arena.get(scope)? {
            TreeNode::Leaf(_) => None,
            TreeNode::Branch(branch) if branch.id == id => Some(branch),
            TreeNode::Branch(branch) => branch
                .nodes
                .iter()
                .find_map(|child| self.find_branch_under(child, id)),
        }
    }

    /// Every leaf, depth-first in display order
    pub fn all_leaves(&self) -> Vec<&TreeLeaf> {
        let mut leaves = Vec::new();
        self.collect_leaves(&self.node, &mut leaves);
        leaves
    }

    /// IDs of every leaf, depth-first in display order
    pub fn leaf_ids(&self) -> Vec<NodeId> {
        self.all_leaves()
            .into_iter()
            .map(|leaf| leaf.id.clone())
            .collect()
    }

    fn collect_leaves<'a>(&'a self, id: &str, out: &mut Vec<&'a TreeLeaf>) {
        match self.arena.get(id) {
            Some(TreeNode::Leaf(leaf)) => out.push(leaf),
            Some(TreeNode::Branch(branch)) => {
                for child in &branch.nodes {
                    self.collect_leaves(child, out);
                }
            }
            None => {}
        }
    }

    pub(super) fn set_parent(&mut self, id: &str, parent: Parent) {
        if let Some(node) = self.arena.get_mut(id) {
            node.set_parent(parent);
        }
    }
}
