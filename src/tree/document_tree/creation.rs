//! Node creation: ID allocation, splitting and building subtrees from data.

use super::DocumentTree;
use crate::tree::collaborators::{AcceptAll, FileProbe};
use crate::tree::error::LayoutError;
use crate::tree::types::{
    Insertion, NodeId, Parent, SplitDirection, TreeBranch, TreeLeaf, TreeNode,
};
use crate::tree::wire::{BranchNodeData, LeafNodeData, NodeData};

impl DocumentTree {
    /// Draw IDs from the source until one is non-empty and unused
    pub(super) fn fresh_id(&self) -> NodeId {
        loop {
            let id = (self.id_source)();
            if !id.is_empty() && !self.arena.contains_key(&id) {
                return id;
            }
        }
    }

    /// Keep `requested` if it is a usable ID, otherwise allocate a fresh one
    pub(super) fn claim_id(&self, requested: &str) -> NodeId {
        if !requested.is_empty() && !self.arena.contains_key(requested) {
            return requested.to_string();
        }

        let id = self.fresh_id();
        if !requested.is_empty() {
            log::debug!("Node id {} already in use, assigned {}", requested, id);
        }
        id
    }

    pub(super) fn create_leaf(&mut self, parent: Parent) -> NodeId {
        let id = self.fresh_id();
        self.arena
            .insert(id.clone(), TreeNode::Leaf(TreeLeaf::new(id.clone(), parent)));
        id
    }

    fn create_branch(&mut self, parent: Parent, direction: SplitDirection) -> NodeId {
        let id = self.fresh_id();
        self.arena.insert(
            id.clone(),
            TreeNode::Branch(TreeBranch::new(id.clone(), parent, direction)),
        );
        id
    }

    /// Split leaf `leaf_id` along `direction`, creating an empty sibling leaf
    /// before or after it.
    ///
    /// - top-level leaf: a new branch becomes the top node holding both leaves
    /// - parent branch already splits along `direction`: the sibling joins it
    /// - otherwise: a new branch takes the leaf's slot in its parent and
    ///   holds both leaves
    ///
    /// Returns the new leaf's ID, or `None` if `leaf_id` is not a leaf here.
    pub fn split(
        &mut self,
        leaf_id: &str,
        direction: SplitDirection,
        insertion: Insertion,
    ) -> Option<NodeId> {
        let parent = self.find_leaf(leaf_id)?.parent.clone();

        let new_leaf = match parent {
            Parent::Root => {
                let branch_id = self.create_branch(Parent::Root, direction);
                let new_leaf = self.wrap_in_branch(leaf_id, &branch_id, insertion);
                self.node = branch_id;
                new_leaf
            }
            Parent::Branch(parent_id) => {
                let parent_direction = self.find_branch(&parent_id)?.direction;
                if parent_direction == direction {
                    let new_leaf = self.create_leaf(Parent::Branch(parent_id.clone()));
                    self.find_branch_mut(&parent_id)?.insert_node(
                        new_leaf.clone(),
                        Some(leaf_id),
                        insertion,
                    );
                    new_leaf
                } else {
                    let branch_id =
                        self.create_branch(Parent::Branch(parent_id.clone()), direction);
                    self.find_branch_mut(&parent_id)?.insert_node(
                        branch_id.clone(),
                        Some(leaf_id),
                        Insertion::After,
                    );
                    self.detach_child(&parent_id, leaf_id);
                    self.wrap_in_branch(leaf_id, &branch_id, insertion)
                }
            }
        };

        log::info!(
            "Split pane {} {} ({:?}), new pane {}",
            leaf_id,
            direction,
            insertion,
            new_leaf
        );
        Some(new_leaf)
    }

    /// Move `leaf_id` into the empty `branch_id` together with a new sibling
    fn wrap_in_branch(&mut self, leaf_id: &str, branch_id: &str, insertion: Insertion) -> NodeId {
        let new_leaf = self.create_leaf(Parent::Branch(branch_id.to_string()));
        self.set_parent(leaf_id, Parent::Branch(branch_id.to_string()));
        if let Some(branch) = self.find_branch_mut(branch_id) {
            branch.insert_node(leaf_id.to_string(), None, Insertion::After);
            branch.insert_node(new_leaf.clone(), Some(leaf_id), insertion);
        }
        new_leaf
    }

    /// Insert a subtree built from `content` into branch `branch_id`, next to
    /// `reference` (or at the end when `reference` is not a child).
    ///
    /// IDs in `content` are kept when unused and reassigned otherwise; every
    /// listed file is opened.
    pub fn add_node(
        &mut self,
        branch_id: &str,
        content: &NodeData,
        reference: Option<&str>,
        insertion: Insertion,
    ) -> Result<NodeId, LayoutError> {
        if self.find_branch(branch_id).is_none() {
            return Err(LayoutError::BranchNotFound(branch_id.to_string()));
        }

        let id = self.build_node(content, Parent::Branch(branch_id.to_string()), &AcceptAll);
        if let Some(branch) = self.find_branch_mut(branch_id) {
            branch.insert_node(id.clone(), reference, insertion);
        }
        Ok(id)
    }

    /// Insert an empty leaf into branch `branch_id`
    pub fn add_leaf(
        &mut self,
        branch_id: &str,
        reference: Option<&str>,
        insertion: Insertion,
    ) -> Option<NodeId> {
        self.find_branch(branch_id)?;
        let id = self.create_leaf(Parent::Branch(branch_id.to_string()));
        self.find_branch_mut(branch_id)?
            .insert_node(id.clone(), reference, insertion);
        Some(id)
    }

    /// Build the subtree described by `data` under `parent` and return its ID.
    ///
    /// The caller links the returned node into `parent`.
    pub(super) fn build_node(
        &mut self,
        data: &NodeData,
        parent: Parent,
        probe: &dyn FileProbe,
    ) -> NodeId {
        match data {
            NodeData::Leaf(leaf) => self.build_leaf(leaf, parent, probe),
            NodeData::Branch(branch) => self.build_branch(branch, parent, probe),
        }
    }

    fn build_leaf(&mut self, data: &LeafNodeData, parent: Parent, probe: &dyn FileProbe) -> NodeId {
        let id = self.claim_id(&data.id);
        let mut leaf = TreeLeaf::new(id.clone(), parent);
        leaf.restore_tabs(data, probe);
        self.arena.insert(id.clone(), TreeNode::Leaf(leaf));
        id
    }

    fn build_branch(
        &mut self,
        data: &BranchNodeData,
        parent: Parent,
        probe: &dyn FileProbe,
    ) -> NodeId {
        let id = self.claim_id(&data.id);
        self.arena.insert(
            id.clone(),
            TreeNode::Branch(TreeBranch::new(id.clone(), parent, data.direction)),
        );

        for child in &data.nodes {
            let child_id = self.build_node(child, Parent::Branch(id.clone()), probe);
            if let Some(branch) = self.find_branch_mut(&id) {
                branch.insert_node(child_id, None, Insertion::After);
            }
        }

        if let Some(branch) = self.find_branch_mut(&id) {
            branch.set_sizes(data.sizes.clone());
        }
        id
    }
}
