//! Conversion between a `DocumentTree` and its persisted JSON form.

use super::DocumentTree;
use crate::tree::collaborators::FileProbe;
use crate::tree::error::LayoutError;
use crate::tree::types::{Parent, TreeNode};
use crate::tree::wire::{BranchNodeData, NodeData, validate_node};
use serde::Deserialize;
use serde_json::Value;

impl DocumentTree {
    /// Serialize the layout. The top node's JSON is the whole document.
    pub fn to_json(&self) -> NodeData {
        self.node_data(self.node())
    }

    pub fn to_json_string(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string(&self.to_json())?)
    }

    fn node_data(&self, node: &TreeNode) -> NodeData {
        match node {
            TreeNode::Leaf(leaf) => NodeData::Leaf(leaf.to_json()),
            TreeNode::Branch(branch) => NodeData::Branch(BranchNodeData {
                id: branch.id.clone(),
                direction: branch.direction,
                sizes: branch.sizes.clone(),
                nodes: branch
                    .nodes
                    .iter()
                    .filter_map(|child| self.arena.get(child))
                    .map(|child| self.node_data(child))
                    .collect(),
            }),
        }
    }

    /// Rebuild a tree from a parsed JSON layout.
    ///
    /// Structural errors anywhere in the layout fail the whole call. Files
    /// rejected by `probe` are dropped from their tab strips.
    pub fn from_json(value: &Value, probe: &dyn FileProbe) -> Result<Self, LayoutError> {
        validate_node(value)?;
        let data = NodeData::deserialize(value)?;
        Ok(Self::from_data(&data, probe))
    }

    pub fn from_json_str(json: &str, probe: &dyn FileProbe) -> Result<Self, LayoutError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json(&value, probe)
    }

    /// Rebuild a tree from already-typed layout data.
    ///
    /// Missing or duplicate IDs are replaced, unusable size vectors become
    /// equal shares. The saved structure is otherwise kept as is.
    pub fn from_data(data: &NodeData, probe: &dyn FileProbe) -> Self {
        let mut tree = Self::new();
        // Drop the initial leaf so saved IDs never collide with it
        let placeholder = std::mem::take(&mut tree.node);
        tree.arena.remove(&placeholder);

        tree.node = tree.build_node(data, Parent::Root, probe);
        tree
    }
}
