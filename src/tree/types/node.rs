//! `TreeNode`: the leaf/branch sum type stored in the arena.

use super::branch::TreeBranch;
use super::common::{NodeId, Parent};
use super::leaf::TreeLeaf;

/// A node of the document tree
#[derive(Debug, Clone)]
pub enum TreeNode {
    /// A pane with its own tab strip
    Leaf(TreeLeaf),
    /// A split holding two or more children
    Branch(TreeBranch),
}

impl TreeNode {
    pub fn id(&self) -> &NodeId {
        match self {
            TreeNode::Leaf(leaf) => &leaf.id,
            TreeNode::Branch(branch) => &branch.id,
        }
    }

    pub fn parent(&self) -> &Parent {
        match self {
            TreeNode::Leaf(leaf) => &leaf.parent,
            TreeNode::Branch(branch) => &branch.parent,
        }
    }

    pub(crate) fn set_parent(&mut self, parent: Parent) {
        match self {
            TreeNode::Leaf(leaf) => leaf.parent = parent,
            TreeNode::Branch(branch) => branch.parent = parent,
        }
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&TreeLeaf> {
        match self {
            TreeNode::Leaf(leaf) => Some(leaf),
            TreeNode::Branch(_) => None,
        }
    }

    pub fn as_leaf_mut(&mut self) -> Option<&mut TreeLeaf> {
        match self {
            TreeNode::Leaf(leaf) => Some(leaf),
            TreeNode::Branch(_) => None,
        }
    }

    pub fn as_branch(&self) -> Option<&TreeBranch> {
        match self {
            TreeNode::Leaf(_) => None,
            TreeNode::Branch(branch) => Some(branch),
        }
    }

    pub fn as_branch_mut(&mut self) -> Option<&mut TreeBranch> {
        match self {
            TreeNode::Leaf(_) => None,
            TreeNode::Branch(branch) => Some(branch),
        }
    }

    /// `"leaf"` or `"branch"`, matching the JSON discriminator
    pub fn kind(&self) -> &'static str {
        match self {
            TreeNode::Leaf(_) => "leaf",
            TreeNode::Branch(_) => "branch",
        }
    }
}
