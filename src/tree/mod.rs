//! Document tree: recursive split panes, each leaf owning a tab strip.
//!
//! - [`types`]: leaf, branch and node types plus `SplitDirection` / `Insertion`
//! - [`DocumentTree`]: the root of one window's layout and every structural edit
//! - [`wire`]: the persisted JSON shape and its validation
//! - [`collaborators`]: the file probe and ID source the tree consumes

pub mod collaborators;
mod document_tree;
pub mod error;
pub mod types;
pub mod wire;

pub use collaborators::{AcceptAll, FileProbe, FsProbe, new_unique_id};
pub use document_tree::DocumentTree;
pub use error::LayoutError;
pub use types::{
    Insertion, NodeId, Parent, SplitDirection, TOTAL_SIZE, TreeBranch, TreeLeaf, TreeNode,
};
pub use wire::{BranchNodeData, LeafNodeData, NodeData};
