//! Core types for the document tree.
//!
//! Sub-modules:
//! - [`common`]: `NodeId`, `Parent`, `SplitDirection`, `Insertion`
//! - [`leaf`]: `TreeLeaf`, a pane owning one tab strip
//! - [`branch`]: `TreeBranch`, an N-ary split with its size vector
//! - [`node`]: `TreeNode`, the sum type stored in the tree's arena

mod branch;
mod common;
mod leaf;
mod node;


pub use branch::{TOTAL_SIZE, TreeBranch};
pub use common::{Insertion, NodeId, Parent, SplitDirection};
pub use leaf::TreeLeaf;
pub use node::TreeNode;
