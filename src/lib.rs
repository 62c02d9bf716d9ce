//! Split-pane document tree and per-pane tab management for a Markdown editor.
//!
//! - [`tree`]: the recursive pane layout of one window and its JSON form
//! - [`tab`]: the tab strip and navigation history owned by each pane
//! - [`session`]: saving and restoring the layouts of every window
//! - [`cli`], [`debug`]: the `markpane` tool and its logging bridge

pub mod cli;
pub mod debug;
pub mod session;
pub mod tab;
pub mod tree;

/// Configuration re-exported from `markpane-config`
pub mod config {
    pub use markpane_config::{Config, ConfigError, LogLevel};
}

pub use tab::{OpenDocument, SessionHistory, TabManager, TabManagerData};
pub use tree::{
    AcceptAll, DocumentTree, FileProbe, FsProbe, Insertion, LayoutError, NodeData, NodeId,
    Parent, SplitDirection, TreeBranch, TreeLeaf, TreeNode,
};
