//! Shared integration test helpers for markpane.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{assert_tree_invariants, three_pane_tree};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers is used per file.

#![allow(dead_code)]

use markpane::tab::TabManager;
use markpane::tree::{DocumentTree, Insertion, NodeId, Parent, SplitDirection, TreeNode};
use std::collections::HashSet;
use std::path::PathBuf;
use tempfile::TempDir;

/// `V[ a, H[ b, c ] ]`; returns the tree and the leaf IDs `[a, b, c]`
pub fn three_pane_tree() -> (DocumentTree, [NodeId; 3]) {
    let mut tree = DocumentTree::new();
    let a = tree.node_id().to_string();
    let b = tree
        .split(&a, SplitDirection::Vertical, Insertion::After)
        .expect("split a");
    let c = tree
        .split(&b, SplitDirection::Horizontal, Insertion::After)
        .expect("split b");
    (tree, [a, b, c])
}

/// Open `paths` in leaf `leaf`, recording history
pub fn open_all(tree: &mut DocumentTree, leaf: &str, paths: &[&str]) {
    let tabs = tree
        .find_leaf_mut(leaf)
        .expect("leaf exists")
        .tab_manager_mut();
    for path in paths {
        tabs.open_file(path, true);
    }
}

/// Paths of `tabs` in display order
pub fn tab_paths(tabs: &TabManager) -> Vec<String> {
    tabs.open_files().iter().map(|doc| doc.path.clone()).collect()
}

/// Check every structural invariant reachable from the top node:
/// unique IDs, consistent parent links, sizes matching children and
/// summing to 100, no orphaned arena entries, and tab strip invariants.
pub fn assert_tree_invariants(tree: &DocumentTree) {
    let mut seen = HashSet::new();
    check_node(tree, tree.node_id(), &Parent::Root, &mut seen);
    assert_eq!(seen.len(), tree.node_count(), "arena holds unreachable nodes");
}

fn check_node(tree: &DocumentTree, id: &str, expected_parent: &Parent, seen: &mut HashSet<String>) {
    assert!(seen.insert(id.to_string()), "duplicate node id {id}");
    let node = tree.get(id).expect("child is in the arena");
    assert_eq!(node.parent(), expected_parent, "parent link of {id}");

    match node {
        TreeNode::Leaf(leaf) => assert_tab_invariants(leaf.tab_manager()),
        TreeNode::Branch(branch) => {
            assert_eq!(branch.sizes().len(), branch.nodes().len(), "sizes of {id}");
            if !branch.nodes().is_empty() {
                let sum: f64 = branch.sizes().iter().sum();
                assert_eq!(sum.round(), 100.0, "sizes of {id} sum to {sum}");
            }
            let parent = Parent::Branch(id.to_string());
            for child in branch.nodes() {
                check_node(tree, child, &parent, seen);
            }
        }
    }
}

/// Active document is open, pinned documents come first, paths are unique
pub fn assert_tab_invariants(tabs: &TabManager) {
    if let Some(active) = tabs.active_file() {
        assert!(tabs.contains(&active.path));
    }

    let first_unpinned = tabs
        .open_files()
        .iter()
        .position(|doc| !doc.pinned)
        .unwrap_or(tabs.len());
    assert!(
        tabs.open_files()[first_unpinned..].iter().all(|doc| !doc.pinned),
        "pinned tab after an unpinned one: {:?}",
        tabs.open_files()
    );

    let unique: HashSet<&str> = tabs.open_files().iter().map(|doc| doc.path.as_str()).collect();
    assert_eq!(unique.len(), tabs.len(), "duplicate paths");
}

/// Temporary directory with empty Markdown files named `names`
///
/// The `TempDir` must be kept alive for as long as the paths are used.
pub fn temp_markdown_files(names: &[&str]) -> (TempDir, Vec<String>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let paths = names
        .iter()
        .map(|name| {
            let path: PathBuf = temp_dir.path().join(name);
            std::fs::write(&path, "# test\n").expect("write markdown file");
            path.to_string_lossy().to_string()
        })
        .collect();
    (temp_dir, paths)
}
