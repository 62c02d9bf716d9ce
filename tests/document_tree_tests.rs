//! Integration tests for pane splitting, collapse and lookup
//!
//! Covers the structural laws of the document tree:
//! - a new tree is a single empty pane
//! - splitting creates, joins or nests branches depending on the parent
//! - removing the pane created by a split restores the original layout
//! - sizes and IDs stay valid after any sequence of edits

mod common;

use common::{assert_tree_invariants, open_all, three_pane_tree};
use markpane::tree::{DocumentTree, Insertion, NodeData, Parent, SplitDirection};

// ============================================================================
// Construction and splitting
// ============================================================================

#[test]
fn test_new_tree_has_single_empty_leaf() {
    let tree = DocumentTree::new();
    let leaf = tree.node().as_leaf().expect("top node is a leaf");
    assert!(leaf.tab_manager().open_files().is_empty());
    assert!(leaf.tab_manager().active_file().is_none());
    assert_eq!(tree.all_leaves().len(), 1);
    assert_tree_invariants(&tree);
}

#[test]
fn test_split_root_leaf_vertically() {
    let mut tree = DocumentTree::new();
    let leaf = tree.node_id().to_string();
    let new_leaf = tree
        .split(&leaf, SplitDirection::Vertical, Insertion::After)
        .unwrap();

    let branch = tree.node().as_branch().expect("top node is a branch");
    assert_eq!(branch.direction(), SplitDirection::Vertical);
    assert_eq!(branch.nodes(), [leaf, new_leaf]);
    assert!(branch.nodes().iter().all(|id| tree.find_leaf(id).is_some()));
    assert_eq!(branch.sizes(), [50.0, 50.0]);
    assert_eq!(tree.direction(), Some(SplitDirection::Vertical));
    assert_tree_invariants(&tree);
}

#[test]
fn test_cross_direction_split_keeps_slot() {
    let (tree, [a, b, c]) = three_pane_tree();
    let top = tree.node().as_branch().unwrap();
    assert_eq!(top.nodes()[0], a);

    let nested = tree.find_branch(&top.nodes()[1]).unwrap();
    assert_eq!(nested.direction(), SplitDirection::Horizontal);
    assert_eq!(nested.nodes(), [b, c]);
    assert_tree_invariants(&tree);
}

#[test]
fn test_split_keeps_tabs_of_split_pane() {
    let mut tree = DocumentTree::new();
    let leaf = tree.node_id().to_string();
    open_all(&mut tree, &leaf, &["/a.md", "/b.md"]);

    let new_leaf = tree
        .split(&leaf, SplitDirection::Horizontal, Insertion::Before)
        .unwrap();
    assert_eq!(tree.find_leaf(&leaf).unwrap().tab_manager().len(), 2);
    assert!(tree.find_leaf(&new_leaf).unwrap().tab_manager().is_empty());
}

// ============================================================================
// Collapse
// ============================================================================

#[test]
fn test_split_then_remove_restores_root_leaf() {
    let mut tree = DocumentTree::new();
    let leaf = tree.node_id().to_string();
    let before = tree.to_json();

    let sibling = tree
        .split(&leaf, SplitDirection::Vertical, Insertion::After)
        .unwrap();
    assert!(tree.remove_node(&sibling));

    assert_eq!(tree.node_id(), leaf);
    assert_eq!(tree.to_json(), before);
    assert_eq!(tree.node_count(), 1);
    assert_tree_invariants(&tree);
}

#[test]
fn test_split_then_remove_restores_nested_slot() {
    let (mut tree, [a, b, c]) = three_pane_tree();
    let before = tree.to_json();

    for insertion in [Insertion::Before, Insertion::After] {
        for direction in [SplitDirection::Horizontal, SplitDirection::Vertical] {
            for leaf in [&a, &b, &c] {
                let sibling = tree.split(leaf, direction, insertion).unwrap();
                assert_tree_invariants(&tree);
                assert!(tree.remove_node(&sibling));
                assert_eq!(tree.to_json(), before, "split {leaf} {direction} {insertion:?}");
            }
        }
    }
}

#[test]
fn test_removing_leaf_of_two_reattaches_sibling() {
    let (mut tree, [a, b, c]) = three_pane_tree();
    let top = tree.node_id().to_string();
    let nested = tree.parent_of(&b).unwrap().branch_id().unwrap().to_string();

    assert!(tree.remove_node(&b));
    assert!(tree.find_branch(&nested).is_none());
    assert_eq!(tree.parent_of(&c), Some(&Parent::Branch(top.clone())));
    assert_eq!(tree.find_branch(&top).unwrap().nodes(), [a, c]);
    assert_tree_invariants(&tree);
}

#[test]
fn test_lone_nested_branch_keeps_its_wrapper() {
    let (mut tree, [a, b, c]) = three_pane_tree();
    let top = tree.node_id().to_string();
    let nested = tree.parent_of(&b).unwrap().branch_id().unwrap().to_string();

    assert!(tree.remove_node(&a));
    assert_eq!(tree.node_id(), top);
    assert_eq!(tree.direction(), Some(SplitDirection::Vertical));
    assert_tree_invariants(&tree);

    let NodeData::Branch(saved) = tree.to_json() else {
        panic!("top node should still be a branch");
    };
    assert_eq!(saved.sizes, [100.0]);
    assert_eq!(saved.nodes.len(), 1);
    assert_eq!(saved.nodes[0].id(), nested);
    assert_eq!(tree.leaf_ids(), vec![b, c]);
}

#[test]
fn test_removing_every_leaf_leaves_one_fresh_leaf() {
    let (mut tree, leaves) = three_pane_tree();
    for leaf in &leaves {
        assert!(tree.remove_node(leaf));
        assert_tree_invariants(&tree);
    }

    assert_eq!(tree.node_count(), 1);
    let leaf = tree.node().as_leaf().unwrap();
    assert!(!leaves.iter().any(|id| id == leaf.id()));
}

// ============================================================================
// Invariants under longer edit sequences
// ============================================================================

#[test]
fn test_sizes_and_ids_stay_valid_after_many_edits() {
    let mut tree = DocumentTree::new();
    let directions = [SplitDirection::Vertical, SplitDirection::Horizontal];

    for round in 0..40 {
        let leaves = tree.leaf_ids();
        let target = &leaves[round % leaves.len()];
        let insertion = if round % 3 == 0 { Insertion::Before } else { Insertion::After };
        tree.split(target, directions[round % 2], insertion).unwrap();
        assert_tree_invariants(&tree);

        if round % 4 == 3 {
            let leaves = tree.leaf_ids();
            assert!(tree.remove_node(&leaves[round % leaves.len()]));
            assert_tree_invariants(&tree);
        }
    }

    if let Some(branch) = tree.node().as_branch() {
        let id = branch.id().to_string();
        let count = branch.nodes().len();
        let mut sizes = vec![0.0; count];
        sizes[0] = 100.0;
        tree.find_branch_mut(&id).unwrap().set_sizes(sizes.clone());
        assert_eq!(tree.find_branch(&id).unwrap().sizes(), sizes);
    }
    assert_tree_invariants(&tree);
}

#[test]
fn test_add_node_renames_colliding_ids() {
    let (mut tree, [a, b, _]) = three_pane_tree();
    let top = tree.node_id().to_string();

    // Re-insert a copy of the whole layout: every ID in it is already taken
    let copy: NodeData = tree.to_json();
    let added = tree.add_node(&top, &copy, Some(&a), Insertion::After).unwrap();

    assert_eq!(tree.all_leaves().len(), 6);
    assert_eq!(tree.find_branch(&top).unwrap().nodes()[1], added);
    assert!(tree.find_leaf(&b).is_some());
    assert_tree_invariants(&tree);
}

#[test]
fn test_find_leaf_and_branch() {
    let (tree, [a, b, _]) = three_pane_tree();
    let nested = tree.parent_of(&b).unwrap().branch_id().unwrap().to_string();

    assert_eq!(tree.find_leaf(&a).unwrap().id(), a);
    assert!(tree.find_leaf(&nested).is_none());
    assert!(tree.find_branch(&a).is_none());
    assert_eq!(tree.find_branch(&nested).unwrap().id(), nested);
    assert!(tree.find_leaf("unknown").is_none());
}
