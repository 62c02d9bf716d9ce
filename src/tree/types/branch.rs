//! `TreeBranch`: an N-ary split with proportional sizes.

use super::common::{Insertion, NodeId, Parent, SplitDirection};

/// Share every branch's sizes must add up to (after rounding)
pub const TOTAL_SIZE: f64 = 100.0;

/// Internal node of the tree.
///
/// `nodes` holds the IDs of the children in display order; `sizes[i]` is the
/// share of `nodes[i]`. After every mutation `sizes.len() == nodes.len()` and
/// the sizes round to [`TOTAL_SIZE`].
#[derive(Debug, Clone, PartialEq)]
pub struct TreeBranch {
    pub(crate) id: NodeId,
    pub(crate) parent: Parent,
    pub(crate) direction: SplitDirection,
    pub(crate) nodes: Vec<NodeId>,
    pub(crate) sizes: Vec<f64>,
}

impl TreeBranch {
    /// Create an empty branch
    pub(crate) fn new(id: NodeId, parent: Parent, direction: SplitDirection) -> Self {
        Self {
            id,
            parent,
            direction,
            nodes: Vec::new(),
            sizes: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn parent(&self) -> &Parent {
        &self.parent
    }

    pub fn direction(&self) -> SplitDirection {
        self.direction
    }

    /// Child IDs in display order
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    /// Replace the size vector.
    ///
    /// The vector is advisory: one of the wrong length, or one that does not
    /// add up to 100, is replaced by equal shares.
    pub fn set_sizes(&mut self, sizes: Vec<f64>) {
        self.sizes = sizes;
        self.ensure_proper_sizes();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Index of child `id`
    pub fn position(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node == id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert `content` next to `reference`, or append it if `reference` is
    /// absent or not a child. Returns the index it landed at.
    pub(crate) fn insert_node(
        &mut self,
        content: NodeId,
        reference: Option<&str>,
        insertion: Insertion,
    ) -> usize {
        let index = match reference.and_then(|id| self.position(id)) {
            Some(idx) => match insertion {
                Insertion::Before => idx,
                Insertion::After => idx + 1,
            },
            None => self.nodes.len(),
        };
        self.nodes.insert(index, content);
        self.ensure_proper_sizes();
        index
    }

    /// Remove child `id`; returns its former index
    pub(crate) fn remove_node(&mut self, id: &str) -> Option<usize> {
        let idx = self.position(id)?;
        self.nodes.remove(idx);
        self.ensure_proper_sizes();
        Some(idx)
    }

    /// Swap child `old` for `new` in place, keeping its size
    pub(crate) fn replace_node(&mut self, old: &str, new: NodeId) -> bool {
        match self.position(old) {
            Some(idx) => {
                self.nodes[idx] = new;
                true
            }
            None => false,
        }
    }

    fn ensure_proper_sizes(&mut self) {
        let sum: f64 = self.sizes.iter().sum();
        if self.sizes.len() == self.nodes.len() && sum.round() == TOTAL_SIZE {
            return;
        }

        let count = self.nodes.len();
        if !self.sizes.is_empty() || count > 0 {
            log::debug!(
                "Branch {}: resetting sizes {:?} to {} equal shares",
                self.id,
                self.sizes,
                count
            );
        }
        self.sizes = vec![TOTAL_SIZE / count as f64; count];
    }
}
