//! Document operations that span several leaves.

use super::DocumentTree;
use crate::tree::types::NodeId;

impl DocumentTree {
    /// IDs of every leaf that has `path` open, in display order
    pub fn leaves_with_file(&self, path: &str) -> Vec<NodeId> {
        self.all_leaves()
            .into_iter()
            .filter(|leaf| leaf.tab_manager.contains(path))
            .map(|leaf| leaf.id.clone())
            .collect()
    }

    /// Close `path` in every leaf; pinned copies stay open.
    ///
    /// Returns the number of leaves that closed it.
    pub fn close_file_everywhere(&mut self, path: &str) -> usize {
        let closed = self
            .leaves_with_file(path)
            .iter()
            .filter(|id| {
                self.find_leaf_mut(id)
                    .is_some_and(|leaf| leaf.tab_manager.close_file(path))
            })
            .count();
        log::debug!("Closed {} in {} pane(s)", path, closed);
        closed
    }

    /// Rename `old_path` to `new_path` in every leaf that has it open.
    ///
    /// Returns the number of leaves updated.
    pub fn replace_file_path_everywhere(&mut self, old_path: &str, new_path: &str) -> usize {
        self.leaves_with_file(old_path)
            .iter()
            .filter(|id| {
                self.find_leaf_mut(id)
                    .is_some_and(|leaf| leaf.tab_manager.replace_file_path(old_path, new_path))
            })
            .count()
    }

    /// Move the tab for `path` from leaf `from` to leaf `to`.
    ///
    /// Refused when the leaves are the same or unknown, when `path` is not
    /// open in `from`, or when it is pinned there.
    pub fn move_file(&mut self, from: &str, to: &str, path: &str) -> bool {
        if from == to || self.find_leaf(to).is_none() {
            return false;
        }
        let Some(source) = self.find_leaf_mut(from) else {
            return false;
        };
        if !source.tab_manager.close_file(path) {
            return false;
        }

        if let Some(target) = self.find_leaf_mut(to) {
            target.tab_manager.open_file(path, true);
        }
        log::debug!("Moved {} from pane {} to pane {}", path, from, to);
        true
    }
}
