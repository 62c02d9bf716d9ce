//! `TreeLeaf`: a pane holding one tab strip.

use super::common::{NodeId, Parent};
use crate::tab::TabManager;
use crate::tree::collaborators::FileProbe;
use crate::tree::wire::LeafNodeData;

/// Terminal node of the tree; owns exactly one `TabManager`
#[derive(Debug, Clone)]
pub struct TreeLeaf {
    pub(crate) id: NodeId,
    pub(crate) parent: Parent,
    pub(crate) tab_manager: TabManager,
}

impl TreeLeaf {
    /// Create a leaf with an empty tab strip
    pub(crate) fn new(id: NodeId, parent: Parent) -> Self {
        Self {
            id,
            parent,
            tab_manager: TabManager::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn parent(&self) -> &Parent {
        &self.parent
    }

    pub fn tab_manager(&self) -> &TabManager {
        &self.tab_manager
    }

    pub fn tab_manager_mut(&mut self) -> &mut TabManager {
        &mut self.tab_manager
    }

    /// Serialized form `{ type: "leaf", id, openFiles, activeFile }`
    pub fn to_json(&self) -> LeafNodeData {
        let tabs = self.tab_manager.to_json();
        LeafNodeData {
            id: self.id.clone(),
            open_files: tabs.open_files,
            active_file: tabs.active_file,
        }
    }

    /// Reopen the saved tabs of `data`.
    ///
    /// Files rejected by `probe` are skipped in place; the saved active file
    /// is restored only if it survived.
    pub(crate) fn restore_tabs(&mut self, data: &LeafNodeData, probe: &dyn FileProbe) {
        for doc in &data.open_files {
            if !probe.is_existing_file(&doc.path) {
                log::warn!("Pane {}: skipping missing file {}", self.id, doc.path);
                continue;
            }
            self.tab_manager.open_file(&doc.path, true);
            if doc.pinned {
                self.tab_manager.set_pinned_status(&doc.path, true);
            }
        }

        let saved_active = data.active_file.as_ref().map(|doc| doc.path.as_str());
        let restored = saved_active.filter(|path| self.tab_manager.contains(path));
        if let (Some(path), None) = (saved_active, restored) {
            log::warn!("Pane {}: active file {} is no longer open", self.id, path);
        }
        self.tab_manager.set_active_file(restored);
    }
}
