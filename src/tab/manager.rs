//! Tab manager for the documents open in a single pane

use super::{OpenDocument, SessionHistory, TabManagerData};

/// Manages the ordered tab strip of one pane.
///
/// Invariants kept by every mutator:
/// - the active document, when set, is one of `open_files`
/// - pinned documents precede unpinned ones; relative order within each
///   group is preserved
/// - no two documents share a path
#[derive(Debug, Clone, Default)]
pub struct TabManager {
    /// All open documents, in tab order
    open_files: Vec<OpenDocument>,
    /// Path of the active document
    active_file: Option<String>,
    /// Navigation history used by `back` / `forward`
    history: SessionHistory,
}

impl TabManager {
    /// Create an empty tab manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `path`, or activate it if it is already open.
    ///
    /// New documents are inserted right after the active one (or at the end
    /// when nothing is active). Returns false if `path` already is the
    /// active document.
    pub fn open_file(&mut self, path: &str, modify_history: bool) -> bool {
        if self.active_file.as_deref() == Some(path) {
            return false;
        }

        if !self.contains(path) {
            let insert_at = self
                .active_index()
                .map(|idx| idx + 1)
                .unwrap_or(self.open_files.len());
            self.open_files.insert(insert_at, OpenDocument::new(path));
            self.sort_pinned_left();
            log::debug!(
                "Opened {} at index {} (total: {})",
                path,
                insert_at,
                self.open_files.len()
            );
        }

        self.active_file = Some(path.to_string());
        if modify_history {
            self.history.record(path);
        }
        true
    }

    /// Close the document at `path`.
    ///
    /// Pinned documents refuse to close. When the active document closes,
    /// its left neighbour becomes active (or the new first document if it
    /// was leftmost).
    pub fn close_file(&mut self, path: &str) -> bool {
        let Some(idx) = self.position(path) else {
            return false;
        };

        if self.open_files[idx].pinned {
            log::debug!("Refusing to close pinned document {}", path);
            return false;
        }

        self.open_files.remove(idx);
        log::debug!("Closed {} (index {})", path, idx);

        if self.active_file.as_deref() != Some(path) {
            return true;
        }

        self.active_file = None;
        if !self.open_files.is_empty() {
            let new_idx = idx.saturating_sub(1);
            self.active_file = Some(self.open_files[new_idx].path.clone());
        }
        true
    }

    /// Reorder tabs to follow `order` (e.g. after a drag in the tab bar).
    ///
    /// Documents missing from `order` move to the front; pinned documents
    /// are re-sorted to the left afterwards. Returns false when `order`
    /// matches the current order exactly.
    pub fn sort_open_files<S: AsRef<str>>(&mut self, order: &[S]) -> bool {
        let unchanged = order.len() == self.open_files.len()
            && order
                .iter()
                .zip(&self.open_files)
                .all(|(path, doc)| path.as_ref() == doc.path);
        if unchanged {
            return false;
        }

        self.open_files
            .sort_by_cached_key(|doc| order.iter().position(|path| path.as_ref() == doc.path));
        self.sort_pinned_left();
        log::debug!("Reordered {} tabs", self.open_files.len());
        true
    }

    /// Set the pinned flag of `path`. Returns false if it is not open.
    pub fn set_pinned_status(&mut self, path: &str, pinned: bool) -> bool {
        let Some(doc) = self.open_files.iter_mut().find(|doc| doc.path == path) else {
            return false;
        };
        doc.pinned = pinned;
        self.sort_pinned_left();
        true
    }

    /// Point the document at `old_path` to `new_path` after a rename/move on disk.
    ///
    /// The tab keeps its position, pinned flag and active state. History
    /// entries still carry the old path. Returns false if `old_path` is not
    /// open, or if `new_path` is already open as a different tab.
    pub fn replace_file_path(&mut self, old_path: &str, new_path: &str) -> bool {
        if old_path != new_path && self.contains(new_path) {
            log::warn!(
                "Cannot rename tab {} to {}: target is already open",
                old_path,
                new_path
            );
            return false;
        }

        let Some(doc) = self.open_files.iter_mut().find(|doc| doc.path == old_path) else {
            return false;
        };
        doc.path = new_path.to_string();

        if self.active_file.as_deref() == Some(old_path) {
            self.active_file = Some(new_path.to_string());
        }
        log::debug!("Renamed tab {} -> {}", old_path, new_path);
        true
    }

    /// Step back in the navigation history and reopen that document.
    ///
    /// Returns true if the history pointer moved.
    pub fn back(&mut self) -> bool {
        let Some(path) = self.history.step_back().map(str::to_owned) else {
            return false;
        };
        log::debug!("History back to {}", path);
        self.open_file(&path, false);
        true
    }

    /// Step forward in the navigation history and reopen that document.
    ///
    /// Returns true if the history pointer moved.
    pub fn forward(&mut self) -> bool {
        let Some(path) = self.history.step_forward().map(str::to_owned) else {
            return false;
        };
        log::debug!("History forward to {}", path);
        self.open_file(&path, false);
        true
    }

    /// Make `path` the active document, or clear the active document with `None`.
    ///
    /// A path that is not open leaves the state untouched and returns false.
    pub fn set_active_file(&mut self, path: Option<&str>) -> bool {
        match path {
            None => {
                self.active_file = None;
                true
            }
            Some(path) if self.contains(path) => {
                self.active_file = Some(path.to_string());
                true
            }
            Some(_) => false,
        }
    }

    /// Get the active document
    pub fn active_file(&self) -> Option<&OpenDocument> {
        let active = self.active_file.as_deref()?;
        self.open_files.iter().find(|doc| doc.path == active)
    }

    /// Get index of the active document (0-based)
    pub fn active_index(&self) -> Option<usize> {
        self.active_file
            .as_deref()
            .and_then(|active| self.position(active))
    }

    /// All open documents, in tab order
    pub fn open_files(&self) -> &[OpenDocument] {
        &self.open_files
    }

    /// Get a document by path
    pub fn get(&self, path: &str) -> Option<&OpenDocument> {
        self.open_files.iter().find(|doc| doc.path == path)
    }

    /// Check whether `path` is open
    pub fn contains(&self, path: &str) -> bool {
        self.position(path).is_some()
    }

    /// Navigation history
    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Get the number of open documents
    pub fn len(&self) -> usize {
        self.open_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open_files.is_empty()
    }

    /// Serialized form `{ openFiles, activeFile }`
    pub fn to_json(&self) -> TabManagerData {
        TabManagerData {
            open_files: self.open_files.clone(),
            active_file: self.active_file().cloned(),
        }
    }

    fn position(&self, path: &str) -> Option<usize> {
        self.open_files.iter().position(|doc| doc.path == path)
    }

    /// Stable sort: pinned first, order otherwise untouched
    fn sort_pinned_left(&mut self) {
        self.open_files.sort_by_key(|doc| !doc.pinned);
    }
}
