//! Tab management for the documents open in one pane
//!
//! This module provides the per-pane tab infrastructure:
//! - `OpenDocument`: a file shown as a tab, identified by its path
//! - `TabManager`: ordered tab strip, active document and navigation history
//! - `SessionHistory`: the linear back/forward history of a tab manager

mod history;
mod manager;

pub use history::SessionHistory;
pub use manager::TabManager;

use serde::{Deserialize, Serialize};

/// A document open as a tab.
///
/// The path is the document's identity; a tab manager never holds two
/// documents with the same path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenDocument {
    /// Absolute path of the file
    pub path: String,
    /// Pinned tabs sort to the front and refuse to close
    #[serde(default)]
    pub pinned: bool,
}

impl OpenDocument {
    /// Create an unpinned document for `path`
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            pinned: false,
        }
    }
}

/// Serialized form of a tab manager: `{ openFiles, activeFile }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabManagerData {
    /// Tabs in display order
    #[serde(default)]
    pub open_files: Vec<OpenDocument>,
    /// The active tab, if any
    #[serde(default)]
    pub active_file: Option<OpenDocument>,
}
