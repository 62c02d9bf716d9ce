//! Session state types for saving every window's layout across restarts
//!
//! A session file holds one envelope-free layout per window, keyed by a
//! window name chosen by the host application:
//!
//! ```text
//! { "savedAt": "<RFC 3339>", "windows": { "<key>": <layout node>, ... } }
//! ```
//!
//! Window layouts are kept as raw JSON until restored, so one malformed
//! window never prevents the others from loading.

pub mod capture;
pub mod restore;
pub mod storage;

use crate::tree::{DocumentTree, FileProbe, LayoutError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Top-level session state: all windows at the time of save
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Timestamp when the session was saved (RFC 3339)
    pub saved_at: String,
    /// Layout of each window, by window key
    #[serde(default)]
    pub windows: BTreeMap<String, Value>,
}

impl SessionState {
    /// Window keys in sorted order
    pub fn window_keys(&self) -> impl Iterator<Item = &str> {
        self.windows.keys().map(String::as_str)
    }

    /// Rebuild the tree saved for window `key`.
    ///
    /// `Ok(None)` if no such window was saved; an error if its layout is
    /// malformed.
    pub fn restore_window(
        &self,
        key: &str,
        probe: &dyn FileProbe,
    ) -> Result<Option<DocumentTree>, LayoutError> {
        self.windows
            .get(key)
            .map(|layout| DocumentTree::from_json(layout, probe))
            .transpose()
    }
}
