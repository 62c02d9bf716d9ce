//! Helpers for restoring session state

use crate::tree::{DocumentTree, FileProbe};
use serde_json::Value;

/// Rebuild a window's tree, falling back to a fresh single-pane tree when the
/// saved layout is malformed
pub fn restore_or_default(layout: &Value, probe: &dyn FileProbe) -> DocumentTree {
    match DocumentTree::from_json(layout, probe) {
        Ok(tree) => tree,
        Err(e) => {
            log::warn!("Session restore: layout could not be loaded ({}), starting empty", e);
            DocumentTree::new()
        }
    }
}

/// Restore window `key` of `state`, or a fresh tree if it is missing or malformed
pub fn restore_window_or_default(
    state: &super::SessionState,
    key: &str,
    probe: &dyn FileProbe,
) -> DocumentTree {
    match state.windows.get(key) {
        Some(layout) => restore_or_default(layout, probe),
        None => {
            log::info!("Session restore: no saved layout for window '{}'", key);
            DocumentTree::new()
        }
    }
}
