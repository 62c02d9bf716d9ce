//! Capture session state from live document trees

use super::SessionState;
use crate::tree::{DocumentTree, LayoutError};
use std::collections::BTreeMap;

impl SessionState {
    /// Serialize every `(window key, tree)` pair, stamped with the current time
    pub fn capture<'a, I>(windows: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = (&'a str, &'a DocumentTree)>,
    {
        let mut layouts = BTreeMap::new();
        for (key, tree) in windows {
            layouts.insert(key.to_string(), serde_json::to_value(tree.to_json())?);
        }

        Ok(SessionState {
            saved_at: chrono::Utc::now().to_rfc3339(),
            windows: layouts,
        })
    }
}
