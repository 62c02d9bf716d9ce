//! File I/O for session persistence
//!
//! Sessions are stored as JSON, by default in `~/.config/markpane/session.json`
//! (see `Config::session_path`).

use super::SessionState;
use crate::tree::{DocumentTree, FileProbe};
use anyhow::{Context, Result};
use std::path::Path;

/// Save session state to `path`, creating parent directories as needed
pub fn save_session_to(state: &SessionState, path: &Path, pretty: bool) -> Result<()> {
    let contents = if pretty {
        serde_json::to_string_pretty(state)
    } else {
        serde_json::to_string(state)
    }
    .context("Failed to serialize session state")?;

    write_atomic(path, &contents)
        .with_context(|| format!("Failed to write session state to {:?}", path))?;

    log::info!(
        "Saved session state ({} windows) to {:?}",
        state.windows.len(),
        path
    );
    Ok(())
}

/// Load session state from `path`
///
/// Returns `None` if the file doesn't exist or is empty.
/// Returns an error if the file exists but is corrupt.
pub fn load_session_from(path: &Path) -> Result<Option<SessionState>> {
    let Some(contents) = read_non_empty(path)
        .with_context(|| format!("Failed to read session state from {:?}", path))?
    else {
        return Ok(None);
    };

    let state: SessionState = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse session state from {:?}", path))?;

    log::info!(
        "Loaded session state ({} windows) from {:?}",
        state.windows.len(),
        path
    );
    Ok(Some(state))
}

/// Remove the session file if it exists
pub fn clear_session(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_file(path)
            .with_context(|| format!("Failed to remove session state file {:?}", path))?;
    }
    Ok(())
}

/// Save a single window layout (bare node JSON, no envelope)
pub fn save_layout_to(tree: &DocumentTree, path: &Path) -> Result<()> {
    let contents = serde_json::to_string_pretty(&tree.to_json())
        .context("Failed to serialize layout")?;
    write_atomic(path, &contents)
        .with_context(|| format!("Failed to write layout to {:?}", path))?;
    log::info!("Saved layout to {:?}", path);
    Ok(())
}

/// Load a single window layout written by [`save_layout_to`]
pub fn load_layout_from(path: &Path, probe: &dyn FileProbe) -> Result<DocumentTree> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout from {:?}", path))?;
    let tree = DocumentTree::from_json_str(&contents, probe)
        .with_context(|| format!("Invalid layout in {:?}", path))?;
    log::info!(
        "Loaded layout ({} panes) from {:?}",
        tree.all_leaves().len(),
        path
    );
    Ok(tree)
}

fn read_non_empty(path: &Path) -> std::io::Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)?;
    Ok((!contents.trim().is_empty()).then_some(contents))
}

/// Write to a temp file next to `path`, then rename over it
fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let temp_path = path.with_extension("json.tmp");
    std::fs::write(&temp_path, contents)?;
    std::fs::rename(&temp_path, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{AcceptAll, Insertion, SplitDirection};
    use tempfile::tempdir;

    fn sample_tree() -> DocumentTree {
        let mut tree = DocumentTree::new();
        let left = tree.node_id().to_string();
        let right = tree
            .split(&left, SplitDirection::Vertical, Insertion::After)
            .unwrap();
        let tabs = tree.find_leaf_mut(&right).unwrap().tab_manager_mut();
        tabs.open_file("/home/user/notes.md", true);
        tabs.set_pinned_status("/home/user/notes.md", true);
        tree
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp = tempdir().unwrap();
        let result = load_session_from(&temp.path().join("nonexistent.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_empty_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("empty.json");
        std::fs::write(&path, "  \n").unwrap();
        assert!(load_session_from(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_corrupt_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("corrupt.json");
        std::fs::write(&path, "{ \"savedAt\": ").unwrap();
        assert!(load_session_from(&path).is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("dir").join("session.json");

        let tree = sample_tree();
        let state = SessionState::capture([("main", &tree)]).unwrap();
        save_session_to(&state, &path, true).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());

        let loaded = load_session_from(&path).unwrap().unwrap();
        assert_eq!(loaded, state);
        let restored = loaded.restore_window("main", &AcceptAll).unwrap().unwrap();
        assert_eq!(restored.to_json(), tree.to_json());
    }

    #[test]
    fn test_clear_session() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("session.json");
        let state = SessionState::capture(std::iter::empty()).unwrap();
        save_session_to(&state, &path, false).unwrap();

        clear_session(&path).unwrap();
        assert!(!path.exists());
        // Clearing twice is fine
        clear_session(&path).unwrap();
    }

    #[test]
    fn test_layout_file_roundtrip() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("layout.json");
        let tree = sample_tree();

        save_layout_to(&tree, &path).unwrap();
        let loaded = load_layout_from(&path, &AcceptAll).unwrap();
        assert_eq!(loaded.to_json(), tree.to_json());
    }

    #[test]
    fn test_layout_file_drops_missing_documents() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("layout.json");
        save_layout_to(&sample_tree(), &path).unwrap();

        let loaded = load_layout_from(&path, &|_: &str| false).unwrap();
        assert!(loaded.all_leaves().iter().all(|leaf| leaf.tab_manager().is_empty()));
    }

    #[test]
    fn test_malformed_layout_file_is_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("layout.json");
        std::fs::write(&path, r#"{ "type": "branch", "id": 1 }"#).unwrap();
        assert!(load_layout_from(&path, &AcceptAll).is_err());
    }
}
