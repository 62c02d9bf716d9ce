//! Services the tree consumes from the host application.

use super::types::NodeId;
use std::path::Path;
use uuid::Uuid;

/// Answers "is this a real, existing file" while a layout is restored
pub trait FileProbe {
    fn is_existing_file(&self, path: &str) -> bool;
}

impl<F> FileProbe for F
where
    F: Fn(&str) -> bool,
{
    fn is_existing_file(&self, path: &str) -> bool {
        self(path)
    }
}

/// Checks the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn is_existing_file(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }
}

/// Treats every path as existing (no filesystem access)
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl FileProbe for AcceptAll {
    fn is_existing_file(&self, _path: &str) -> bool {
        true
    }
}

/// Default ID source: a random UUID v4
pub fn new_unique_id() -> NodeId {
    Uuid::new_v4().to_string()
}
