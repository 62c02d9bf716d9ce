//! Linear navigation history for one tab manager.

/// Ordered list of visited paths plus a pointer to the current entry.
///
/// A path appears at most once: recording a path that is already present
/// moves it to the end. `pointer` is `None` while the history is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionHistory {
    entries: Vec<String>,
    pointer: Option<usize>,
}

impl SessionHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Visited paths, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Index of the current entry
    pub fn pointer(&self) -> Option<usize> {
        self.pointer
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append `path`, dropping any earlier occurrence, and point at it
    pub fn record(&mut self, path: &str) {
        self.entries.retain(|entry| entry != path);
        self.entries.push(path.to_string());
        self.pointer = Some(self.entries.len() - 1);
    }

    /// Move the pointer one entry back and return the path there.
    ///
    /// Returns `None` (pointer untouched after clamping) when already at the
    /// oldest entry.
    pub(crate) fn step_back(&mut self) -> Option<&str> {
        self.clamp_pointer();
        let target = self.pointer?.checked_sub(1)?;
        self.pointer = Some(target);
        self.entries.get(target).map(String::as_str)
    }

    /// Move the pointer one entry forward and return the path there.
    pub(crate) fn step_forward(&mut self) -> Option<&str> {
        self.clamp_pointer();
        let target = self.pointer? + 1;
        if target >= self.entries.len() {
            return None;
        }
        self.pointer = Some(target);
        self.entries.get(target).map(String::as_str)
    }

    /// An out-of-range pointer snaps to the newest entry
    fn clamp_pointer(&mut self) {
        if self.pointer.is_none_or(|idx| idx >= self.entries.len()) {
            self.pointer = self.entries.len().checked_sub(1);
        }
    }
}
