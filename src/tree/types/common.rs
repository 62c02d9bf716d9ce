//! Shared identifiers and enums for the document tree.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a leaf or branch, unique within one `DocumentTree`
pub type NodeId = String;

/// Non-owning link from a node to whatever holds it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parent {
    /// The node is the tree's top-level node
    Root,
    /// The node is a child of the branch with this ID
    Branch(NodeId),
}

impl Parent {
    /// ID of the parent branch, `None` for the root
    pub fn branch_id(&self) -> Option<&str> {
        match self {
            Parent::Root => None,
            Parent::Branch(id) => Some(id),
        }
    }
}

/// Axis along which a branch lays out its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitDirection {
    Horizontal,
    Vertical,
}

impl SplitDirection {
    /// Wire name (`"horizontal"` / `"vertical"`)
    pub fn as_str(self) -> &'static str {
        match self {
            SplitDirection::Horizontal => "horizontal",
            SplitDirection::Vertical => "vertical",
        }
    }

    /// Parse a wire name; anything else is `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "horizontal" => Some(SplitDirection::Horizontal),
            "vertical" => Some(SplitDirection::Vertical),
            _ => None,
        }
    }
}

impl fmt::Display for SplitDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown split direction '{s}'"))
    }
}

/// Where new content goes relative to a reference node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Insertion {
    Before,
    #[default]
    After,
}

impl FromStr for Insertion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "before" => Ok(Insertion::Before),
            "after" => Ok(Insertion::After),
            _ => Err(format!("unknown insertion '{s}' (expected before or after)")),
        }
    }
}
