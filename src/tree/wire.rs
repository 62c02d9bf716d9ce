//! Persisted JSON shape of a window layout.
//!
//! ```text
//! leaf   := { type: "leaf",   id, openFiles: [OpenDocument], activeFile: OpenDocument|null }
//! branch := { type: "branch", id, direction: "horizontal"|"vertical", sizes: [number], nodes: [leaf|branch] }
//! ```
//!
//! A layout is one node with no envelope around it. [`validate_node`] checks
//! the structural fields before serde sees the value, so malformed input maps
//! to a specific [`LayoutError`]; soft anomalies (a missing leaf id, unusable
//! sizes) deserialize to empty values and are repaired when the tree is built.

use super::error::LayoutError;
use super::types::SplitDirection;
use crate::tab::OpenDocument;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One node of a saved layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeData {
    Leaf(LeafNodeData),
    Branch(BranchNodeData),
}

impl NodeData {
    pub fn id(&self) -> &str {
        match self {
            NodeData::Leaf(leaf) => &leaf.id,
            NodeData::Branch(branch) => &branch.id,
        }
    }

    /// A leaf with no tabs and no id (one is assigned on insertion)
    pub fn empty_leaf() -> Self {
        NodeData::Leaf(LeafNodeData::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafNodeData {
    /// Empty when the saved id was missing or not a string
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub open_files: Vec<OpenDocument>,
    #[serde(default)]
    pub active_file: Option<OpenDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNodeData {
    pub id: String,
    pub direction: SplitDirection,
    /// Empty when the saved sizes were missing or not all numbers
    #[serde(default, deserialize_with = "lenient_sizes")]
    pub sizes: Vec<f64>,
    pub nodes: Vec<NodeData>,
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(id) => id,
        _ => String::new(),
    })
}

fn lenient_sizes<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .iter()
        .map(Value::as_f64)
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default())
}

/// Check the structural fields of a node and, for branches, of every descendant
pub fn validate_node(value: &Value) -> Result<(), LayoutError> {
    let object = match value {
        Value::Object(object) => object,
        Value::Array(_) => return Err(LayoutError::UnexpectedArray),
        other => return Err(LayoutError::NotAnObject(json_kind(other))),
    };

    match object.get("type") {
        None | Some(Value::Null) => Err(LayoutError::MissingType),
        Some(Value::String(kind)) if kind == "leaf" => Ok(()),
        Some(Value::String(kind)) if kind == "branch" => validate_branch(object),
        Some(Value::String(kind)) => Err(LayoutError::UnknownType(kind.clone())),
        Some(other) => Err(LayoutError::UnknownType(other.to_string())),
    }
}

fn validate_branch(object: &Map<String, Value>) -> Result<(), LayoutError> {
    match object.get("direction") {
        Some(Value::String(direction)) if SplitDirection::parse(direction).is_some() => {}
        Some(Value::String(direction)) => {
            return Err(LayoutError::InvalidDirection(direction.clone()));
        }
        Some(other) => return Err(LayoutError::InvalidDirection(other.to_string())),
        None => return Err(LayoutError::InvalidDirection("(missing)".to_string())),
    }

    if !matches!(object.get("id"), Some(Value::String(_))) {
        return Err(LayoutError::InvalidBranchId);
    }

    let Some(Value::Array(nodes)) = object.get("nodes") else {
        return Err(LayoutError::InvalidNodes);
    };
    nodes.iter().try_for_each(validate_node)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
