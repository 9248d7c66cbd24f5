use crate::options::Layout;
use serde::{Deserialize, Serialize};

/// A single operation exposed by an endpoint.
///
/// The layout engine never looks inside operations; they are carried from the
/// input record to the output node unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// HTTP-like method, e.g. `get` or `post`.
    pub method: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One API endpoint as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointRecord {
    /// Opaque identifier. Absent only for display-only records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `/`-delimited path template, possibly with `{param}` segments.
    pub path: String,
    /// Display name overriding any path-derived label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl EndpointRecord {
    /// Creates a record with only a path set.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            id: None,
            path: path.into(),
            name: None,
            operations: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }
}

/// A positioned entry of the navigation tree.
///
/// Nodes are emitted in display order; the rendering layer walks the list and
/// uses [`indent`](TreeNode::indent) for nesting, so no parent pointers are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub operations: Vec<Operation>,
    /// Nesting depth, `0` for roots.
    pub indent: usize,
    /// Text shown in the navigation list. Never empty.
    pub label: String,
    /// Whether a later node's path starts with this node's path.
    pub has_children: bool,
    /// Whether [`label`](TreeNode::label) was produced by trimming an ancestor prefix.
    pub has_short_path: bool,
    /// Whether this node was synthesized to group children under a shared prefix.
    #[serde(default)]
    pub is_virtual: bool,
}

impl TreeNode {
    pub(crate) fn from_record(record: &EndpointRecord) -> Self {
        Self {
            id: record.id.clone(),
            path: record.path.clone(),
            name: record.name.clone(),
            operations: record.operations.clone(),
            indent: 0,
            label: String::new(),
            has_children: false,
            has_short_path: false,
            is_virtual: false,
        }
    }

    /// Group node for a path prefix with no endpoint of its own.
    pub(crate) fn virtual_group(path: String, indent: usize) -> Self {
        Self {
            id: None,
            label: crate::label::compute_label(&path, None, None).text,
            path,
            name: None,
            operations: Vec::new(),
            indent,
            has_children: true,
            has_short_path: false,
            is_virtual: true,
        }
    }
}

/// The outcome of laying out one endpoint list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Strategy that produced [`nodes`](LayoutResult::nodes).
    pub strategy: Layout,
    pub nodes: Vec<TreeNode>,
}
