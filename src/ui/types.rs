use serde::Deserialize;

/// Payload of a UI node. Which fields are meaningful depends on the node type.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct UiNodeData {
    /// Command name for command nodes, display text for everything else.
    pub label: Option<String>,
    /// Raw literal text of a data node.
    pub value: Option<String>,
    #[serde(default, alias = "literalType")]
    pub literal_type: Option<String>,
    /// Operator token of an operator node, e.g. `"+"` or `"starts-with"`.
    pub operator: Option<String>,
    /// Switch declarations of a command node, e.g. `"--help(-h)"`.
    #[serde(default)]
    pub switches: Option<Vec<String>>,
}

/// UI node with ID, declared type and payload
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiNode {
    pub id: String,
    #[serde(default, rename = "type")]
    pub node_type: Option<String>,
    #[serde(default)]
    pub data: UiNodeData,
}

/// UI edge connecting nodes
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiEdge {
    pub source: String,
    pub target: String,
    #[serde(default, alias = "targetHandle")]
    pub target_handle: Option<String>,
}

/// Complete UI graph structure, as exported by the node editor
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct UiGraph {
    pub nodes: Vec<UiNode>,
    pub edges: Vec<UiEdge>,
}

impl UiGraph {
    /// Parses the editor's JSON export.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
