use super::model::{GraphModel, Incoming};
use super::node::{EdgeHandle, LiteralType, NodeId, NodeRole, OperatorToken};
use crate::engine::LiteralValidator;
use crate::error::CompileError;
use crate::ui::{UiEdge, UiNode};
use ahash::AHashMap;

const RESULT_TYPE: &str = "result";
const COMMAND_TYPE: &str = "command";
const DATA_TYPE: &str = "data";
const OPERATOR_TYPE: &str = "operator";

/// Validates raw editor nodes and edges into a [`GraphModel`].
#[derive(Default)]
pub struct GraphBuilder {
    type_mapping: AHashMap<String, String>,
    literal_validator: Option<Box<dyn LiteralValidator>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treats nodes of `user_type` as nodes of one of the canonical types
    /// (`command`, `data`, `operator`, `result`).
    pub fn with_type_mapping(mut self, user_type: &str, canonical_type: &str) -> Self {
        self.type_mapping
            .insert(user_type.to_string(), canonical_type.to_string());
        self
    }

    /// Checks every data node's text with `validator` while building.
    pub fn with_literal_validator(mut self, validator: Box<dyn LiteralValidator>) -> Self {
        self.literal_validator = Some(validator);
        self
    }

    /// The canonical type a declared node type stands for after type mapping.
    pub fn canonical_type<'a>(&'a self, declared: &'a str) -> &'a str {
        self.type_mapping
            .get(declared)
            .map(String::as_str)
            .unwrap_or(declared)
    }

    pub fn build(&self, nodes: &[UiNode], edges: &[UiEdge]) -> Result<GraphModel, CompileError> {
        let mut roles: AHashMap<NodeId, NodeRole> = AHashMap::with_capacity(nodes.len());
        let mut incoming: AHashMap<NodeId, Vec<Incoming>> = AHashMap::with_capacity(nodes.len());
        let mut result_ids: Vec<NodeId> = Vec::new();

        for node in nodes {
            let role = self.classify(node)?;
            if let NodeRole::Data { text, literal_type } = &role {
                self.check_literal(&node.id, text, *literal_type)?;
            }
            if role == NodeRole::Result {
                result_ids.push(node.id.clone());
            }
            if roles.insert(node.id.clone(), role).is_some() {
                return Err(CompileError::MalformedGraphReference {
                    message: format!("node id '{}' is declared more than once", node.id),
                });
            }
            incoming.insert(node.id.clone(), Vec::new());
        }

        let result_id = match result_ids.as_slice() {
            [single] => single.clone(),
            [] => {
                return Err(CompileError::MalformedGraphReference {
                    message: "graph has no result node".to_string(),
                });
            }
            many => {
                return Err(CompileError::MalformedGraphReference {
                    message: format!("graph has {} result nodes, expected 1", many.len()),
                });
            }
        };

        for edge in edges {
            if !roles.contains_key(&edge.source) {
                return Err(Self::dangling(&edge.source, edge));
            }
            let entries = incoming
                .get_mut(&edge.target)
                .ok_or_else(|| Self::dangling(&edge.target, edge))?;
            entries.push(Incoming {
                source: edge.source.clone(),
                handle: edge.target_handle.as_deref().map(EdgeHandle::parse),
            });
        }

        tracing::debug!(
            nodes = roles.len(),
            edges = edges.len(),
            result = %result_id,
            "graph model built"
        );

        Ok(GraphModel {
            roles,
            incoming,
            result_id,
            edge_count: edges.len(),
        })
    }

    /// Determines the role of a single UI node from its id and declared type.
    fn classify(&self, node: &UiNode) -> Result<NodeRole, CompileError> {
        let canonical = self.canonical_type(node.node_type.as_deref().unwrap_or_default());

        if node.id == RESULT_TYPE || canonical == RESULT_TYPE {
            return Ok(NodeRole::Result);
        }

        let unrecognized = |message: String| CompileError::UnrecognizedNodeRole {
            node_id: node.id.clone(),
            message,
        };

        match canonical {
            COMMAND_TYPE => {
                let name = node
                    .data
                    .label
                    .clone()
                    .ok_or_else(|| unrecognized("command node has no label".to_string()))?;
                Ok(NodeRole::Command {
                    name,
                    switches: node.data.switches.clone().unwrap_or_default(),
                })
            }
            DATA_TYPE => {
                let text = node
                    .data
                    .value
                    .clone()
                    .ok_or_else(|| unrecognized("data node has no value".to_string()))?;
                let type_name = node
                    .data
                    .literal_type
                    .as_deref()
                    .ok_or_else(|| unrecognized("data node has no literal type".to_string()))?;
                let literal_type = LiteralType::from_name(type_name)
                    .ok_or_else(|| unrecognized(format!("unknown literal type '{}'", type_name)))?;
                Ok(NodeRole::Data { text, literal_type })
            }
            OPERATOR_TYPE => {
                let token = node
                    .data
                    .operator
                    .as_deref()
                    .or(node.data.label.as_deref())
                    .ok_or_else(|| unrecognized("operator node has no operator".to_string()))?;
                let op = OperatorToken::from_token(token)
                    .ok_or_else(|| unrecognized(format!("unknown operator '{}'", token)))?;
                Ok(NodeRole::Operator { op })
            }
            other => Err(unrecognized(format!("unknown node type '{}'", other))),
        }
    }

    fn check_literal(
        &self,
        node_id: &str,
        text: &str,
        literal_type: LiteralType,
    ) -> Result<(), CompileError> {
        match &self.literal_validator {
            Some(validator) if !validator.is_valid_literal(text, literal_type) => {
                Err(CompileError::InvalidLiteral {
                    node_id: node_id.to_string(),
                    text: text.to_string(),
                    literal_type: literal_type.to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    fn dangling(missing_id: &str, edge: &UiEdge) -> CompileError {
        CompileError::MalformedGraphReference {
            message: format!(
                "edge '{}' -> '{}' references undeclared node '{}'",
                edge.source, edge.target, missing_id
            ),
        }
    }
}
