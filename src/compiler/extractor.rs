use crate::ast::InputTree;
use crate::error::CompileError;
use crate::graph::{EdgeHandle, GraphModel, Incoming, NodeRole, Operand};
use itertools::{Either, Itertools};

/// What to do when a command has more than one pipe predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipeInputPolicy {
    /// Follow the first declared pipe edge and ignore the rest.
    #[default]
    FirstWins,
    /// Reject the graph with [`CompileError::AmbiguousPipeInput`].
    Strict,
}

/// Builds the [`InputTree`] rooted at the single producer of the result node.
///
/// The traversal walks edges backwards, from consumer to producer. The graph is expected
/// to be acyclic.
pub(super) struct TreeExtractor<'a> {
    graph: &'a GraphModel,
    pipe_policy: PipeInputPolicy,
}

impl<'a> TreeExtractor<'a> {
    pub(super) fn new(graph: &'a GraphModel, pipe_policy: PipeInputPolicy) -> Self {
        Self { graph, pipe_policy }
    }

    pub(super) fn extract(&self) -> Result<InputTree, CompileError> {
        let result_id = self.graph.result_id();
        match self.graph.incoming(result_id) {
            [] => Err(CompileError::MissingResultProducer),
            [root] => self.resolve(&root.source, result_id),
            many => Err(CompileError::AmbiguousResultProducer { count: many.len() }),
        }
    }

    /// Recursively builds the tree for a single node, seen as an input of `consumer_id`.
    fn resolve(&self, node_id: &str, consumer_id: &str) -> Result<InputTree, CompileError> {
        let role = self
            .graph
            .role(node_id)
            .ok_or_else(|| CompileError::MalformedGraphReference {
                message: format!(
                    "node '{}' required by '{}' is not in the graph",
                    node_id, consumer_id
                ),
            })?;
        tracing::trace!(node = node_id, role = role.kind_name(), "resolving node");

        match role {
            NodeRole::Result => Err(CompileError::NonTerminalResultEncountered {
                consumer_id: consumer_id.to_string(),
            }),
            NodeRole::Data { text, literal_type } => Ok(InputTree::Data {
                text: text.clone(),
                literal_type: *literal_type,
            }),
            NodeRole::Command { name, switches } => {
                self.resolve_command(node_id, name, switches)
            }
            NodeRole::Operator { op } => {
                let (left_id, right_id) = self.operand_sources(node_id)?;
                Ok(InputTree::operator(
                    *op,
                    self.resolve(left_id, node_id)?,
                    self.resolve(right_id, node_id)?,
                ))
            }
        }
    }

    fn resolve_command(
        &self,
        node_id: &str,
        name: &str,
        switches: &[String],
    ) -> Result<InputTree, CompileError> {
        // Unnamed edges (and stray operand tags) feed the pipe; named ones are parameters.
        let (pipe_sources, parameter_sources): (Vec<&str>, Vec<(&str, &str)>) = self
            .graph
            .incoming(node_id)
            .iter()
            .partition_map(|edge| match &edge.handle {
                Some(EdgeHandle::Named(param)) => {
                    Either::Right((param.as_str(), edge.source.as_str()))
                }
                _ => Either::Left(edge.source.as_str()),
            });

        if pipe_sources.len() > 1 {
            match self.pipe_policy {
                PipeInputPolicy::FirstWins => tracing::warn!(
                    node = node_id,
                    command = name,
                    ignored = pipe_sources.len() - 1,
                    "command has several pipe inputs, only the first is used"
                ),
                PipeInputPolicy::Strict => {
                    return Err(CompileError::AmbiguousPipeInput {
                        node_id: node_id.to_string(),
                        count: pipe_sources.len(),
                    });
                }
            }
        }

        let input = pipe_sources
            .first()
            .map(|source| self.resolve(source, node_id).map(Box::new))
            .transpose()?;

        let parameters = parameter_sources
            .into_iter()
            .map(|(param, source)| Ok((param.to_string(), self.resolve(source, node_id)?)))
            .collect::<Result<Vec<_>, CompileError>>()?;

        Ok(InputTree::Command {
            name: name.to_string(),
            input,
            parameters,
            switches: switches.to_vec(),
        })
    }

    /// Finds the producers of an operator's left and right operands from their handles.
    fn operand_sources(&self, node_id: &str) -> Result<(&'a str, &'a str), CompileError> {
        let edges: &'a [Incoming] = self.graph.incoming(node_id);
        if edges.len() != 2 {
            return Err(CompileError::OperatorArityViolation {
                node_id: node_id.to_string(),
                count: edges.len(),
            });
        }

        let handle_error = |message: String| CompileError::OperatorHandleViolation {
            node_id: node_id.to_string(),
            message,
        };

        let mut left: Option<&'a str> = None;
        let mut right: Option<&'a str> = None;
        for edge in edges {
            let slot = match &edge.handle {
                Some(EdgeHandle::Operand(Operand::Left)) => &mut left,
                Some(EdgeHandle::Operand(Operand::Right)) => &mut right,
                Some(EdgeHandle::Named(tag)) => {
                    return Err(handle_error(format!(
                        "edge from '{}' has handle '{}', expected 'A' or 'B'",
                        edge.source, tag
                    )));
                }
                None => {
                    return Err(handle_error(format!(
                        "edge from '{}' has no handle, expected 'A' or 'B'",
                        edge.source
                    )));
                }
            };
            if slot.replace(edge.source.as_str()).is_some() {
                return Err(handle_error(format!(
                    "handle '{}' is connected more than once",
                    edge.handle.as_ref().map(|h| h.to_string()).unwrap_or_default()
                )));
            }
        }

        match (left, right) {
            (Some(l), Some(r)) => Ok((l, r)),
            _ => Err(handle_error("both 'A' and 'B' must be connected".to_string())),
        }
    }
}
