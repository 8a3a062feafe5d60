use super::display::{TreeNode, write_tree};
use crate::graph::{LiteralType, OperatorToken};
use std::fmt;

/// The tree extracted from a graph, before pipes are made explicit.
///
/// A command's pipe input is kept as a field of the command; the normalizer turns it into a
/// [`SyntaxTree::Pipe`](super::SyntaxTree::Pipe).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputTree {
    Command {
        name: String,
        input: Option<Box<InputTree>>,
        parameters: Vec<(String, InputTree)>,
        switches: Vec<String>,
    },
    Data {
        text: String,
        literal_type: LiteralType,
    },
    Operator {
        op: OperatorToken,
        left: Box<InputTree>,
        right: Box<InputTree>,
    },
}

impl InputTree {
    /// A command with no input, parameters or switches.
    pub fn command(name: impl Into<String>) -> Self {
        InputTree::Command {
            name: name.into(),
            input: None,
            parameters: Vec::new(),
            switches: Vec::new(),
        }
    }

    pub fn data(text: impl Into<String>, literal_type: LiteralType) -> Self {
        InputTree::Data {
            text: text.into(),
            literal_type,
        }
    }

    pub fn operator(op: OperatorToken, left: InputTree, right: InputTree) -> Self {
        InputTree::Operator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Sets the pipe input of a command. Other variants are returned unchanged.
    pub fn with_input(self, upstream: InputTree) -> Self {
        match self {
            InputTree::Command {
                name,
                parameters,
                switches,
                ..
            } => InputTree::Command {
                name,
                input: Some(Box::new(upstream)),
                parameters,
                switches,
            },
            other => other,
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            InputTree::Command {
                input, parameters, ..
            } => {
                1 + input.as_ref().map_or(0, |i| i.size())
                    + parameters.iter().map(|(_, v)| v.size()).sum::<usize>()
            }
            InputTree::Data { .. } => 1,
            InputTree::Operator { left, right, .. } => 1 + left.size() + right.size(),
        }
    }
}

impl TreeNode for InputTree {
    fn label(&self) -> String {
        match self {
            InputTree::Command { name, switches, .. } if switches.is_empty() => {
                format!("Command: {}", name)
            }
            InputTree::Command { name, switches, .. } => {
                format!("Command: {} [{}]", name, switches.join(", "))
            }
            InputTree::Data { text, literal_type } => format!("Data ({}): {}", literal_type, text),
            InputTree::Operator { op, .. } => format!("Operator ({}): {}", op.group(), op),
        }
    }

    fn children(&self) -> Vec<(Option<String>, &Self)> {
        match self {
            InputTree::Command {
                input, parameters, ..
            } => input
                .iter()
                .map(|i| (Some("input".to_string()), i.as_ref()))
                .chain(parameters.iter().map(|(name, v)| (Some(name.clone()), v)))
                .collect(),
            InputTree::Data { .. } => Vec::new(),
            InputTree::Operator { left, right, .. } => {
                vec![(None, left.as_ref()), (None, right.as_ref())]
            }
        }
    }
}

impl fmt::Display for InputTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(self, f)
    }
}
