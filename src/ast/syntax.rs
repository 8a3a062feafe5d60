use super::display::{TreeNode, write_tree};
use crate::graph::{LiteralType, OperatorToken};
use std::fmt;

/// Render-ready tree. Every variant maps onto one rendering rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxTree {
    Command {
        name: String,
        parameters: Vec<(String, Option<SyntaxTree>)>,
    },
    Pipe {
        left: Box<SyntaxTree>,
        right: Box<SyntaxTree>,
    },
    Literal {
        literal_type: LiteralType,
        text: String,
    },
    Operator {
        op: OperatorToken,
        left: Box<SyntaxTree>,
        right: Box<SyntaxTree>,
    },
}

impl SyntaxTree {
    /// A command without parameters.
    pub fn command(name: impl Into<String>) -> Self {
        SyntaxTree::Command {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    pub fn pipe(left: SyntaxTree, right: SyntaxTree) -> Self {
        SyntaxTree::Pipe {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn literal(literal_type: LiteralType, text: impl Into<String>) -> Self {
        SyntaxTree::Literal {
            literal_type,
            text: text.into(),
        }
    }

    pub fn operator(op: OperatorToken, left: SyntaxTree, right: SyntaxTree) -> Self {
        SyntaxTree::Operator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl TreeNode for SyntaxTree {
    fn label(&self) -> String {
        match self {
            SyntaxTree::Command { name, .. } => format!("Command: {}", name),
            SyntaxTree::Pipe { .. } => "Pipe".to_string(),
            SyntaxTree::Literal { literal_type, text } => {
                format!("Literal ({}): {}", literal_type, text)
            }
            SyntaxTree::Operator { op, .. } => format!("Operator ({}): {}", op.group(), op),
        }
    }

    fn children(&self) -> Vec<(Option<String>, &Self)> {
        match self {
            SyntaxTree::Command { parameters, .. } => parameters
                .iter()
                .filter_map(|(name, value)| value.as_ref().map(|v| (Some(name.clone()), v)))
                .collect(),
            SyntaxTree::Literal { .. } => Vec::new(),
            SyntaxTree::Pipe { left, right } | SyntaxTree::Operator { left, right, .. } => {
                vec![(None, left.as_ref()), (None, right.as_ref())]
            }
        }
    }
}

impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(self, f)
    }
}
