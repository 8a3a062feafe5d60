//! Serializes a [`SyntaxTree`] into Nushell source text.
//!
//! Output is byte-exact: every sub-expression is wrapped in parentheses so the rendered
//! text never depends on operator precedence.

use crate::ast::SyntaxTree;

pub mod flag;

pub use flag::{LONG_FLAG_PREFIX, recover_flag};

/// Parameter name marking a command's rest (spread) argument.
pub const REST_MARKER: &str = "...rest";
/// Token emitted in place of a rest parameter.
pub const SPREAD_TOKEN: &str = "...";

/// Renders a syntax tree into source text.
pub fn render(tree: &SyntaxTree) -> String {
    let mut fragments = Vec::new();
    render_recursive(tree, &mut fragments);
    fragments.concat()
}

/// Helper to recursively append the fragments of a tree.
fn render_recursive(tree: &SyntaxTree, fragments: &mut Vec<String>) {
    match tree {
        SyntaxTree::Command { name, parameters } => {
            fragments.push(name.clone());
            for (param, value) in parameters {
                render_parameter(param, value.as_ref(), fragments);
            }
        }
        SyntaxTree::Pipe { left, right } => {
            fragments.push("(".to_string());
            render_recursive(left, fragments);
            fragments.push(")|(".to_string());
            render_recursive(right, fragments);
            fragments.push(")".to_string());
        }
        SyntaxTree::Literal { text, .. } => fragments.push(text.clone()),
        SyntaxTree::Operator { op, left, right } => {
            fragments.push("(".to_string());
            render_recursive(left, fragments);
            fragments.push(format!(") {} (", op.as_str()));
            render_recursive(right, fragments);
            fragments.push(")".to_string());
        }
    }
}

fn render_parameter(param: &str, value: Option<&SyntaxTree>, fragments: &mut Vec<String>) {
    if param == REST_MARKER {
        fragments.push(format!(" {}", SPREAD_TOKEN));
        if let Some(value) = value {
            render_wrapped(value, fragments);
        }
    } else if param.starts_with(LONG_FLAG_PREFIX) {
        fragments.push(format!(" {}", recover_flag(param)));
        if let Some(value) = value {
            fragments.push("=".to_string());
            render_wrapped(value, fragments);
        }
    } else if let Some(value) = value {
        fragments.push(" ".to_string());
        render_wrapped(value, fragments);
    }
}

fn render_wrapped(tree: &SyntaxTree, fragments: &mut Vec<String>) {
    fragments.push("(".to_string());
    render_recursive(tree, fragments);
    fragments.push(")".to_string());
}
