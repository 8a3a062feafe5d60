use crate::ast::{InputTree, SyntaxTree};

/// Rewrites an [`InputTree`] into a render-ready [`SyntaxTree`].
///
/// A command's pipe input becomes an explicit `Pipe` whose right side is the command
/// itself. Parameters keep their order and are followed by the switches, which carry no
/// value.
pub fn normalize(tree: InputTree) -> SyntaxTree {
    match tree {
        InputTree::Command {
            name,
            input,
            parameters,
            switches,
        } => {
            let parameters = parameters
                .into_iter()
                .map(|(param, value)| (param, Some(normalize(value))))
                .chain(switches.into_iter().map(|switch| (switch, None)))
                .collect();
            let command = SyntaxTree::Command { name, parameters };

            match input {
                Some(upstream) => SyntaxTree::pipe(normalize(*upstream), command),
                None => command,
            }
        }
        InputTree::Data { text, literal_type } => SyntaxTree::Literal { literal_type, text },
        InputTree::Operator { op, left, right } => {
            SyntaxTree::operator(op, normalize(*left), normalize(*right))
        }
    }
}
