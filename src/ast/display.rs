use std::fmt;

/// A tree that can be printed with box-drawing guides.
pub(crate) trait TreeNode {
    fn label(&self) -> String;
    /// Children in print order, each with an optional edge label.
    fn children(&self) -> Vec<(Option<String>, &Self)>;
}

pub(crate) fn write_tree<T: TreeNode>(root: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", root.label())?;
    write_children(root, f, "")
}

fn write_children<T: TreeNode>(node: &T, f: &mut fmt::Formatter<'_>, prefix: &str) -> fmt::Result {
    let children = node.children();
    let last_index = children.len().saturating_sub(1);
    for (index, (edge, child)) in children.into_iter().enumerate() {
        let is_last = index == last_index;
        let node_marker = if is_last { "└── " } else { "├── " };
        match edge {
            Some(edge) => writeln!(f, "{}{}{} = {}", prefix, node_marker, edge, child.label())?,
            None => writeln!(f, "{}{}{}", prefix, node_marker, child.label())?,
        }
        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        write_children(child, f, &child_prefix)?;
    }
    Ok(())
}
