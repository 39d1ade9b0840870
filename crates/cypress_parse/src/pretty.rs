//! Branch-connector rendering of the syntax tree.

use crate::tree::{NodeId, SyntaxTree};

/// Trait for pretty-printing tree structures for terminal output.
pub trait Pretty {
    fn pretty(&self) -> String;
}

impl Pretty for SyntaxTree {
    /// Render the tree as an indented diagram, one `label: value` line per
    /// node, with `├──`/`└──` connectors and `│` rails showing nesting.
    /// The root is drawn as a last sibling.
    fn pretty(&self) -> String {
        let mut out = String::new();
        render(self, self.root(), "", true, &mut out);
        out
    }
}

fn render(tree: &SyntaxTree, id: NodeId, prefix: &str, is_last: bool, out: &mut String) {
    let node = &tree[id];
    let connector = if is_last { "└── " } else { "├── " };
    out.push_str(prefix);
    out.push_str(connector);
    out.push_str(&format!("{}: {}\n", node.label, node.value));

    let rail = if is_last { "    " } else { "│   " };
    let child_prefix = format!("{}{}", prefix, rail);

    let children = node.children();
    for (i, &child) in children.iter().enumerate() {
        render(tree, child, &child_prefix, i + 1 == children.len(), out);
    }
}
