use std::collections::HashSet;

use cypress_parse::tree::{Label, NodeId, SyntaxTree};

use crate::semantic_error::SemanticError;

/// Walks the tree and reports identifiers used before any declaration among
/// their siblings.
///
/// Scoping is shallow: every node starts with an empty declaration set for
/// its own direct children, and nothing is inherited from enclosing nodes.
/// A variable declared in an outer block is invisible to the checks run on
/// an inner block's child list; only sibling order matters.
#[derive(Debug, Clone)]
pub struct DeclarationChecker {
    errors: Vec<SemanticError>,
}

impl DeclarationChecker {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Run the pass over the whole tree. Returns true when no violation was
    /// found; every violation is collected, traversal never stops early.
    pub fn check(&mut self, tree: &SyntaxTree) -> bool {
        self.check_node(tree, tree.root())
    }

    pub fn errors(&self) -> &[SemanticError] {
        &self.errors
    }

    fn check_node(&mut self, tree: &SyntaxTree, id: NodeId) -> bool {
        // Declarations are tracked for this node's direct children only.
        let mut declared: HashSet<&str> = HashSet::new();
        let mut ok = true;

        for &child in tree[id].children() {
            let node = &tree[child];
            match node.label {
                Label::Declaration => {
                    // A declaration contributes its first child's value. A
                    // childless declaration contributes nothing.
                    if let Some(&name) = node.children().first() {
                        declared.insert(tree[name].value.as_str());
                    }
                }
                Label::Identifier => {
                    if !declared.contains(node.value.as_str()) {
                        self.errors
                            .push(SemanticError::UsedBeforeDeclaration(node.value.clone()));
                        ok = false;
                    }
                }
                _ => {}
            }

            // Each child is checked with its own fresh declaration set.
            ok &= self.check_node(tree, child);
        }

        ok
    }
}

impl Default for DeclarationChecker {
    fn default() -> Self {
        Self::new()
    }
}
