use cypress_parse::tree::{Label, NodeId, SyntaxTree};

use crate::type_error::TypeError;

fn is_arithmetic(op: &str) -> bool {
    matches!(op, "+" | "-" | "*" | "/")
}

/// An operand is numeric when its own value text is literally a numeric
/// type name. Nothing is inferred from declarations elsewhere in the tree.
fn is_numeric(tree: &SyntaxTree, id: NodeId) -> bool {
    matches!(tree[id].value.as_str(), "int" | "float")
}

/// Arithmetic operand compatibility pass.
///
/// Only nodes labeled `Expression` are inspected. A well-formed expression
/// node has exactly three children: left operand, operator, right operand.
/// For the four arithmetic operators both operand values must name a
/// numeric type; every other operator goes unchecked.
#[derive(Debug, Clone)]
pub struct Typechecker {
    errors: Vec<TypeError>,
}

impl Typechecker {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Run the pass over the whole tree. Returns true when no violation was
    /// found; every violation is collected, traversal never stops early.
    pub fn check(&mut self, tree: &SyntaxTree) -> bool {
        self.check_node(tree, tree.root())
    }

    pub fn errors(&self) -> &[TypeError] {
        &self.errors
    }

    fn check_node(&mut self, tree: &SyntaxTree, id: NodeId) -> bool {
        let mut ok = true;

        for &child in tree[id].children() {
            if tree[child].label == Label::Expression {
                ok &= self.check_expression(tree, child);
            }
            ok &= self.check_node(tree, child);
        }

        ok
    }

    fn check_expression(&mut self, tree: &SyntaxTree, id: NodeId) -> bool {
        let children = tree[id].children();
        let &[left, op, right] = children else {
            self.errors.push(TypeError::MalformedExpression {
                found: children.len(),
            });
            return false;
        };

        if is_arithmetic(&tree[op].value) && !(is_numeric(tree, left) && is_numeric(tree, right)) {
            self.errors.push(TypeError::ArithmeticMismatch {
                left: tree[left].value.clone(),
                op: tree[op].value.clone(),
                right: tree[right].value.clone(),
            });
            return false;
        }

        true
    }
}

impl Default for Typechecker {
    fn default() -> Self {
        Self::new()
    }
}
