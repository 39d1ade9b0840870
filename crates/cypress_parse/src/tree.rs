use std::fmt;
use std::ops::Index;

use crate::lexer::Category;

/// Handle to a node stored in a [`SyntaxTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// The syntactic role of a tree node.
///
/// `Token(_)` labels are the raw-category labels given to leaves by the
/// structural builder. They are distinct values from the structural
/// `Declaration` / `Identifier` / `Expression` labels even when they
/// display the same, so the semantic passes never confuse a plain
/// identifier leaf with an `Identifier` role node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Program,
    Block,
    Directive,
    Declaration,
    Identifier,
    Expression,
    /// A leaf holding a raw token, labeled by its lexical category.
    Token(Category),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Label::Program => write!(f, "Program"),
            Label::Block => write!(f, "Block"),
            Label::Directive => write!(f, "Preprocessor Directive"),
            Label::Declaration => write!(f, "Declaration"),
            Label::Identifier => write!(f, "Identifier"),
            Label::Expression => write!(f, "Expression"),
            Label::Token(category) => write!(f, "{}", category),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub label: Label,
    pub value: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// An arena-allocated tree of labeled nodes.
///
/// Nodes are owned by the arena and addressed by [`NodeId`]; every node
/// except the root records its unique parent, and children are kept in
/// insertion order. The root is always a `Program` node at index 0.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
}

impl SyntaxTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                label: Label::Program,
                value: String::new(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a new node under `parent` and return its handle.
    pub fn add_child(&mut self, parent: NodeId, label: Label, value: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            label,
            value: value.into(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Iterate over every node handle in creation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }
}

impl Default for SyntaxTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<NodeId> for SyntaxTree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}
