//! Single-pass structural tree builder.
//!
//! Consumes the token stream in order while keeping a cursor to the block
//! currently being filled. Block-open events descend the cursor into a new
//! `Block` node; a `}` ascends it to the parent. Everything else becomes a
//! leaf under the cursor, except `#include` lines which always attach to
//! the root.

use crate::lexer::{LexerIter, Token, TokenKind};
use crate::tree::{Label, NodeId, SyntaxTree};

pub struct TreeBuilder {
    tree: SyntaxTree,
    cursor: NodeId,
}

impl TreeBuilder {
    pub fn new() -> Self {
        let tree = SyntaxTree::new();
        let cursor = tree.root();
        Self { tree, cursor }
    }

    /// Build the whole tree from a token stream in one forward pass.
    pub fn build(mut tokens: LexerIter) -> SyntaxTree {
        let mut builder = TreeBuilder::new();
        while let Some(token) = tokens.next() {
            let next_is_main = tokens.peek().is_some_and(|next| next.text == "main");
            builder.step(&token, next_is_main);
        }
        builder.finish()
    }

    fn step(&mut self, token: &Token, next_is_main: bool) {
        match token.kind {
            // `#include` lines attach to the root no matter how deeply the
            // cursor is nested.
            TokenKind::Include => {
                let root = self.tree.root();
                self.tree.add_child(root, Label::Directive, token.text);
            }

            // Entry-point heuristic: `int` directly followed by `main` opens
            // the function body block. The `main ( )` tokens themselves are
            // not consumed here; they fall through to the leaf rule on later
            // iterations. Together with the `{` rule below, a conventional
            // `int main() {` therefore opens two nested blocks.
            TokenKind::KwInt if next_is_main => self.open_block(),

            TokenKind::LBrace => self.open_block(),
            TokenKind::RBrace => self.close_block(),

            _ => {
                self.tree
                    .add_child(self.cursor, Label::Token(token.category()), token.text);
            }
        }
    }

    fn open_block(&mut self) {
        self.cursor = self.tree.add_child(self.cursor, Label::Block, "");
    }

    /// Ascend to the parent block. An unmatched `}` while already at the
    /// root is ignored rather than reported.
    fn close_block(&mut self) {
        if let Some(parent) = self.tree[self.cursor].parent() {
            self.cursor = parent;
        }
    }

    pub fn finish(self) -> SyntaxTree {
        self.tree
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
