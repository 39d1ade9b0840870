use crate::builder::TreeBuilder;
use crate::lexer::{Category, lex_tokens};
use crate::pretty::Pretty;
use crate::tree::{Label, SyntaxTree};

#[test]
fn renders_connectors_and_rails() {
    let mut tree = SyntaxTree::new();
    let root = tree.root();
    tree.add_child(root, Label::Directive, "#include <stdio.h>");
    let block = tree.add_child(root, Label::Block, "");
    tree.add_child(block, Label::Token(Category::Keyword), "int");

    let expected = concat!(
        "└── Program: \n",
        "    ├── Preprocessor Directive: #include <stdio.h>\n",
        "    └── Block: \n",
        "        └── Keyword: int\n",
    );
    assert_eq!(tree.pretty(), expected);
}

#[test]
fn renders_a_built_tree() {
    let tree = TreeBuilder::build(lex_tokens("int main() { }"));

    let expected = concat!(
        "└── Program: \n",
        "    └── Block: \n",
        "        ├── Identifier: main\n",
        "        ├── Punctuation: (\n",
        "        ├── Punctuation: )\n",
        "        └── Block: \n",
    );
    assert_eq!(tree.pretty(), expected);
}
