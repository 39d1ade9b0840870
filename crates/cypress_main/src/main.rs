//! The cypress driver: tokenize a source file, build the structural tree,
//! run both semantic passes, then print the tree or the failures.

use std::env;
use std::fs;

use cypress_parse::builder::TreeBuilder;
use cypress_parse::lexer::lex_tokens;
use cypress_parse::pretty::Pretty;
use cypress_resolve::resolver::DeclarationChecker;
use cypress_typeck::typecheck::Typechecker;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: cypress <source-file>");
        return;
    }

    let source = match fs::read_to_string(&args[1]) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error reading {}: {}", args[1], err);
            return;
        }
    };

    let tree = TreeBuilder::build(lex_tokens(&source));

    let mut declarations = DeclarationChecker::new();
    let mut types = Typechecker::new();
    let declarations_ok = declarations.check(&tree);
    let types_ok = types.check(&tree);

    for error in declarations.errors() {
        eprintln!("Error: {}", error);
    }
    for error in types.errors() {
        eprintln!("Error: {}", error);
    }

    if declarations_ok && types_ok {
        println!("Abstract Syntax Tree (AST):");
        print!("{}", tree.pretty());
        println!("Semantic analysis successful. Parsing successful");
    } else {
        eprintln!("Semantic analysis failed. AST will not be printed.");
    }
}
