use crate::lexer::{Category, TokenKind, lex_tokens};

fn classified(src: &str) -> Vec<(Category, String)> {
    lex_tokens(src)
        .map(|t| (t.category(), t.text.to_string()))
        .collect()
}

fn categories(src: &str) -> Vec<Category> {
    lex_tokens(src).map(|t| t.category()).collect()
}

#[test]
fn tokenizes_a_small_program() {
    use Category::*;

    let tokens = classified("int main() { int x = 5; return x; }");
    let expected: Vec<(Category, String)> = [
        (Keyword, "int"),
        (Identifier, "main"),
        (Punctuation, "("),
        (Punctuation, ")"),
        (Punctuation, "{"),
        (Keyword, "int"),
        (Identifier, "x"),
        (Operator, "="),
        (Constant, "5"),
        (Punctuation, ";"),
        (Keyword, "return"),
        (Identifier, "x"),
        (Punctuation, ";"),
        (Punctuation, "}"),
    ]
    .into_iter()
    .map(|(c, s)| (c, s.to_string()))
    .collect();

    assert_eq!(tokens, expected);
}

#[test]
fn keywords_always_beat_the_identifier_rule() {
    assert_eq!(categories("if"), vec![Category::Keyword]);
    assert_eq!(categories("while"), vec![Category::Keyword]);

    // A keyword prefix inside a longer word is still an identifier.
    assert_eq!(classified("iffy"), vec![(Category::Identifier, "iffy".to_string())]);
    assert_eq!(classified("intx"), vec![(Category::Identifier, "intx".to_string())]);
}

#[test]
fn include_directive_is_one_token() {
    let tokens = classified("#include <stdio.h>\nint x;");
    assert_eq!(tokens[0], (Category::Directive, "#include <stdio.h>".to_string()));
    assert_eq!(tokens[1], (Category::Keyword, "int".to_string()));
    assert_eq!(tokens.len(), 4);
}

#[test]
fn malformed_directives_fall_apart() {
    // `# define X` has no rule; the `#` is dropped and the rest lexes on
    // its own.
    let tokens = classified("# define X");
    assert_eq!(
        tokens,
        vec![
            (Category::Identifier, "define".to_string()),
            (Category::Identifier, "X".to_string()),
        ]
    );
}

#[test]
fn stray_symbols_are_dropped_silently() {
    let tokens = classified("x @ $ y");
    assert_eq!(
        tokens,
        vec![
            (Category::Identifier, "x".to_string()),
            (Category::Identifier, "y".to_string()),
        ]
    );

    // A lone `|` or `&` is not an operator.
    assert_eq!(categories("a | b"), vec![Category::Identifier; 2]);
}

#[test]
fn word_rules_only_match_whole_words() {
    // `5x` satisfies neither the constant rule nor the identifier rule, so
    // the whole word is dropped.
    assert!(classified("5x").is_empty());
    assert!(classified("12abc34").is_empty());

    // Identifiers may contain trailing digits.
    assert_eq!(classified("x5"), vec![(Category::Identifier, "x5".to_string())]);
}

#[test]
fn multi_character_operators_match_greedily() {
    let tokens = classified("a == b <= c && d");
    assert_eq!(
        tokens,
        vec![
            (Category::Identifier, "a".to_string()),
            (Category::Operator, "==".to_string()),
            (Category::Identifier, "b".to_string()),
            (Category::Operator, "<=".to_string()),
            (Category::Identifier, "c".to_string()),
            (Category::Operator, "&&".to_string()),
            (Category::Identifier, "d".to_string()),
        ]
    );

    // With a space in between, `= =` is two assignment operators.
    assert_eq!(
        classified("= ="),
        vec![
            (Category::Operator, "=".to_string()),
            (Category::Operator, "=".to_string()),
        ]
    );
}

#[test]
fn comment_markers_are_not_special() {
    // There is no comment rule: `//` is two division operators and the
    // comment body lexes as ordinary tokens.
    let tokens = classified("// note");
    assert_eq!(
        tokens,
        vec![
            (Category::Operator, "/".to_string()),
            (Category::Operator, "/".to_string()),
            (Category::Identifier, "note".to_string()),
        ]
    );
}

#[test]
fn lexemes_are_an_ordered_subsequence_of_the_source() {
    let src = "#include <stdio.h>\nint main() { int x = 5; return x + 1; }";

    let mut rest = src;
    for token in lex_tokens(src) {
        let at = rest.find(token.text).expect("lexeme missing from remaining source");
        rest = &rest[at + token.text.len()..];
    }
}

#[test]
fn retokenizing_joined_lexemes_is_idempotent() {
    let src = "#include <stdio.h>\nint main() { int x = 5; return x; }";

    let lexemes: Vec<&str> = lex_tokens(src).map(|t| t.text).collect();
    let rejoined = lexemes.join(" ");

    assert_eq!(categories(src), categories(&rejoined));
    let relexed: Vec<String> = lex_tokens(&rejoined).map(|t| t.text.to_string()).collect();
    assert_eq!(lexemes, relexed);
}

#[test]
fn tracks_line_numbers() {
    let tokens: Vec<_> = lex_tokens("int\nx = 1;").collect();
    assert_eq!(tokens[0].location.line, 1);
    assert_eq!(tokens[1].location.line, 2);
    assert_eq!(tokens[1].kind, TokenKind::Name);
}

#[test]
fn kind_maps_to_its_category() {
    assert_eq!(TokenKind::Include.category(), Category::Directive);
    assert_eq!(TokenKind::KwReturn.category(), Category::Keyword);
    assert_eq!(TokenKind::Name.category(), Category::Identifier);
    assert_eq!(TokenKind::IntLit.category(), Category::Constant);
    assert_eq!(TokenKind::OrOr.category(), Category::Operator);
    assert_eq!(TokenKind::LBrace.category(), Category::Punctuation);
}
