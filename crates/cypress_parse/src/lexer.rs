use std::fmt;
use std::iter::Peekable;

use logos::{Filter, Logos, SpannedIter};

#[derive(Debug, Clone, PartialEq)]
pub struct SourceLoc {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

/// The six lexical categories a token can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Directive,
    Keyword,
    Identifier,
    Constant,
    Operator,
    Punctuation,
}

fn is_word_byte(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

fn starts_on_boundary(lex: &logos::Lexer<TokenKind>) -> bool {
    let start = lex.span().start;
    start == 0 || !is_word_byte(lex.source().as_bytes()[start - 1])
}

fn ends_on_boundary(lex: &logos::Lexer<TokenKind>) -> bool {
    match lex.remainder().as_bytes().first() {
        Some(&b) => !is_word_byte(b),
        None => true,
    }
}

/// Word-shaped rules only match whole words: a keyword or constant embedded
/// in a longer word (`5x`, `9int`) is not a token at all, and the characters
/// it covered are dropped like any other unmatched span.
fn whole_word(lex: &mut logos::Lexer<TokenKind>) -> Filter<()> {
    if starts_on_boundary(lex) && ends_on_boundary(lex) {
        Filter::Emit(())
    } else {
        Filter::Skip
    }
}

/// Identifiers are maximal runs of word characters, so only the leading
/// boundary needs checking.
fn starts_word(lex: &mut logos::Lexer<TokenKind>) -> Filter<()> {
    if starts_on_boundary(lex) {
        Filter::Emit(())
    } else {
        Filter::Skip
    }
}

/// Token rules in disambiguation order: the include directive, then
/// keywords, identifiers, constants, operators and punctuation. Keywords
/// beat the identifier rule on equal-length matches via token priority;
/// multi-character operators win by longest match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Logos)]
pub enum TokenKind {
    /// An `#include <header.h>` line, matched as a single unit. Any other
    /// `#`-introduced text is not recognized and gets skipped.
    #[regex(r"#include <[a-zA-Z0-9_]+\.h>")]
    Include,

    // Keywords
    #[token("int", whole_word)]
    KwInt,
    #[token("float", whole_word)]
    KwFloat,
    #[token("char", whole_word)]
    KwChar,
    #[token("if", whole_word)]
    KwIf,
    #[token("else", whole_word)]
    KwElse,
    #[token("while", whole_word)]
    KwWhile,
    #[token("for", whole_word)]
    KwFor,
    #[token("return", whole_word)]
    KwReturn,

    // Literals
    #[regex(r"[_a-zA-Z][_0-9a-zA-Z]*", starts_word)]
    Name,
    #[regex(r"[0-9]+", whole_word)]
    IntLit,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Eq,
    #[token("==")]
    DoubleEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEq,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEq,
    #[token("||")]
    OrOr,
    #[token("&&")]
    AndAnd,

    // Punctuation
    #[token(";")]
    Semi,
    #[token(",")]
    Comma,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LSquare,
    #[token("]")]
    RSquare,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Whitespace never becomes a token
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Whitespace,
}

impl TokenKind {
    /// Classify this token into one of the six lexical categories.
    ///
    /// Classification is total by construction: a token only exists because
    /// one of the rules above matched it, so there is no "unrecognized"
    /// fallthrough arm here. The skip-only `Whitespace` variant is never
    /// constructed by the lexer, which makes its arm a hard assertion.
    pub fn category(self) -> Category {
        match self {
            TokenKind::Include => Category::Directive,

            TokenKind::KwInt
            | TokenKind::KwFloat
            | TokenKind::KwChar
            | TokenKind::KwIf
            | TokenKind::KwElse
            | TokenKind::KwWhile
            | TokenKind::KwFor
            | TokenKind::KwReturn => Category::Keyword,

            TokenKind::Name => Category::Identifier,
            TokenKind::IntLit => Category::Constant,

            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Eq
            | TokenKind::DoubleEq
            | TokenKind::NotEq
            | TokenKind::Less
            | TokenKind::LessEq
            | TokenKind::Greater
            | TokenKind::GreaterEq
            | TokenKind::OrOr
            | TokenKind::AndAnd => Category::Operator,

            TokenKind::Semi
            | TokenKind::Comma
            | TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::LSquare
            | TokenKind::RSquare
            | TokenKind::LBrace
            | TokenKind::RBrace => Category::Punctuation,

            TokenKind::Whitespace => unreachable!("whitespace is skipped by the lexer"),
        }
    }
}

/// A classified lexical unit: its rule, its location and its exact text.
#[derive(Debug, Clone)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub location: SourceLoc,
    pub text: &'a str,
}

impl Token<'_> {
    pub fn category(&self) -> Category {
        self.kind.category()
    }
}

// Wrapper type for a peekable iterator over tokens
pub type LexerIter<'a> = Peekable<Box<TokenIter<'a>>>;

pub struct TokenIter<'a> {
    inner: SpannedIter<'a, TokenKind>,
    src: &'a str,
}

impl fmt::Display for SourceLoc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(L{}, C{}:{})", self.line, self.start, self.end)
    }
}

impl Default for SourceLoc {
    fn default() -> Self {
        Self {
            line: 1,
            start: 0,
            end: 0,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Category::Directive => write!(f, "Preprocessor Directive"),
            Category::Keyword => write!(f, "Keyword"),
            Category::Identifier => write!(f, "Identifier"),
            Category::Constant => write!(f, "Constant"),
            Category::Operator => write!(f, "Operator"),
            Category::Punctuation => write!(f, "Punctuation"),
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.category(), self.text)
    }
}

impl<'a> TokenIter<'a> {
    // Return the correct location of the token accounting for newlines by
    // using the inner span and directly counting the characters in the source.
    fn get_location(&self) -> SourceLoc {
        let span = self.inner.span();
        let start = span.start;
        let end = span.end;

        let mut line = 1;
        let mut col = 0;

        for (i, c) in self.src.chars().enumerate() {
            if i == start {
                break;
            }

            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }

        SourceLoc {
            line,
            start: col,
            end: col + (end - start),
        }
    }
}

impl<'a> Iterator for TokenIter<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (result, span) = self.inner.next()?;
            match result {
                Ok(kind) => {
                    return Some(Token {
                        kind,
                        location: self.get_location(),
                        text: &self.src[span],
                    });
                }
                // A span no rule matched: stray symbols are dropped silently,
                // never reported.
                Err(()) => continue,
            }
        }
    }
}

/// Return an iterator over the tokens in the source string
pub fn lex_tokens(src: &str) -> LexerIter {
    let iter = TokenIter {
        inner: TokenKind::lexer(src).spanned(),
        src,
    };

    Box::new(iter).peekable()
}
