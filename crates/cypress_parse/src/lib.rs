//! Front-end stages for the cypress language: tokenization, structural
//! tree building and tree rendering.

pub mod builder;
pub mod lexer;
pub mod pretty;
pub mod tree;

#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod pretty_tests;
