//! Declaration-before-use checking over the finished syntax tree.

pub mod resolver;
pub mod semantic_error;
