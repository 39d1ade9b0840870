//! Arithmetic operand compatibility checking over the finished syntax tree.

pub mod type_error;
pub mod typecheck;
