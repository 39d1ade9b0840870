use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TypeError {
    #[error("invalid expression structure: expected 3 children, found {found}")]
    MalformedExpression { found: usize },

    #[error("type mismatch in arithmetic expression '{left} {op} {right}'")]
    ArithmeticMismatch {
        left: String,
        op: String,
        right: String,
    },
}
