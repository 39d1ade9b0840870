use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemanticError {
    #[error("variable '{0}' used before declaration")]
    UsedBeforeDeclaration(String),
}
