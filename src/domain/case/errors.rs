use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found")]
    NotFound(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}
