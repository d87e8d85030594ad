use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Another generation run holds an overlapping horizon")]
    ConcurrentGeneration,

    #[error("Invalid version status transition: {from} -> {to}")]
    InvalidStatusTransition { from: String, to: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
