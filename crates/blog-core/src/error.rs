//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures surfaced by entities and use cases.
///
/// The `Display` output of `Validation` and `NotFound` is part of the observable contract;
/// callers show it to clients verbatim.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl DomainError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn author_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: "Author",
            id,
        }
    }

    pub(crate) fn post_not_found(id: i32) -> Self {
        Self::NotFound { entity: "Post", id }
    }
}

/// Result alias used by entities and use cases.
pub type DomainResult<T> = Result<T, DomainError>;

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
