use thiserror::Error;

use crate::repository::RepositoryError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures returned by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No row matched the requested identifier.
    #[error("not found")]
    NotFound,
    /// The request payload failed validation.
    #[error("{0}")]
    Form(String),
    /// The store rejected the write because of a constraint.
    #[error("{0}")]
    Conflict(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ConstraintViolation(message) => ServiceError::Conflict(message),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}
