//! Service error taxonomy.
//!
//! Four categories, mirroring how failures propagate through command
//! execution:
//!
//! - `InvalidArgument` — programmer error at the boundary (bad identifier
//!   strings, misuse of a handler). Immediate, never retried.
//! - `Business` — an expected, user-facing rule violation raised by the
//!   validation specification. Aborts before any mutation.
//! - `Repository` — data-layer failure, passed through unchanged.
//! - `System` — catch-all wrapping of anything unrecognized, retaining the
//!   original error as `source`.

use thiserror::Error;

/// Result type used across the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Data-layer failure. Passed through the service layer unchanged.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No entity of the given kind exists under the identifier.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The operation conflicts with already-persisted state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The backing store itself failed.
    #[error("backend failure: {0}")]
    Backend(String),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Service-level error returned from command execution.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A caller-supplied argument was unusable (programmer error).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A business rule was violated (raised via the validation specification).
    #[error("business rule violated: {0}")]
    Business(String),

    /// The data layer failed.
    #[error("repository failure: {0}")]
    Repository(#[from] RepositoryError),

    /// Anything unrecognized, normalized at the handler boundary.
    #[error("{message}")]
    System {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ServiceError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn business(msg: impl Into<String>) -> Self {
        Self::Business(msg.into())
    }

    pub fn system(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::System {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn is_business(&self) -> bool {
        matches!(self, Self::Business(_))
    }

    pub fn is_repository(&self) -> bool {
        matches!(self, Self::Repository(_))
    }

    pub fn is_system(&self) -> bool {
        matches!(self, Self::System { .. })
    }
}
