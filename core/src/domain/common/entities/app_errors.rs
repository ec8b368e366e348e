use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Data access error: {0}")]
    DataAccess(String),

    /// A stored row was read but could not be decoded. The store itself is healthy.
    #[error("Corrupt record: {0}")]
    CorruptRecord(String),

    #[error("Diet plan generation failed: {0}")]
    Generation(String),

    #[error("A diet plan generation is already in progress")]
    GenerationInProgress,

    #[error("Generation result does not belong to the pending request")]
    StaleGeneration,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}
