use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Ban source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Reconciliation pass panicked: {0}")]
    ReconciliationPanicked(String),
}
