use thiserror::Error;

/// Error type shared across stubseed crates.
///
/// No variant is retried anywhere; failures propagate to the caller and the
/// whole command is re-run by the operator.
#[derive(Debug, Error)]
pub enum Error {
    /// The target (or a mandatory referenced) table does not exist.
    #[error("table '{0}' not found")]
    TableNotFound(String),
    /// The underlying store is unreachable.
    #[error("connection error: {0}")]
    Connection(String),
    /// A single record failed to persist; aborts the remaining batch.
    #[error("insert failed: {0}")]
    Insert(String),
    /// Other database or catalog failure.
    #[error("database error: {0}")]
    Db(String),
}

/// Convenience alias for results returned by stubseed crates.
pub type Result<T> = std::result::Result<T, Error>;
