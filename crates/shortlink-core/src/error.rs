use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}

/// Errors raised by short code generators.
///
/// Generation is local and never touches storage, so the only failure
/// mode is an exhausted or misconfigured generator. Callers treat any
/// generation failure as an internal fault.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("short code space exhausted after {0} codes")]
    Exhausted(u64),
}

/// Errors raised by storage backends.
///
/// `Conflict` is the distinguishable duplicate-key signal: the service
/// reacts to it by regenerating a code, while every other variant is
/// surfaced to callers as an internal fault.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("short code already exists: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}
