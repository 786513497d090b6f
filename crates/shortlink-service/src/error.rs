use shortlink_core::{GenerationError, StorageError};
use thiserror::Error;

/// Result type for link service operations.
pub type Result<T> = std::result::Result<T, LinkError>;

/// The caller-visible outcomes of a link operation.
///
/// Every lower-layer failure is translated into exactly one variant
/// before it reaches the transport boundary. The envelope mapping in
/// [`crate::response`] is the single place these become wire status
/// codes: `InvalidInput` and `NotFound` are expected outcomes, while
/// `Generation` and `Storage` both surface as an internal error.
#[derive(Debug, Clone, Error)]
pub enum LinkError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("short code not found")]
    NotFound,
    #[error("code generation failed: {0}")]
    Generation(#[from] GenerationError),
    #[error("storage operation failed: {0}")]
    Storage(#[from] StorageError),
}
