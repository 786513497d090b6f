use crate::error::StorageError;
use crate::link::LinkRecord;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Durable mapping from short code to link record.
///
/// Implementations provide per-operation atomicity; the service layer
/// performs no locking of its own. Operations are futures, so a caller
/// that cancels or times out simply drops the in-flight operation.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Inserts a new link record.
    ///
    /// Never overwrites: inserting an already-taken code returns
    /// [`StorageError::Conflict`].
    async fn insert(&self, code: &ShortCode, record: LinkRecord) -> Result<()>;

    /// Retrieves the link record for a given short code.
    /// Returns `None` when no mapping exists.
    async fn lookup(&self, code: &ShortCode) -> Result<Option<LinkRecord>>;
}

#[async_trait]
impl<R: Repository + ?Sized> Repository for std::sync::Arc<R> {
    async fn insert(&self, code: &ShortCode, record: LinkRecord) -> Result<()> {
        (**self).insert(code, record).await
    }

    async fn lookup(&self, code: &ShortCode) -> Result<Option<LinkRecord>> {
        (**self).lookup(code).await
    }
}
