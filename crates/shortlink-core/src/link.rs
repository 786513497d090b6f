use crate::shortcode::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// The stored value for a short code.
///
/// `created_at` is set by the service at insertion time, never by the
/// caller. Records are immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// The original URL that was shortened.
    pub original_url: String,
    /// When the mapping was created.
    pub created_at: Timestamp,
}

/// A complete persisted link, as returned by service operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// The short code that stands in for the original URL.
    pub short_code: ShortCode,
    /// The original URL.
    pub original_url: String,
    /// When the mapping was created.
    pub created_at: Timestamp,
}
